//! Serial transport for the ATX switch controller

use crate::config::RelayConfig;
use crate::transport::traits::PortConnector;
use async_trait::async_trait;
use atx_shared::SerialFraming;
use std::io;
use std::time::Duration;
use tokio_serial::{SerialPortBuilder, SerialPortBuilderExt, SerialStream};

/// Opens the controller's serial device with fixed framing
#[derive(Debug, Clone)]
pub struct SerialConnector {
    path: String,
    framing: SerialFraming,
    timeout: Option<Duration>,
}

impl SerialConnector {
    pub fn new(path: impl Into<String>, framing: SerialFraming, timeout: Option<Duration>) -> Self {
        Self {
            path: path.into(),
            framing,
            timeout,
        }
    }

    pub fn from_config(config: &RelayConfig) -> Self {
        Self::new(config.device_path.clone(), config.framing, config.timeout)
    }

    fn builder(&self) -> SerialPortBuilder {
        let builder = tokio_serial::new(self.path.as_str(), self.framing.baud_rate)
            .data_bits(tokio_serial::DataBits::Eight)
            .parity(tokio_serial::Parity::None)
            .stop_bits(tokio_serial::StopBits::One)
            .flow_control(tokio_serial::FlowControl::None);

        match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        }
    }
}

#[async_trait]
impl PortConnector for SerialConnector {
    type Port = SerialStream;

    async fn open(&self) -> io::Result<Self::Port> {
        // The TTY is opened exclusively; a second holder gets EBUSY right away.
        let stream = self.builder().open_native_async().map_err(io::Error::from)?;
        tracing::debug!("Opened {} at {}", self.path, self.framing);
        Ok(stream)
    }

    fn device(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector_from_config() {
        let config = RelayConfig {
            device_path: "/dev/ttyATX".into(),
            ..Default::default()
        };
        let connector = SerialConnector::from_config(&config);
        assert_eq!(connector.device(), "/dev/ttyATX");
        assert_eq!(connector.timeout, config.timeout);
        assert_eq!(connector.framing, SerialFraming::default());
    }

    #[tokio::test]
    async fn test_open_missing_device_fails() {
        let connector = SerialConnector::new(
            "/dev/atx-relay-does-not-exist",
            SerialFraming::default(),
            Some(Duration::from_millis(100)),
        );
        assert!(connector.open().await.is_err());
    }
}
