//! Command relay - checks, opens, writes and records a single token

use super::RelayError;
use crate::config::RelayConfig;
use crate::logbook::{AttemptLog, FileLog};
use crate::transport::{PortConnector, SerialConnector};
use atx_shared::CommandToken;
use bytes::Bytes;
use std::io;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info, warn};

/// Stages of a single relay attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayStage {
    Start,
    ArgumentCheck,
    Open,
    Write,
    Close,
    Done,
    /// Terminal state for any failure
    ReportedError,
}

/// What a successful relay sent
#[derive(Debug, Clone)]
pub struct RelayReport {
    pub token: CommandToken,
    /// Bytes handed to the device
    pub frame: Bytes,
    pub bytes_written: usize,
}

/// Relays one command token to the controller per call
pub struct CommandRelay<C: PortConnector> {
    config: RelayConfig,
    connector: C,
    log: Option<Box<dyn AttemptLog>>,
}

impl CommandRelay<SerialConnector> {
    /// Relay over the real serial device, logging to `config.log_path` if set
    pub fn serial(config: RelayConfig) -> Self {
        let connector = SerialConnector::from_config(&config);
        let log = config
            .log_path
            .clone()
            .map(|path| {
                let log = FileLog::new(path);
                debug!("Recording attempts to {}", log.path().display());
                Box::new(log) as Box<dyn AttemptLog>
            });
        Self::new(config, connector, log)
    }
}

impl<C: PortConnector> CommandRelay<C> {
    pub fn new(config: RelayConfig, connector: C, log: Option<Box<dyn AttemptLog>>) -> Self {
        Self {
            config,
            connector,
            log,
        }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Send `argument` to the device. Every failure is logged and returned, never panics.
    pub async fn relay(&self, argument: Option<String>) -> Result<RelayReport, RelayError> {
        self.enter(RelayStage::Start);

        let result = self.run(argument).await;

        match &result {
            Ok(report) => {
                self.enter(RelayStage::Done);
                info!(
                    "Relayed {:?} ({} bytes) to {}",
                    report.token.as_str(),
                    report.bytes_written,
                    self.connector.device()
                );
            }
            Err(e) => self.report(e),
        }

        result
    }

    /// Record a failure that happened before the relay could run, e.g. a bad command line
    pub fn reject(&self, error: RelayError) -> RelayError {
        self.enter(RelayStage::Start);
        self.report(&error);
        error
    }

    fn report(&self, e: &RelayError) {
        self.enter(RelayStage::ReportedError);
        error!(kind = ?e.io_kind(), "Relay failed during {:?}: {}", e.stage(), e);
        self.record(&format!("Error: {}", e));
    }

    async fn run(&self, argument: Option<String>) -> Result<RelayReport, RelayError> {
        self.enter(RelayStage::ArgumentCheck);
        let token = argument
            .map(CommandToken::from)
            .ok_or(RelayError::MissingArgument)?;

        let frame = token.to_frame();
        self.record(&format!("Received argument: {}", token.as_str().escape_debug()));
        self.record(&format!("Encoded bytes: {:?}", frame.as_ref()));

        match token.known() {
            Ok(command) => debug!("{} is {}", command, command.describe()),
            Err(e) => warn!(
                "{:?} is not a known command, forwarding anyway: {}",
                token.as_str(),
                e
            ),
        }

        self.enter(RelayStage::Open);
        let device = self.connector.device();
        let mut port = self
            .connector
            .open()
            .await
            .map_err(|source| RelayError::DeviceUnavailable {
                device: device.to_string(),
                source,
            })?;

        self.enter(RelayStage::Write);
        let written = self.transmit(&mut port, &frame).await;

        self.enter(RelayStage::Close);
        drop(port);

        let bytes_written = written.map_err(|source| RelayError::WriteFailure {
            device: device.to_string(),
            source,
        })?;

        self.record(&format!(
            "Successfully wrote {} bytes to serial port {}",
            bytes_written, device
        ));

        Ok(RelayReport {
            token,
            frame,
            bytes_written,
        })
    }

    /// Write the whole frame and flush, bounded by the configured timeout
    async fn transmit(&self, port: &mut C::Port, frame: &[u8]) -> io::Result<usize> {
        let write = async {
            port.write_all(frame).await?;
            port.flush().await?;
            Ok::<_, io::Error>(frame.len())
        };

        match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, write).await.unwrap_or_else(|_| {
                Err(io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("write timed out after {:?}", limit),
                ))
            }),
            None => write.await,
        }
    }

    fn enter(&self, stage: RelayStage) {
        debug!("Relay stage: {:?}", stage);
    }

    fn record(&self, message: &str) {
        if let Some(log) = &self.log {
            if let Err(e) = log.append(message) {
                warn!("Failed to append to attempt log: {}", e);
            }
        }
    }
}
