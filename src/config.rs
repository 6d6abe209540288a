//! Relay configuration

use atx_shared::{defaults, SerialFraming};
use std::path::PathBuf;
use std::time::Duration;

/// Everything the relay needs to know about where to send and where to log
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Serial device path (e.g. "/dev/ttyACM0" or a udev symlink)
    pub device_path: String,
    /// Line parameters
    pub framing: SerialFraming,
    /// Upper bound on the write, also used as the port's I/O timeout
    pub timeout: Option<Duration>,
    /// Attempt log; `None` disables it
    pub log_path: Option<PathBuf>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            device_path: defaults::DEVICE_PATH.into(),
            framing: SerialFraming::default(),
            timeout: Some(Duration::from_millis(defaults::TIMEOUT_MS)),
            log_path: Some(PathBuf::from(defaults::LOG_PATH)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RelayConfig::default();
        assert_eq!(config.device_path, "/dev/ttyACM0");
        assert_eq!(config.framing.to_string(), "115200-8-N-1");
        assert_eq!(config.timeout, Some(Duration::from_secs(1)));
        assert_eq!(
            config.log_path.as_deref(),
            Some(std::path::Path::new("/tmp/send-atx-command.log"))
        );
    }
}
