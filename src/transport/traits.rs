//! Port abstraction so the relay can run against real hardware or a fake

use async_trait::async_trait;
use std::io;
use tokio::io::AsyncWrite;

/// Opens the device the relay writes to
#[async_trait]
pub trait PortConnector: Send + Sync {
    /// The port type this connector produces. Dropping it closes the device.
    type Port: AsyncWrite + Send + Unpin;

    /// Attempt to open the device, failing immediately if it is unavailable
    async fn open(&self) -> io::Result<Self::Port>;

    /// Device identifier used in log lines and errors
    fn device(&self) -> &str;
}
