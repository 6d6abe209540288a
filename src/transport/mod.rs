pub mod serial;
pub mod traits;

pub use serial::SerialConnector;
pub use traits::PortConnector;
