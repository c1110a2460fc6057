// libtransit/src/transport/mod.rs

//! Access to the NFC radio.

pub mod mock;
pub mod traits;

pub use mock::MockTransceiver;
pub use traits::{Target, TargetHandle, Transceiver};
