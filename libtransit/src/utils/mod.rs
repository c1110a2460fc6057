//! Utilities for libtransit: byte extraction, number formatting, hex
//! rendering and timing helpers.

pub mod bytes;
pub mod hex;
pub mod timeout;

pub use bytes::*;
pub use hex::*;
pub use timeout::*;
