// libtransit/src/lib.rs

//! libtransit
//!
//! Transit card identification for PN532-class NFC readers: decodes the
//! ticketing serial of HSL, Troika, Myki, Opal and Clipper cards and
//! reports it to a host over a framed serial protocol.
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod decode;
pub mod error;
pub mod led;
pub mod prelude;
pub mod protocol;
pub mod reader;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
