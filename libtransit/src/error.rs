// libtransit/src/error.rs

//! Crate-wide error type.

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// A Reader was built without a radio
    #[error("no transceiver configured")]
    NoTransceiver,

    /// The radio reported a failed exchange or listing
    #[error("transceiver exchange failed: {0}")]
    Exchange(String),

    /// A response or slice had the wrong length
    #[error("invalid response length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Length the operation required
        expected: usize,
        /// Length actually seen
        actual: usize,
    },

    /// The decoder only handles a different UID length
    #[error("uid length {0} is not handled by this decoder")]
    UnsupportedUid(usize),

    /// No known layout or application matched
    #[error("card layout not recognised")]
    Unrecognized,

    /// Decoded text does not fit an identity
    #[error("info text too long: capacity {capacity}, got {actual}")]
    InfoOverflow {
        /// Longest text an identity may carry
        capacity: usize,
        /// Length of the rejected text
        actual: usize,
    },

    /// Decoded text contained a byte outside printable ASCII
    #[error("info text contains non-printable byte {0:#04x}")]
    InfoNotPrintable(u8),

    /// A packet was malformed or its payload held a delimiter
    #[error("frame format error: {0}")]
    FrameFormat(String),

    /// Writing to the serial channel failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for failures of the serial sink, which a tap loop cannot
    /// recover from by moving on to the next card.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
