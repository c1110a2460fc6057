// libtransit/src/protocol/control.rs

//! Inbound command set.

/// Single-character commands accepted inside an inbound packet.
/// None of them produce a reply packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    /// `H`: print an unframed greeting line
    Hello,
    /// `0`..`7`: LED pattern (value is the digit, 0..=7)
    Led(u8),
    /// `r` / `R`: enable / disable raw-all output
    RawAll(bool),
    /// `t` / `T`: enable / disable raw-tag output
    RawTag(bool),
}

impl ControlCommand {
    /// Parse a received packet payload. Only one-byte payloads carry a
    /// command; longer ones are valid packets with no implemented meaning.
    pub fn parse(payload: &[u8]) -> Option<Self> {
        match payload {
            [b] => Self::from_byte(*b),
            _ => None,
        }
    }

    /// Map one command byte; unknown bytes give `None`.
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'H' => Some(Self::Hello),
            b'0'..=b'7' => Some(Self::Led(b - b'0')),
            b'r' => Some(Self::RawAll(true)),
            b'R' => Some(Self::RawAll(false)),
            b't' => Some(Self::RawTag(true)),
            b'T' => Some(Self::RawTag(false)),
            _ => None,
        }
    }
}
