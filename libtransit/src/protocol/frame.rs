// libtransit/src/protocol/frame.rs

//! STX/ETX packet framing.

use crate::constants::{ETX, STX};
use crate::{Error, Result};

/// Packet framing for the serial channel.
/// Format: [STX] [Payload(n)] [ETX]
/// STX: 0x02
/// ETX: 0x04
/// The payload is ASCII text and may not contain STX or ETX.
pub struct Frame;

impl Frame {
    /// Wrap a payload into a full packet
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if let Some(pos) = payload.iter().position(|&b| b == STX || b == ETX) {
            return Err(Error::FrameFormat(format!(
                "payload contains delimiter {:#04x} at offset {}",
                payload[pos], pos
            )));
        }

        let mut out = Vec::with_capacity(payload.len() + 2);
        out.push(STX);
        out.extend_from_slice(payload);
        out.push(ETX);
        Ok(out)
    }

    /// Decode a single complete packet and return the payload
    pub fn decode(frame: &[u8]) -> Result<Vec<u8>> {
        if frame.len() < 2 {
            return Err(Error::InvalidLength {
                expected: 2,
                actual: frame.len(),
            });
        }
        if frame[0] != STX {
            return Err(Error::FrameFormat("missing STX".into()));
        }
        if frame[frame.len() - 1] != ETX {
            return Err(Error::FrameFormat("missing ETX".into()));
        }

        let payload = &frame[1..frame.len() - 1];
        if payload.iter().any(|&b| b == STX || b == ETX) {
            return Err(Error::FrameFormat("nested delimiter".into()));
        }
        Ok(payload.to_vec())
    }

    /// Pull every complete packet payload out of a captured byte stream.
    /// Unframed text between packets is skipped, as is a packet cut short
    /// by a fresh STX.
    pub fn split_stream(stream: &[u8]) -> Vec<Vec<u8>> {
        let mut out = Vec::new();
        let mut current: Option<Vec<u8>> = None;
        for &b in stream {
            match b {
                STX => current = Some(Vec::new()),
                ETX => {
                    if let Some(payload) = current.take() {
                        out.push(payload);
                    }
                }
                _ => {
                    if let Some(payload) = current.as_mut() {
                        payload.push(b);
                    }
                }
            }
        }
        out
    }
}
