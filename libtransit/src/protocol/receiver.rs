// libtransit/src/protocol/receiver.rs

//! Inbound packet accumulation.

use crate::constants::{COMMAND_BUFFER_LEN, ETX, STX};

/// Something the receiver wants its owner to act on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// A complete packet; the payload may be any length up to the buffer size
    Frame(Vec<u8>),
    /// The open packet outgrew the buffer and was dropped
    Overflow,
}

/// Byte-at-a-time accumulator for inbound packets.
///
/// STX (re)opens a packet, discarding anything partially collected. Bytes
/// seen while no packet is open are dropped. The buffer holds
/// `COMMAND_BUFFER_LEN` bytes; one more closes the packet with a single
/// `Overflow` and everything up to the next STX is dropped.
#[derive(Debug, Clone)]
pub struct CommandReceiver {
    buf: [u8; COMMAND_BUFFER_LEN],
    pos: Option<usize>,
}

impl Default for CommandReceiver {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandReceiver {
    /// A receiver with no packet open
    pub fn new() -> Self {
        Self {
            buf: [0; COMMAND_BUFFER_LEN],
            pos: None,
        }
    }

    /// True while a packet is open
    pub fn is_open(&self) -> bool {
        self.pos.is_some()
    }

    /// Feed one byte from the wire.
    pub fn push(&mut self, byte: u8) -> Option<InboundEvent> {
        match byte {
            STX => {
                if let Some(pos) = self.pos {
                    log::debug!("inbound packet restarted, dropping {} bytes", pos);
                }
                self.pos = Some(0);
                None
            }
            ETX => self
                .pos
                .take()
                .map(|len| InboundEvent::Frame(self.buf[..len].to_vec())),
            _ => {
                let pos = self.pos?;
                if pos >= COMMAND_BUFFER_LEN {
                    self.pos = None;
                    return Some(InboundEvent::Overflow);
                }
                self.buf[pos] = byte;
                self.pos = Some(pos + 1);
                None
            }
        }
    }
}
