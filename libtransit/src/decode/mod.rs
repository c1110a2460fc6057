// libtransit/src/decode/mod.rs

//! Card-format decoders and the dispatch between them.
//!
//! Every decoder follows the same contract: on success it has written the
//! decoded serial into the `CardIdentity` (flushing whatever was there) and
//! returns the scheme it found; on any failure it returns an error and the
//! identity is exactly as it was. Nothing is emitted for a failed decode
//! except the raw dumps enabled by `OutputFlags::RAW_ALL`.

use crate::card::CardIdentity;
use crate::protocol::PacketSink;
use crate::transport::{TargetHandle, Transceiver};
use crate::types::{InfoKind, OutputFlags, UidKind};
use crate::utils::{bytes_to_hex, bytes_to_hex_spaced};
use crate::{Error, Result};

pub mod iso14443a;
pub mod iso7816;
pub mod mifare;

pub use iso14443a::Iso14443aDecoder;
pub use iso7816::Iso7816Probe;
pub use mifare::MifareDecoder;

/// Everything a decoder needs for one tap: the radio, the target it talks
/// to, the serial channel and the current verbosity.
pub struct TapContext<'a> {
    transceiver: &'a mut dyn Transceiver,
    target: TargetHandle,
    sink: &'a mut dyn PacketSink,
    flags: OutputFlags,
}

impl<'a> TapContext<'a> {
    /// Bundle the pieces of one tap.
    pub fn new(
        transceiver: &'a mut dyn Transceiver,
        target: TargetHandle,
        sink: &'a mut dyn PacketSink,
        flags: OutputFlags,
    ) -> Self {
        Self {
            transceiver,
            target,
            sink,
            flags,
        }
    }

    /// Handle of the card being decoded
    pub fn target(&self) -> TargetHandle {
        self.target
    }

    /// Output switches in force for this tap
    pub fn flags(&self) -> OutputFlags {
        self.flags
    }

    /// The serial channel, for decoders that write to it directly
    pub fn sink(&mut self) -> &mut dyn PacketSink {
        &mut *self.sink
    }

    /// Send a command to the target and return its response.
    pub fn exchange(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        log::trace!("tx {:?}: {}", self.target, bytes_to_hex_spaced(command));
        let resp = self.transceiver.exchange(self.target, command);
        match &resp {
            Ok(bytes) => log::trace!("rx {:?}: {}", self.target, bytes_to_hex_spaced(bytes)),
            Err(e) => log::trace!("rx {:?}: {}", self.target, e),
        }
        resp
    }

    /// Exchange and require the response to be exactly `expected` bytes.
    pub fn exchange_exact(&mut self, command: &[u8], expected: usize) -> Result<Vec<u8>> {
        let resp = self.exchange(command)?;
        if resp.len() != expected {
            return Err(Error::InvalidLength {
                expected,
                actual: resp.len(),
            });
        }
        Ok(resp)
    }

    /// Emit `<name>=<HEX>` when raw-all output is enabled.
    pub fn send_raw(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        if !self.flags.contains(OutputFlags::RAW_ALL) {
            return Ok(());
        }
        self.sink
            .send_packet(&format!("{}={}", name, bytes_to_hex(bytes)))
    }
}

/// A decoder for one family of card hardware
pub trait CardDecoder {
    /// Short name for log lines
    fn name(&self) -> &'static str;

    /// Try to decode the card's serial into `card`.
    fn decode(&self, ctx: &mut TapContext<'_>, card: &mut CardIdentity) -> Result<InfoKind>;
}

/// Decoder for hardware with no known ticketing layout
pub struct NoopDecoder;

impl CardDecoder for NoopDecoder {
    fn name(&self) -> &'static str {
        "none"
    }

    fn decode(&self, _ctx: &mut TapContext<'_>, _card: &mut CardIdentity) -> Result<InfoKind> {
        Err(Error::Unrecognized)
    }
}

/// Pick the decoder for a card's hardware type. Types without a decoder
/// get a no-op one, leaving the UID as the only identity.
pub fn decoder_for(uid_kind: UidKind) -> Box<dyn CardDecoder> {
    match uid_kind {
        UidKind::Mifare => Box::new(MifareDecoder),
        UidKind::Iso14443a => Box::new(Iso14443aDecoder),
        _ => Box::new(NoopDecoder),
    }
}
