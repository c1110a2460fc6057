// libtransit/src/protocol/sink.rs

//! Outbound serial channel.

use std::io::Write;

use crate::constants::{LINE_END, NAK};
use crate::protocol::Frame;
use crate::Result;

/// Outbound side of the serial channel. Implementors only need to move
/// bytes; framing is layered on top by the provided methods.
pub trait PacketSink {
    /// Write raw bytes to the channel
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()>;

    /// Emit one framed message, terminated like any other line so a
    /// host reading line by line sees each packet as soon as it ends.
    fn send_packet(&mut self, payload: &str) -> Result<()> {
        let mut frame = Frame::encode(payload.as_bytes())?;
        frame.extend_from_slice(LINE_END);
        log::trace!("packet out: {}", payload);
        self.write_bytes(&frame)
    }

    /// Emit an unframed text line (greeting, APDU traces)
    fn write_line(&mut self, text: &str) -> Result<()> {
        self.write_bytes(text.as_bytes())?;
        self.write_bytes(LINE_END)
    }

    /// Tell the host its last packet overflowed the command buffer
    fn signal_overflow(&mut self) -> Result<()> {
        self.write_bytes(&[NAK])
    }
}

impl PacketSink for Vec<u8> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl<S: PacketSink + ?Sized> PacketSink for &mut S {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).write_bytes(bytes)
    }
}

/// PacketSink over any `std::io::Write` (a serial port, stdout, a file).
/// Every write is flushed so packets reach the host as soon as they are
/// complete.
#[derive(Debug)]
pub struct PacketWriter<W: Write> {
    inner: W,
}

impl<W: Write> PacketWriter<W> {
    /// Wrap a byte stream.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// The wrapped stream
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap, returning the stream
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> PacketSink for PacketWriter<W> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        self.inner.flush()?;
        Ok(())
    }
}
