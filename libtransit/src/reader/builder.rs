// libtransit/src/reader/builder.rs

//! Reader configuration.

use std::time::Duration;

use crate::protocol::PacketSink;
use crate::reader::Reader;
use crate::transport::Transceiver;
use crate::types::OutputFlags;
use crate::utils::default_led_hold;
use crate::{Error, Result};

/// Helper to construct a Reader with optional configuration.
pub struct ReaderBuilder<S = Vec<u8>> {
    transceiver: Option<Box<dyn Transceiver>>,
    sink: S,
    flags: OutputFlags,
    led_hold: Duration,
}

impl ReaderBuilder<Vec<u8>> {
    /// Start with an in-memory sink, no output flags and the default LED
    /// hold.
    pub fn new() -> Self {
        Self {
            transceiver: None,
            sink: Vec::new(),
            flags: OutputFlags::empty(),
            led_hold: default_led_hold(),
        }
    }
}

impl Default for ReaderBuilder<Vec<u8>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PacketSink> ReaderBuilder<S> {
    /// Provide an already-created transceiver (e.g. MockTransceiver)
    pub fn with_transceiver(mut self, transceiver: Box<dyn Transceiver>) -> Self {
        self.transceiver = Some(transceiver);
        self
    }

    /// Replace the serial channel
    pub fn with_sink<T: PacketSink>(self, sink: T) -> ReaderBuilder<T> {
        ReaderBuilder {
            transceiver: self.transceiver,
            sink,
            flags: self.flags,
            led_hold: self.led_hold,
        }
    }

    /// Output switches in force at start-up
    pub fn output_flags(mut self, flags: OutputFlags) -> Self {
        self.flags = flags;
        self
    }

    /// How long an LED command holds before lapsing
    pub fn led_hold(mut self, hold: Duration) -> Self {
        self.led_hold = hold;
        self
    }

    /// Consume the builder. Requires a transceiver; otherwise returns
    /// NoTransceiver.
    pub fn build(self) -> Result<Reader<S>> {
        let transceiver = self.transceiver.ok_or(Error::NoTransceiver)?;
        let mut reader = Reader::new(transceiver, self.sink);
        reader.flags = self.flags;
        reader.led_hold = self.led_hold;
        Ok(reader)
    }
}
