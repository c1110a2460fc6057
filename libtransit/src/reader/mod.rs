// libtransit/src/reader/mod.rs

//! The tap loop: turns cards in the field into packets on the serial
//! channel and applies the host's commands coming back.

use std::time::{Duration, Instant};

use crate::card::CardIdentity;
use crate::decode::{decoder_for, Iso7816Probe, TapContext};
use crate::led::LedPair;
use crate::protocol::{CommandReceiver, ControlCommand, InboundEvent, PacketSink};
use crate::transport::{Target, Transceiver};
use crate::types::{OutputFlags, UidKind};
use crate::utils::{bytes_to_hex, default_led_hold};
use crate::Result;

mod builder;
pub use builder::ReaderBuilder;

/// Owns the radio, the serial channel and all per-session state.
///
/// Only I/O errors from the sink escape `poll` and `handle_serial`; every
/// other failure is logged and the reader waits for the next tap.
pub struct Reader<S: PacketSink> {
    transceiver: Box<dyn Transceiver>,
    sink: S,
    flags: OutputFlags,
    leds: LedPair,
    led_hold: Duration,
    receiver: CommandReceiver,
    present: Option<CardIdentity>,
}

impl<S: PacketSink> Reader<S> {
    /// A reader with no output flags and the default LED hold.
    pub fn new(transceiver: Box<dyn Transceiver>, sink: S) -> Self {
        Self {
            transceiver,
            sink,
            flags: OutputFlags::empty(),
            leds: LedPair::new(),
            led_hold: default_led_hold(),
            receiver: CommandReceiver::new(),
            present: None,
        }
    }

    /// Look at the field once. Returns the identity of a newly arrived
    /// card after it has been reported, or `None` when the field is empty,
    /// listing failed, or the same card is still present.
    pub fn poll(&mut self) -> Result<Option<CardIdentity>> {
        let targets = match self.transceiver.list_targets() {
            Ok(targets) => targets,
            Err(e) => {
                log::warn!("listing targets failed: {}", e);
                return Ok(None);
            }
        };

        let Some(target) = targets.first() else {
            if let Some(gone) = self.present.take() {
                log::debug!("{} left the field", gone.render_uid());
            }
            return Ok(None);
        };

        if self.present.as_ref() == Some(&CardIdentity::from(target)) {
            return Ok(None);
        }

        let card = self.process_target(target)?;
        self.present = Some(card.clone());
        Ok(Some(card))
    }

    /// Decode and report one target, regardless of what was seen before.
    pub fn process_target(&mut self, target: &Target) -> Result<CardIdentity> {
        let mut card = CardIdentity::from(target);
        log::info!("tap {}", card.render_uid());

        if self.flags.contains(OutputFlags::RAW_TAG) {
            self.sink
                .send_packet(&format!("rawtag={}", card.render_uid()))?;
        }

        let decoder = decoder_for(card.uid_kind());
        let mut ctx = TapContext::new(
            &mut *self.transceiver,
            target.handle,
            &mut self.sink,
            self.flags,
        );
        match decoder.decode(&mut ctx, &mut card) {
            Ok(kind) => log::debug!("{} decoder found {}", decoder.name(), kind),
            Err(e) if e.is_io() => return Err(e),
            Err(e) => log::debug!("{} decoder: {}", decoder.name(), e),
        }

        if self.flags.contains(OutputFlags::EXTRA) && card.uid_kind() == UidKind::Iso14443a {
            Iso7816Probe::run(&mut ctx)?;
        }

        card.send_best_identity(&mut self.sink)?;
        Ok(card)
    }

    /// Feed one byte received from the host.
    pub fn handle_serial(&mut self, byte: u8) -> Result<()> {
        match self.receiver.push(byte) {
            None => Ok(()),
            Some(InboundEvent::Overflow) => {
                log::warn!("inbound packet overflowed the command buffer");
                self.sink.signal_overflow()
            }
            Some(InboundEvent::Frame(payload)) => match ControlCommand::parse(&payload) {
                Some(cmd) => self.apply_command(cmd),
                None => {
                    log::debug!("ignoring inbound packet [{}]", bytes_to_hex(&payload));
                    Ok(())
                }
            },
        }
    }

    /// Feed a run of bytes received from the host, in order.
    pub fn handle_serial_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        bytes.iter().try_for_each(|&b| self.handle_serial(b))
    }

    fn apply_command(&mut self, cmd: ControlCommand) -> Result<()> {
        log::debug!("command {:?}", cmd);
        match cmd {
            ControlCommand::Hello => return self.sink.write_line("Hello"),
            ControlCommand::Led(code) => {
                self.leds.apply(code, Instant::now(), self.led_hold);
            }
            ControlCommand::RawAll(on) => self.flags.set(OutputFlags::RAW_ALL, on),
            ControlCommand::RawTag(on) => self.flags.set(OutputFlags::RAW_TAG, on),
        }
        Ok(())
    }

    /// Turn off LEDs whose hold has lapsed. Returns whether any changed.
    pub fn expire_leds(&mut self, now: Instant) -> bool {
        self.leds.expire(now)
    }

    /// Current output switches
    pub fn flags(&self) -> OutputFlags {
        self.flags
    }

    /// Replace the output switches
    pub fn set_flags(&mut self, flags: OutputFlags) {
        self.flags = flags;
    }

    /// Current LED state
    pub fn leds(&self) -> &LedPair {
        &self.leds
    }

    /// The card currently held in the field, if any
    pub fn present(&self) -> Option<&CardIdentity> {
        self.present.as_ref()
    }

    /// The serial channel
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The serial channel, mutably
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Tear down the reader, returning the serial channel
    pub fn into_sink(self) -> S {
        self.sink
    }
}
