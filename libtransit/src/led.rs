// libtransit/src/led.rs

//! State of the two indicator LEDs driven over the serial line.
//!
//! Only the requested mode and its deadline live here. Turning modes into
//! pin levels is the firmware's business.

use std::time::{Duration, Instant};

use derive_more::Display;

/// Display pattern of one LED
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LedMode {
    /// Dark
    #[default]
    #[display(fmt = "off")]
    Off,
    /// Lit
    #[display(fmt = "on")]
    On,
    /// Blinking, first phase
    #[display(fmt = "blink1")]
    Blink1,
    /// Blinking, opposite phase to `Blink1`
    #[display(fmt = "blink2")]
    Blink2,
}

/// Mode of one LED and when it lapses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedStatus {
    /// Current pattern
    pub mode: LedMode,
    /// When the mode lapses back to `Off`; `None` holds it indefinitely
    pub hold_until: Option<Instant>,
}

impl LedStatus {
    fn hold(&mut self, mode: LedMode, now: Instant, hold: Duration) {
        self.mode = mode;
        self.hold_until = Some(now + hold);
    }

    fn off(&mut self) {
        self.mode = LedMode::Off;
        self.hold_until = None;
    }

    /// Drop back to `Off` once the deadline has passed. Returns whether the
    /// mode changed.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.hold_until {
            Some(deadline) if now >= deadline => {
                self.off();
                true
            }
            _ => false,
        }
    }
}

/// LED1 shows status and activity, LED2 is reserved for errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedPair {
    /// Status and activity LED
    pub led1: LedStatus,
    /// Error LED
    pub led2: LedStatus,
}

impl LedPair {
    /// Both LEDs off
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an LED command digit. Codes above 7 are ignored and reported
    /// as `false`.
    ///
    /// | code | LED1   | LED2   |
    /// |------|--------|--------|
    /// | 0    | off    | off    |
    /// | 1    | on     |        |
    /// | 2    |        | on     |
    /// | 3    | blink1 |        |
    /// | 4    |        | blink1 |
    /// | 5    | blink2 |        |
    /// | 6    |        | blink2 |
    /// | 7    | blink1 | blink2 |
    pub fn apply(&mut self, code: u8, now: Instant, hold: Duration) -> bool {
        match code {
            0 => {
                self.led1.off();
                self.led2.off();
            }
            1 => self.led1.hold(LedMode::On, now, hold),
            2 => self.led2.hold(LedMode::On, now, hold),
            3 => self.led1.hold(LedMode::Blink1, now, hold),
            4 => self.led2.hold(LedMode::Blink1, now, hold),
            5 => self.led1.hold(LedMode::Blink2, now, hold),
            6 => self.led2.hold(LedMode::Blink2, now, hold),
            7 => {
                self.led1.hold(LedMode::Blink1, now, hold);
                self.led2.hold(LedMode::Blink2, now, hold);
            }
            _ => return false,
        }
        log::debug!("led1={} led2={}", self.led1.mode, self.led2.mode);
        true
    }

    /// Turn off any LED whose hold has lapsed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let a = self.led1.expire(now);
        let b = self.led2.expire(now);
        a || b
    }
}
