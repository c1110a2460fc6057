//! Timing helpers.
//!
//! The reader keeps no clock of its own; callers pass `Instant`s in and
//! these helpers only name the durations involved.

use std::time::Duration;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// How long an LED mode set over the serial line is held.
pub fn default_led_hold() -> Duration {
    ms(crate::constants::LED_HOLD_MS)
}
