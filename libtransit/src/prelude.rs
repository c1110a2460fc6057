// libtransit/src/prelude.rs

//! Commonly used types, for `use libtransit::prelude::*`.

pub use crate::card::{CardIdentity, InfoText};
pub use crate::decode::{decoder_for, CardDecoder, Iso7816Probe, TapContext};
pub use crate::led::{LedMode, LedPair};
pub use crate::protocol::{Frame, PacketSink, PacketWriter};
pub use crate::reader::{Reader, ReaderBuilder};
pub use crate::transport::{MockTransceiver, Target, TargetHandle, Transceiver};
pub use crate::{AppId, Error, InfoKind, OutputFlags, Result, Uid, UidKind};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_led_hold, ms};
