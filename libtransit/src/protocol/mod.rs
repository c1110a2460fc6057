// libtransit/src/protocol/mod.rs

//! The host-facing serial protocol.
//!
//! Outbound traffic is framed text packets plus a few unframed lines;
//! inbound traffic is single-character commands in the same framing.

pub mod control;
pub mod frame;
pub mod receiver;
pub mod sink;

pub use control::ControlCommand;
pub use frame::Frame;
pub use receiver::{CommandReceiver, InboundEvent};
pub use sink::{PacketSink, PacketWriter};
