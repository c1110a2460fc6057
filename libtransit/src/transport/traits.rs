// libtransit/src/transport/traits.rs

//! The radio abstraction decoders are written against.

use crate::types::{Uid, UidKind};
use crate::Result;

/// Transceiver-assigned handle of a listed target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetHandle(pub u8);

/// A card currently visible to the transceiver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    /// Handle to address exchanges to
    pub handle: TargetHandle,
    /// Card technology
    pub uid_kind: UidKind,
    /// Anticollision UID
    pub uid: Uid,
}

impl Target {
    /// Describe a listed target
    pub fn new(handle: TargetHandle, uid_kind: UidKind, uid: Uid) -> Self {
        Self {
            handle,
            uid_kind,
            uid,
        }
    }
}

/// Transceiver abstracts the NFC radio away from decoding logic.
///
/// Calls block until the radio answers. A failed exchange is final for
/// that attempt; decoders never retry.
pub trait Transceiver {
    /// List the targets currently in the field
    fn list_targets(&mut self) -> Result<Vec<Target>>;

    /// Send command bytes to a target and return its response bytes
    fn exchange(&mut self, target: TargetHandle, command: &[u8]) -> Result<Vec<u8>>;
}

impl<T: Transceiver + ?Sized> Transceiver for Box<T> {
    fn list_targets(&mut self) -> Result<Vec<Target>> {
        (**self).list_targets()
    }

    fn exchange(&mut self, target: TargetHandle, command: &[u8]) -> Result<Vec<u8>> {
        (**self).exchange(target, command)
    }
}
