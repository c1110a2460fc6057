// libtransit/src/types.rs

//! Small value types shared by every layer: card kinds, UIDs,
//! application IDs and output flags.

use crate::constants::{
    TARGET_TYPE_FELICA_212, TARGET_TYPE_FELICA_424, TARGET_TYPE_ISO14443A, TARGET_TYPE_MIFARE,
    UID_CAPACITY,
};
use crate::Error;
use derive_more::Display;

/// Physical card technology reported by the transceiver
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum UidKind {
    /// No card represented
    #[default]
    #[display(fmt = "NONE")]
    None,
    /// A target type this crate does not know how to label
    #[display(fmt = "ERROR")]
    Unknown,
    /// Mifare memory card (PN532 target type 0x10)
    #[display(fmt = "mifare")]
    Mifare,
    /// ISO14443A card with an application directory
    #[display(fmt = "iso14443a")]
    Iso14443a,
    /// FeliCa card at either bit rate
    #[display(fmt = "felica")]
    Felica,
}

impl UidKind {
    /// Classify a PN532 InAutoPoll target type byte.
    pub fn from_target_type(code: u8) -> Self {
        match code {
            TARGET_TYPE_MIFARE => Self::Mifare,
            TARGET_TYPE_FELICA_212 | TARGET_TYPE_FELICA_424 => Self::Felica,
            TARGET_TYPE_ISO14443A => Self::Iso14443a,
            _ => Self::Unknown,
        }
    }

    /// Kinds that may be reported as a `cardid=` fallback
    pub fn is_reportable(&self) -> bool {
        !matches!(self, Self::None | Self::Unknown)
    }
}

/// Ticketing scheme whose serial number was decoded
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum InfoKind {
    /// Nothing decoded yet
    #[default]
    #[display(fmt = "NONE")]
    None,
    /// Helsinki Region Transport (HSL)
    #[display(fmt = "hsl")]
    SerialHsl,
    /// Moscow Troika
    #[display(fmt = "troika")]
    SerialTroika,
    /// Myki; the wire label keeps its historical spelling
    #[display(fmt = "miki")]
    SerialMiki,
    /// Sydney Opal
    #[display(fmt = "opal")]
    SerialOpal,
    /// San Francisco Bay Area Clipper
    #[display(fmt = "clipper")]
    SerialClipper,
}

/// Anticollision UID (0..=8 bytes)
#[derive(Debug, Clone, Copy, Default, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Uid {
    bytes: [u8; UID_CAPACITY],
    len: u8,
}

impl Uid {
    /// The zero-length UID
    pub const EMPTY: Self = Self {
        bytes: [0; UID_CAPACITY],
        len: 0,
    };

    /// The UID bytes actually in use
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Number of UID bytes
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// True for the zero-length UID
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Uppercase hex, two digits per byte
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl PartialEq for Uid {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() > UID_CAPACITY {
            return Err(Error::InvalidLength {
                expected: UID_CAPACITY,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; UID_CAPACITY];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len() as u8,
        })
    }
}

/// 3-byte application identifier on an ISO14443A card
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{:06X}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AppId(u32);

impl AppId {
    /// Build from the low 24 bits of `id`
    pub const fn new(id: u32) -> Self {
        Self(id & 0x00ff_ffff)
    }

    /// Parse three big-endian bytes.
    pub fn from_be_slice(bytes: &[u8]) -> Self {
        Self(crate::utils::be24(bytes))
    }

    /// The ID as an integer
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// The three bytes as sent in a select command
    pub fn to_be_bytes(&self) -> [u8; 3] {
        let b = self.0.to_be_bytes();
        [b[1], b[2], b[3]]
    }
}

/// Verbosity switches toggled over the inbound serial protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OutputFlags(u8);

impl OutputFlags {
    /// Emit `apps=` and `page[4..7]=` raw dumps
    pub const RAW_ALL: Self = Self(1);
    /// Emit a `rawtag=` message for every new target
    pub const RAW_TAG: Self = Self(2);
    /// Run the ISO7816 diagnostic pass on ISO14443A targets
    pub const EXTRA: Self = Self(4);

    /// No output switched on
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build from raw bits; unknown bits are dropped
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0x07)
    }

    /// Raw bit value
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// True if every flag in `other` is set
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Switch the flags in `other` on
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Switch the flags in `other` off
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Switch the flags in `other` on or off
    pub fn set(&mut self, other: Self, on: bool) {
        if on {
            self.insert(other)
        } else {
            self.remove(other)
        }
    }
}

impl std::ops::BitOr for OutputFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
