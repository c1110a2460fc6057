// libtransit/src/constants.rs
//! Protocol constants shared across the crate

/// Start of an outbound or inbound packet
pub const STX: u8 = 0x02;

/// End of an outbound or inbound packet
pub const ETX: u8 = 0x04;

/// Terminator after every outbound packet and unframed line
pub const LINE_END: &[u8] = b"\r\n";

/// Written on the wire when an inbound packet overflows the command buffer
pub const NAK: u8 = 0x15;

/// Capacity of the inbound command buffer
pub const COMMAND_BUFFER_LEN: usize = 8;

/// Longest info text a CardIdentity may carry
pub const INFO_CAPACITY: usize = 20;

/// Longest anticollision UID a CardIdentity may carry
pub const UID_CAPACITY: usize = 8;

/// PN532 InAutoPoll target type codes (User Manual 7.3.13): Mifare
pub const TARGET_TYPE_MIFARE: u8 = 0x10;
/// FeliCa at 212 kbps
pub const TARGET_TYPE_FELICA_212: u8 = 0x11;
/// FeliCa at 424 kbps
pub const TARGET_TYPE_FELICA_424: u8 = 0x12;
/// ISO14443A card with an application directory
pub const TARGET_TYPE_ISO14443A: u8 = 0x20;

/// Mifare Ultralight READ (returns four 4-byte pages)
pub const MIFARE_CMD_READ: u8 = 0x30;

/// First page of the issuer data block on Mifare memory cards
pub const MIFARE_ISSUER_PAGE: u8 = 4;

/// Bytes returned by a single MIFARE_CMD_READ
pub const MIFARE_READ_LEN: usize = 16;

/// UID length of the memory-card family carrying HSL/Troika data
pub const MIFARE_UID_LEN: usize = 7;

/// HSL issuer prefix found in page bytes 1..4
pub const HSL_ISSUER_SIGNATURE: u32 = 0x92_46_21;

/// Troika marker byte at page offset 0
pub const TROIKA_MARKER: u8 = 0x45;

/// DESFire-style native command listing the card's application IDs
pub const ISO14443A_CMD_GET_APPLICATION_IDS: u8 = 0x6A;
/// Select an application by its 3-byte ID
pub const ISO14443A_CMD_SELECT_APPLICATION: u8 = 0x5A;
/// Read bytes from a file of the selected application
pub const ISO14443A_CMD_READ_DATA: u8 = 0xBD;

/// Application ID of Myki (Melbourne)
pub const APP_ID_MYKI: u32 = 0x00_11_F2;
/// Opal (Sydney)
pub const APP_ID_OPAL: u32 = 0x31_45_53;
/// Clipper (San Francisco Bay Area)
pub const APP_ID_CLIPPER: u32 = 0x90_11_F2;

/// Fixed prefix of every Opal card number
pub const OPAL_SERIAL_PREFIX: &str = "308522";

/// Stand-in for the Myki check digit, which is not computed
pub const MYKI_CHECK_PLACEHOLDER: char = 'x';

/// How long an LED mode set over the serial line is held
pub const LED_HOLD_MS: u64 = 20_000;
