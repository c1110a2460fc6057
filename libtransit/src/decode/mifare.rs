// libtransit/src/decode/mifare.rs

//! Memory-model cards (Mifare Ultralight family, 7-byte UID) whose issuer
//! data sits in pages 4..7.

use crate::card::{CardIdentity, InfoText};
use crate::constants::{
    HSL_ISSUER_SIGNATURE, MIFARE_CMD_READ, MIFARE_ISSUER_PAGE, MIFARE_READ_LEN, MIFARE_UID_LEN,
    TROIKA_MARKER,
};
use crate::decode::{CardDecoder, TapContext};
use crate::types::InfoKind;
use crate::utils::{be24, be32, bytes_to_hex, nibble_to_hex, zero_padded_decimal};
use crate::{Error, Result};

/// One MIFARE_CMD_READ worth of data: four consecutive 4-byte pages
pub type PageBlock = [u8; MIFARE_READ_LEN];

/// Issuer layouts recognised in the page block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MifareLayout {
    /// Helsinki Region Transport
    Hsl,
    /// Moscow Troika
    Troika,
}

impl MifareLayout {
    /// Classify a page block. HSL is tested first and wins if both match.
    pub fn detect(page: &PageBlock) -> Option<Self> {
        if be24(&page[1..]) == HSL_ISSUER_SIGNATURE {
            return Some(Self::Hsl);
        }
        if page[0] == TROIKA_MARKER && page[1] & 0xc0 == 0xc0 {
            return Some(Self::Troika);
        }
        None
    }

    /// Scheme reported for this layout
    pub fn info_kind(&self) -> InfoKind {
        match self {
            Self::Hsl => InfoKind::SerialHsl,
            Self::Troika => InfoKind::SerialTroika,
        }
    }

    /// Render the serial for this layout.
    pub fn serial(&self, uid: &[u8], page: &PageBlock) -> String {
        match self {
            Self::Hsl => hsl_serial(uid, page),
            Self::Troika => troika_serial(page),
        }
    }
}

/// HSL: five page bytes as hex, then a 7-digit number folded out of the
/// UID, then the high nibble of page byte 6.
///
/// `uid` must be at least 7 bytes.
pub fn hsl_serial(uid: &[u8], page: &PageBlock) -> String {
    let folded = (be24(&uid[1..4]) ^ be24(&uid[4..7])) & 0x7f_ffff;
    let mut s = bytes_to_hex(&page[1..6]);
    s.push_str(&zero_padded_decimal(folded, 7));
    s.push(nibble_to_hex(page[6] >> 4));
    s
}

/// Troika: the 32-bit serial stored at bits 20..52 of the block.
pub fn troika_serial(page: &PageBlock) -> String {
    let serial = (be32(&page[0..4]) << 20) | (be32(&page[4..8]) >> 12);
    serial.to_string()
}

/// Read the 16-byte block starting at `page`.
pub fn read_pages(ctx: &mut TapContext<'_>, page: u8) -> Result<PageBlock> {
    let resp = ctx.exchange_exact(&[MIFARE_CMD_READ, page], MIFARE_READ_LEN)?;
    let mut block = [0u8; MIFARE_READ_LEN];
    block.copy_from_slice(&resp);
    Ok(block)
}

/// Decoder for 7-byte-UID memory cards
pub struct MifareDecoder;

impl CardDecoder for MifareDecoder {
    fn name(&self) -> &'static str {
        "mifare"
    }

    fn decode(&self, ctx: &mut TapContext<'_>, card: &mut CardIdentity) -> Result<InfoKind> {
        let uid_len = card.uid().len();
        if uid_len != MIFARE_UID_LEN {
            return Err(Error::UnsupportedUid(uid_len));
        }

        let page = read_pages(ctx, MIFARE_ISSUER_PAGE)?;
        ctx.send_raw("page[4..7]", &page)?;

        let layout = MifareLayout::detect(&page).ok_or(Error::Unrecognized)?;
        let info = InfoText::new(layout.serial(card.uid().as_bytes(), &page))?;
        let kind = layout.info_kind();
        card.replace_info(kind, info, ctx.sink())?;
        Ok(kind)
    }
}
