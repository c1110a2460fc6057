// libtransit/src/decode/iso14443a.rs

//! Application-based ISO14443A cards. The card lists its applications;
//! the first one found in `APPLICATIONS` decides how the serial is read.

use crate::card::{CardIdentity, InfoText};
use crate::constants::{
    APP_ID_CLIPPER, APP_ID_MYKI, APP_ID_OPAL, ISO14443A_CMD_GET_APPLICATION_IDS,
    ISO14443A_CMD_READ_DATA, ISO14443A_CMD_SELECT_APPLICATION, MYKI_CHECK_PLACEHOLDER,
    OPAL_SERIAL_PREFIX,
};
use crate::decode::{CardDecoder, TapContext};
use crate::types::{AppId, InfoKind};
use crate::utils::{be32, le32, zero_padded_decimal};
use crate::{Error, Result};

type AppDecodeFn = fn(&mut TapContext<'_>, &mut CardIdentity) -> Result<InfoKind>;

/// A known transit application and the routine that reads its serial
pub struct AppEntry {
    /// Application ID on the card
    pub id: AppId,
    /// Scheme name for log lines
    pub name: &'static str,
    decode: AppDecodeFn,
}

impl AppEntry {
    /// Select this application and decode its serial into `card`.
    pub fn decode(&self, ctx: &mut TapContext<'_>, card: &mut CardIdentity) -> Result<InfoKind> {
        (self.decode)(ctx, card)
    }
}

impl std::fmt::Debug for AppEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppEntry")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

/// Known applications
pub static APPLICATIONS: [AppEntry; 3] = [
    AppEntry {
        id: AppId::new(APP_ID_MYKI),
        name: "myki",
        decode: decode_myki,
    },
    AppEntry {
        id: AppId::new(APP_ID_OPAL),
        name: "opal",
        decode: decode_opal,
    },
    AppEntry {
        id: AppId::new(APP_ID_CLIPPER),
        name: "clipper",
        decode: decode_clipper,
    },
];

/// Table entry for a known application ID
pub fn lookup(id: AppId) -> Option<&'static AppEntry> {
    APPLICATIONS.iter().find(|e| e.id == id)
}

/// Split a Get Application IDs response into IDs. The first byte is a
/// status byte; an incomplete trailing ID is dropped.
pub fn parse_application_ids(resp: &[u8]) -> Vec<AppId> {
    resp.get(1..)
        .unwrap_or_default()
        .chunks_exact(3)
        .map(AppId::from_be_slice)
        .collect()
}

/// Ask the card for its application IDs. A failed exchange is treated as
/// a card with no applications. Only the first response frame is read;
/// cards with more IDs than fit in one frame are not followed up.
pub fn list_applications(ctx: &mut TapContext<'_>) -> Result<Vec<AppId>> {
    let resp = match ctx.exchange(&[ISO14443A_CMD_GET_APPLICATION_IDS]) {
        Ok(resp) => resp,
        Err(e) => {
            log::debug!("get application ids failed: {}", e);
            Vec::new()
        }
    };
    ctx.send_raw("apps", &resp)?;
    Ok(parse_application_ids(&resp))
}

/// Select `id`. Any response counts as success.
pub fn select_application(ctx: &mut TapContext<'_>, id: AppId) -> Result<()> {
    let [a, b, c] = id.to_be_bytes();
    ctx.exchange(&[ISO14443A_CMD_SELECT_APPLICATION, a, b, c])?;
    Ok(())
}

/// Encode a Read Data command (24-bit offset and length, only the low
/// byte of each is used here).
pub fn read_file_command(file: u8, offset: u8, size: u8) -> [u8; 8] {
    [ISO14443A_CMD_READ_DATA, file, offset, 0, 0, size, 0, 0]
}

/// Read `size` bytes of `file` from `offset`. The response carries a
/// leading status byte, so a complete read is `size + 1` bytes.
pub fn read_file(ctx: &mut TapContext<'_>, file: u8, offset: u8, size: u8) -> Result<Vec<u8>> {
    ctx.exchange_exact(&read_file_command(file, offset, size), size as usize + 1)
}

/// Clipper: big-endian u32 at response bytes 1..5, nine digits.
pub fn clipper_serial(resp: &[u8]) -> String {
    zero_padded_decimal(be32(&resp[1..5]), 9)
}

/// Opal: fixed prefix, little-endian u32 at bytes 1..5 as nine digits,
/// then the low nibble of byte 5 in decimal. A u32 above 999999999 widens
/// the number instead of being cut.
pub fn opal_serial(resp: &[u8]) -> String {
    format!(
        "{}{}{}",
        OPAL_SERIAL_PREFIX,
        zero_padded_decimal(le32(&resp[1..5]), 9),
        resp[5] & 0x0f
    )
}

/// Myki: two little-endian u32s (6 and 8 digits) and a placeholder in
/// place of the Luhn check digit.
pub fn myki_serial(resp: &[u8]) -> String {
    format!(
        "{}{}{}",
        zero_padded_decimal(le32(&resp[1..5]), 6),
        zero_padded_decimal(le32(&resp[5..9]), 8),
        MYKI_CHECK_PLACEHOLDER
    )
}

fn decode_app(
    ctx: &mut TapContext<'_>,
    card: &mut CardIdentity,
    app: u32,
    kind: InfoKind,
    (file, offset, size): (u8, u8, u8),
    render: fn(&[u8]) -> String,
) -> Result<InfoKind> {
    select_application(ctx, AppId::new(app))?;
    let resp = read_file(ctx, file, offset, size)?;
    let info = InfoText::new(render(&resp))?;
    card.replace_info(kind, info, ctx.sink())?;
    Ok(kind)
}

fn decode_clipper(ctx: &mut TapContext<'_>, card: &mut CardIdentity) -> Result<InfoKind> {
    decode_app(
        ctx,
        card,
        APP_ID_CLIPPER,
        InfoKind::SerialClipper,
        (0x08, 1, 4),
        clipper_serial,
    )
}

fn decode_opal(ctx: &mut TapContext<'_>, card: &mut CardIdentity) -> Result<InfoKind> {
    decode_app(
        ctx,
        card,
        APP_ID_OPAL,
        InfoKind::SerialOpal,
        (0x07, 0, 5),
        opal_serial,
    )
}

fn decode_myki(ctx: &mut TapContext<'_>, card: &mut CardIdentity) -> Result<InfoKind> {
    decode_app(
        ctx,
        card,
        APP_ID_MYKI,
        InfoKind::SerialMiki,
        (0x0f, 0, 8),
        myki_serial,
    )
}

/// Decoder for cards carrying a transit application
pub struct Iso14443aDecoder;

impl CardDecoder for Iso14443aDecoder {
    fn name(&self) -> &'static str {
        "iso14443a"
    }

    /// Only the first known application is tried, even if it fails and a
    /// later one would have matched.
    fn decode(&self, ctx: &mut TapContext<'_>, card: &mut CardIdentity) -> Result<InfoKind> {
        let apps = list_applications(ctx)?;
        let entry = apps
            .into_iter()
            .find_map(lookup)
            .ok_or(Error::Unrecognized)?;
        log::debug!("application {} ({})", entry.id, entry.name);
        entry.decode(ctx, card)
    }
}
