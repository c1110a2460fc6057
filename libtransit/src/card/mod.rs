// libtransit/src/card/mod.rs

//! The per-tap result record and its wire rendering.

use crate::protocol::PacketSink;
use crate::transport::Target;
use crate::types::{InfoKind, Uid, UidKind};
use crate::Result;

mod info;
pub use info::InfoText;

/// Marker rendered in place of a label when a kind cannot be shown
pub const ERROR_LABEL: &str = "ERROR";

/// Identity of one tapped card: what the hardware reported (`uid_kind`,
/// `uid`) and, once a decoder succeeds, the ticketing serial it found
/// (`info_kind`, `info`).
///
/// Two identities are equal when their hardware identity matches; the
/// decoded info is derived data and does not take part.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardIdentity {
    uid_kind: UidKind,
    uid: Uid,
    info_kind: InfoKind,
    info: InfoText,
}

impl PartialEq for CardIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.uid_kind == other.uid_kind && self.uid == other.uid
    }
}

impl Eq for CardIdentity {}

impl CardIdentity {
    /// An identity representing no card
    pub fn new() -> Self {
        Self::default()
    }

    /// An identity for `uid` with no info. Fails for UIDs over 8 bytes.
    pub fn from_uid(uid_kind: UidKind, uid: &[u8]) -> Result<Self> {
        let mut card = Self::new();
        card.set_uid(uid_kind, uid)?;
        Ok(card)
    }

    /// Replace the hardware identity, leaving any info in place.
    pub fn set_uid(&mut self, uid_kind: UidKind, uid: &[u8]) -> Result<()> {
        self.uid = Uid::try_from(uid)?;
        self.uid_kind = uid_kind;
        Ok(())
    }

    /// Card technology
    pub fn uid_kind(&self) -> UidKind {
        self.uid_kind
    }

    /// Anticollision UID
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// Scheme of the decoded serial, `InfoKind::None` if nothing decoded
    pub fn info_kind(&self) -> InfoKind {
        self.info_kind
    }

    /// Decoded serial text
    pub fn info(&self) -> &InfoText {
        &self.info
    }

    /// True once a decoder has stored a serial
    pub fn has_info(&self) -> bool {
        self.info_kind != InfoKind::None
    }

    /// `<kind>/<HEX uid>`, or the error marker alone for an unknown kind.
    pub fn render_uid(&self) -> String {
        match self.uid_kind {
            UidKind::Unknown => ERROR_LABEL.to_string(),
            kind => format!("{}/{}", kind, self.uid.to_hex()),
        }
    }

    /// `<scheme>/<serial>`, or the error marker alone when no scheme is set.
    pub fn render_info(&self) -> String {
        match self.info_kind {
            InfoKind::None => ERROR_LABEL.to_string(),
            kind => format!("{}/{}", kind, self.info),
        }
    }

    /// Emit the current info as a `serial=` packet, if there is any.
    /// Returns whether a packet was sent.
    pub fn flush_info(&self, sink: &mut dyn PacketSink) -> Result<bool> {
        if !self.has_info() {
            return Ok(false);
        }
        sink.send_packet(&format!("serial={}", self.render_info()))?;
        Ok(true)
    }

    /// Store a newly decoded serial. Any info already held is flushed
    /// first so a displayable result is never dropped.
    pub fn replace_info(
        &mut self,
        kind: InfoKind,
        info: InfoText,
        sink: &mut dyn PacketSink,
    ) -> Result<()> {
        self.flush_info(sink)?;
        self.info_kind = kind;
        self.info = info;
        log::info!("decoded {}", self.render_info());
        Ok(())
    }

    /// Forget the decoded serial without emitting it.
    pub fn clear_info(&mut self) {
        self.info_kind = InfoKind::None;
        self.info = InfoText::empty();
    }

    /// Emit the most specific identity available as a `cardid=` packet:
    /// the decoded serial, else the UID of a recognised card type, else
    /// nothing. Returns whether a packet was sent.
    pub fn send_best_identity(&self, sink: &mut dyn PacketSink) -> Result<bool> {
        let body = if self.has_info() {
            self.render_info()
        } else if self.uid_kind.is_reportable() {
            self.render_uid()
        } else {
            return Ok(false);
        };
        sink.send_packet(&format!("cardid={}", body))?;
        Ok(true)
    }
}

impl From<&Target> for CardIdentity {
    fn from(target: &Target) -> Self {
        Self {
            uid_kind: target.uid_kind,
            uid: target.uid,
            ..Self::default()
        }
    }
}
