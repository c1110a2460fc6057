// libtransit/src/decode/iso7816.rs

//! Exploratory APDU pass over ISO7816 cards.
//!
//! Unlike the other decoders this one never produces an identity: it sends
//! a fixed command sequence and reports every exchange verbatim so the
//! card can be studied from the serial log.

use crate::decode::TapContext;
use crate::utils::bytes_to_hex;
use crate::Result;

/// Where a per-call parameter lands in a command template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamSlot {
    /// The template is sent as is
    None,
    /// `ApduParams::record_index` at this byte offset
    RecordIndex(usize),
    /// `ApduParams::file_ref` at this byte offset
    FileRef(usize),
}

/// Immutable APDU command template
#[derive(Debug, Clone, Copy)]
pub struct ApduTemplate {
    /// Label written ahead of the trace
    pub name: &'static str,
    /// Command bytes before parameters are merged
    pub bytes: &'static [u8],
    /// Longest response the command is expected to produce
    pub response_hint: usize,
    /// Where `ApduParams` land, if anywhere
    pub slot: ParamSlot,
}

/// Per-call values merged into a template at send time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApduParams {
    /// Record number for `readPSE`
    pub record_index: u8,
    /// Short file identifier for `readBinary`
    pub file_ref: u8,
}

impl ApduTemplate {
    /// Build the command bytes for one send.
    pub fn build(&self, params: &ApduParams) -> Vec<u8> {
        let mut cmd = self.bytes.to_vec();
        match self.slot {
            ParamSlot::None => {}
            ParamSlot::RecordIndex(i) => cmd[i] = params.record_index,
            ParamSlot::FileRef(i) => cmd[i] = params.file_ref,
        }
        cmd
    }
}

/// SELECT the master file (3F00)
pub const SELECT_BY_ID: ApduTemplate = ApduTemplate {
    name: "selectByID",
    bytes: &[0x00, 0xa4, 0x00, 0x00, 0x02, 0x3f, 0x00, 0x00],
    response_hint: 32,
    slot: ParamSlot::None,
};

/// READ RECORD from the payment system environment
pub const READ_PSE: ApduTemplate = ApduTemplate {
    name: "readPSE",
    bytes: &[0x00, 0xb2, 0x01, 0x02, 0x00, 0x00],
    response_hint: 32,
    slot: ParamSlot::RecordIndex(3),
};

/// Proprietary balance query
pub const GET_BALANCE: ApduTemplate = ApduTemplate {
    name: "getBalance",
    bytes: &[0x80, 0x5c, 0x00, 0x02, 0x04, 0x00],
    response_hint: 6,
    slot: ParamSlot::None,
};

/// READ RECORD by short file identifier
pub const READ_BINARY: ApduTemplate = ApduTemplate {
    name: "readBinary",
    bytes: &[0x00, 0xb2, 0x95, 0x00, 0x00],
    response_hint: 32,
    slot: ParamSlot::FileRef(2),
};

/// Reader escape: PN532 firmware version via pseudo-APDU
pub const ESCAPE_GET_FIRMWARE: ApduTemplate = ApduTemplate {
    name: "escapeFirmware",
    bytes: &[0xff, 0x00, 0x48, 0x00, 0x00],
    response_hint: 32,
    slot: ParamSlot::None,
};

/// Reader escape: wrapped PN532 GetFirmwareVersion (D4 02)
pub const ESCAPE_PN532_VERSION: ApduTemplate = ApduTemplate {
    name: "escapePn532Version",
    bytes: &[0xff, 0x00, 0x00, 0x00, 0x02, 0xd4, 0x02],
    response_hint: 32,
    slot: ParamSlot::None,
};

/// Fetch data left pending by a 61xx status
pub const GET_RESPONSE: ApduTemplate = ApduTemplate {
    name: "getResponse",
    bytes: &[0x00, 0xc0, 0x00, 0x00, 0x20],
    response_hint: 34,
    slot: ParamSlot::None,
};

/// Every known template
pub static APDU_TABLE: [ApduTemplate; 7] = [
    SELECT_BY_ID,
    READ_PSE,
    GET_BALANCE,
    READ_BINARY,
    ESCAPE_GET_FIRMWARE,
    ESCAPE_PN532_VERSION,
    GET_RESPONSE,
];

/// Record read by the default sequence
pub const DEFAULT_PSE_RECORD: u8 = 2;

/// Short file identifier read by the default sequence
pub const SFI_EXTRA: u8 = 21;

/// Two-byte ISO7816 status word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusWord(pub u16);

impl StatusWord {
    /// A response of exactly two bytes is a bare status word.
    pub fn from_response(resp: &[u8]) -> Option<Self> {
        match resp {
            [sw1, sw2] => Some(Self(u16::from_be_bytes([*sw1, *sw2]))),
            _ => None,
        }
    }

    /// High byte
    pub fn sw1(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Low byte
    pub fn sw2(&self) -> u8 {
        self.0 as u8
    }

    /// Readable cause for the failure classes worth naming
    pub fn cause(&self) -> Option<&'static str> {
        match (self.sw1(), self.sw2()) {
            (0x67, _) => Some("Length Incorrect"),
            (0x69, _) => Some("Not Allowed"),
            (0x6a, 0x82) => Some("Wrong Param: File not found"),
            (0x6a, _) => Some("Wrong Param"),
            (0x6d, _) => Some("INS not supported"),
            _ => None,
        }
    }
}

/// One APDU exchange as it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApduTrace {
    /// Template name
    pub name: &'static str,
    /// Bytes actually sent
    pub command: Vec<u8>,
    /// `None` when the exchange failed
    pub response: Option<Vec<u8>>,
}

impl ApduTrace {
    /// Status word, when the response was exactly two bytes
    pub fn status(&self) -> Option<StatusWord> {
        self.response.as_deref().and_then(StatusWord::from_response)
    }

    /// Text lines for the serial trace
    pub fn lines(&self) -> Vec<String> {
        let rx = match &self.response {
            Some(resp) => {
                let mut line = format!("APDU Rx: {}", bytes_to_hex(resp));
                if let Some(cause) = self.status().and_then(|sw| sw.cause()) {
                    line.push(' ');
                    line.push_str(cause);
                }
                line
            }
            None => "APDU Rx: FAILED".to_string(),
        };
        vec![
            self.name.to_string(),
            format!("APDU Tx: {}", bytes_to_hex(&self.command)),
            rx,
        ]
    }
}

/// Diagnostic APDU sender
pub struct Iso7816Probe;

impl Iso7816Probe {
    /// Send one templated APDU, writing its trace to the serial channel
    /// whether or not the card answered.
    pub fn send(
        ctx: &mut TapContext<'_>,
        template: &ApduTemplate,
        params: &ApduParams,
    ) -> Result<ApduTrace> {
        let command = template.build(params);
        let response = match ctx.exchange(&command) {
            Ok(resp) => {
                if resp.len() > template.response_hint {
                    log::debug!(
                        "{}: {} byte response, expected at most {}",
                        template.name,
                        resp.len(),
                        template.response_hint
                    );
                }
                Some(resp)
            }
            Err(e) => {
                log::debug!("{}: {}", template.name, e);
                None
            }
        };

        let trace = ApduTrace {
            name: template.name,
            command,
            response,
        };
        for line in trace.lines() {
            log::info!("{}", line);
            ctx.sink().write_line(&line)?;
        }
        Ok(trace)
    }

    /// Run the default diagnostic sequence. The card identity is never
    /// consulted or changed.
    pub fn run(ctx: &mut TapContext<'_>) -> Result<Vec<ApduTrace>> {
        let params = ApduParams {
            record_index: DEFAULT_PSE_RECORD,
            file_ref: SFI_EXTRA,
        };
        [SELECT_BY_ID, READ_PSE, READ_BINARY, GET_BALANCE]
            .iter()
            .map(|t| Self::send(ctx, t, &params))
            .collect()
    }
}
