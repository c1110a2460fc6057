//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransceiver setup so tests across
//! the crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::protocol::Frame;
use crate::transport::{MockTransceiver, Target, TargetHandle, Transceiver};
use crate::types::AppId;
use crate::Result;

/// Transceiver that delegates into a shared MockTransceiver, so a test can
/// inspect what was sent after a Reader has taken ownership.
#[doc(hidden)]
pub struct SharedTransceiver {
    /// The mock every call is forwarded to
    pub inner: Rc<RefCell<MockTransceiver>>,
}

impl Transceiver for SharedTransceiver {
    fn list_targets(&mut self) -> Result<Vec<Target>> {
        self.inner.borrow_mut().list_targets()
    }

    fn exchange(&mut self, target: TargetHandle, command: &[u8]) -> Result<Vec<u8>> {
        self.inner.borrow_mut().exchange(target, command)
    }
}

/// Box a fresh MockTransceiver for a Reader and keep a handle to it.
#[doc(hidden)]
pub fn shared_mock() -> (Box<dyn Transceiver>, Rc<RefCell<MockTransceiver>>) {
    let inner = Rc::new(RefCell::new(MockTransceiver::new()));
    let boxed = Box::new(SharedTransceiver {
        inner: Rc::clone(&inner),
    });
    (boxed, inner)
}

/// Text of every framed packet in captured sink output, in order.
/// Unframed lines and NAK bytes are skipped.
#[doc(hidden)]
pub fn payloads(stream: &[u8]) -> Vec<String> {
    Frame::split_stream(stream)
        .into_iter()
        .map(|p| String::from_utf8_lossy(&p).into_owned())
        .collect()
}

/// Page-4 block of an HSL card. With `MIFARE_TEST_UID` it decodes to
/// `hsl/92462100121259093A`.
#[doc(hidden)]
pub fn hsl_page() -> Vec<u8> {
    let mut p = vec![0u8; 16];
    p[..7].copy_from_slice(&[0x00, 0x92, 0x46, 0x21, 0x00, 0x12, 0xa0]);
    p
}

/// Page-4 block of a Troika card; decodes to `troika/591751049`.
#[doc(hidden)]
pub fn troika_page() -> Vec<u8> {
    let mut p = vec![0u8; 16];
    p[..8].copy_from_slice(&[0x45, 0xdb, 0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc]);
    p
}

/// UID used with the Mifare page fixtures
#[doc(hidden)]
pub const MIFARE_TEST_UID: [u8; 7] = [0x04, 0x12, 0x34, 0x56, 0x01, 0x02, 0x03];

/// GET_APPLICATION_IDS response listing `ids` after a zero status byte.
#[doc(hidden)]
pub fn app_ids_response(ids: &[AppId]) -> Vec<u8> {
    let mut resp = vec![0x00];
    for id in ids {
        resp.extend_from_slice(&id.to_be_bytes());
    }
    resp
}

/// Queue a full application decode: listing, select ack, then the file.
#[doc(hidden)]
pub fn seed_application(mock: &mut MockTransceiver, ids: &[AppId], file: Vec<u8>) {
    mock.push_response(app_ids_response(ids));
    mock.push_response(vec![0x00]);
    mock.push_response(file);
}
