// helpers.rs: setup shared by the integration tests

use std::cell::RefCell;
use std::rc::Rc;

use libtransit::card::CardIdentity;
use libtransit::decode::TapContext;
use libtransit::reader::{Reader, ReaderBuilder};
use libtransit::test_support::shared_mock;
use libtransit::transport::{MockTransceiver, TargetHandle};
use libtransit::types::OutputFlags;
use libtransit::{CardDecoder, Result, UidKind};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Run one decoder against a scripted mock and return the identity, the
/// decode outcome and everything written to the sink.
pub fn run_decoder(
    decoder: &dyn CardDecoder,
    uid_kind: UidKind,
    uid: &[u8],
    responses: Vec<Option<Vec<u8>>>,
    flags: OutputFlags,
) -> (CardIdentity, Result<libtransit::InfoKind>, Vec<u8>, MockTransceiver) {
    let mut mock = MockTransceiver::new();
    mock.responses.extend(responses);
    let mut sink: Vec<u8> = Vec::new();
    let mut card = CardIdentity::from_uid(uid_kind, uid).unwrap();
    let outcome = {
        let mut ctx = TapContext::new(&mut mock, TargetHandle(1), &mut sink, flags);
        decoder.decode(&mut ctx, &mut card)
    };
    (card, outcome, sink, mock)
}

/// Reader over an in-memory sink with a shared mock behind it
pub fn mock_reader(flags: OutputFlags) -> (Reader<Vec<u8>>, Rc<RefCell<MockTransceiver>>) {
    init_logger();
    let (boxed, mock) = shared_mock();
    let reader = ReaderBuilder::new()
        .with_transceiver(boxed)
        .output_flags(flags)
        .build()
        .unwrap();
    (reader, mock)
}
