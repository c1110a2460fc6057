#[path = "../common/mod.rs"]
mod common;

use libtransit::card::{CardIdentity, InfoText};
use libtransit::protocol::{Frame, PacketSink, PacketWriter};
use libtransit::test_support::payloads;
use libtransit::{Error, InfoKind, UidKind};
use proptest::prelude::*;

#[test]
fn cardid_frame_is_exact() {
    let mut sink: Vec<u8> = Vec::new();
    let card = CardIdentity::from_uid(UidKind::Felica, &common::fixtures::from_hex("0102")).unwrap();
    assert!(card.send_best_identity(&mut sink).unwrap());
    assert_eq!(sink, b"\x02cardid=felica/0102\x04\r\n".to_vec());
}

#[test]
fn replacing_info_flushes_previous_serial_first() {
    let mut sink: Vec<u8> = Vec::new();
    let mut card =
        CardIdentity::from_uid(UidKind::Mifare, &common::fixtures::mifare_uid()).unwrap();
    card.replace_info(
        InfoKind::SerialTroika,
        InfoText::new(common::fixtures::TROIKA_SERIAL).unwrap(),
        &mut sink,
    )
    .unwrap();
    card.replace_info(
        InfoKind::SerialHsl,
        InfoText::new(common::fixtures::HSL_SERIAL).unwrap(),
        &mut sink,
    )
    .unwrap();
    card.send_best_identity(&mut sink).unwrap();

    assert_eq!(
        payloads(&sink),
        vec![
            "serial=troika/591751049".to_string(),
            "cardid=hsl/92462100121259093A".to_string(),
        ]
    );
}

#[test]
fn delimiter_in_payload_is_rejected() {
    let mut sink: Vec<u8> = Vec::new();
    assert!(matches!(
        sink.send_packet("bad\x04payload"),
        Err(Error::FrameFormat(_))
    ));
    assert!(sink.is_empty());
}

#[test]
fn writer_flushes_to_io() {
    let mut w = PacketWriter::new(Vec::new());
    w.send_packet("apps=").unwrap();
    w.write_line("Hello").unwrap();
    w.signal_overflow().unwrap();
    assert_eq!(w.into_inner(), b"\x02apps=\x04\r\nHello\r\n\x15".to_vec());
}

proptest! {
    #[test]
    fn printable_payloads_split_back(texts in prop::collection::vec("[ -~]{1,20}", 1..8)) {
        let mut sink: Vec<u8> = Vec::new();
        for t in &texts {
            sink.send_packet(t).unwrap();
            sink.write_line("noise").unwrap();
        }
        prop_assert_eq!(payloads(&sink), texts.clone());
        for t in &texts {
            let frame = Frame::encode(t.as_bytes()).unwrap();
            prop_assert_eq!(Frame::decode(&frame).unwrap(), t.as_bytes().to_vec());
        }
    }
}
