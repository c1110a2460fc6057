#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use common::helpers::run_decoder;
use libtransit::decode::MifareDecoder;
use libtransit::test_support::payloads;
use libtransit::{Error, InfoKind, OutputFlags, UidKind};

#[test]
fn hsl_card_decodes() {
    let (card, outcome, sink, mock) = run_decoder(
        &MifareDecoder,
        UidKind::Mifare,
        &fixtures::mifare_uid(),
        vec![Some(fixtures::hsl_page())],
        OutputFlags::empty(),
    );
    assert_eq!(outcome.unwrap(), InfoKind::SerialHsl);
    assert_eq!(card.render_info(), format!("hsl/{}", fixtures::HSL_SERIAL));
    assert!(sink.is_empty());
    assert_eq!(mock.commands(), vec![&[0x30u8, 0x04][..]]);
}

#[test]
fn hsl_serial_is_deterministic() {
    let run = || {
        run_decoder(
            &MifareDecoder,
            UidKind::Mifare,
            &fixtures::mifare_uid(),
            vec![Some(fixtures::hsl_page())],
            OutputFlags::empty(),
        )
        .0
        .render_info()
    };
    assert_eq!(run(), run());
}

#[test]
fn troika_card_decodes() {
    let (card, outcome, _, _) = run_decoder(
        &MifareDecoder,
        UidKind::Mifare,
        &fixtures::mifare_uid(),
        vec![Some(fixtures::troika_page())],
        OutputFlags::empty(),
    );
    assert_eq!(outcome.unwrap(), InfoKind::SerialTroika);
    assert_eq!(card.info().as_str(), fixtures::TROIKA_SERIAL);
}

#[test]
fn raw_all_dumps_page_even_when_unrecognised() {
    let page = vec![0u8; 16];
    let (card, outcome, sink, _) = run_decoder(
        &MifareDecoder,
        UidKind::Mifare,
        &fixtures::mifare_uid(),
        vec![Some(page)],
        OutputFlags::RAW_ALL,
    );
    assert!(matches!(outcome, Err(Error::Unrecognized)));
    assert!(!card.has_info());
    assert_eq!(
        payloads(&sink),
        vec!["page[4..7]=00000000000000000000000000000000"]
    );
}

#[test]
fn short_or_failed_read_is_silent() {
    for resp in [Some(vec![0u8; 15]), None] {
        let (card, outcome, sink, _) = run_decoder(
            &MifareDecoder,
            UidKind::Mifare,
            &fixtures::mifare_uid(),
            vec![resp],
            OutputFlags::RAW_ALL,
        );
        assert!(outcome.is_err());
        assert!(!card.has_info());
        assert!(sink.is_empty());
    }
}

#[test]
fn four_byte_uid_is_not_read() {
    let (_, outcome, _, mock) = run_decoder(
        &MifareDecoder,
        UidKind::Mifare,
        &[0xde, 0xad, 0xbe, 0xef],
        vec![],
        OutputFlags::empty(),
    );
    assert!(matches!(outcome, Err(Error::UnsupportedUid(4))));
    assert!(mock.sent.is_empty());
}

#[test]
fn decoder_flushes_held_serial_before_storing_new_one() {
    use libtransit::card::{CardIdentity, InfoText};
    use libtransit::decode::{CardDecoder, TapContext};
    use libtransit::transport::{MockTransceiver, TargetHandle};

    let mut mock = MockTransceiver::new();
    mock.push_response(fixtures::hsl_page());
    let mut sink: Vec<u8> = Vec::new();
    let mut card = CardIdentity::from_uid(UidKind::Mifare, &fixtures::mifare_uid()).unwrap();
    card.replace_info(
        InfoKind::SerialTroika,
        InfoText::new(fixtures::TROIKA_SERIAL).unwrap(),
        &mut sink,
    )
    .unwrap();
    assert!(sink.is_empty());

    {
        let mut ctx = TapContext::new(&mut mock, TargetHandle(1), &mut sink, OutputFlags::empty());
        assert_eq!(
            MifareDecoder.decode(&mut ctx, &mut card).unwrap(),
            InfoKind::SerialHsl
        );
    }
    assert_eq!(
        payloads(&sink),
        vec![format!("serial=troika/{}", fixtures::TROIKA_SERIAL)]
    );
    assert_eq!(card.render_info(), format!("hsl/{}", fixtures::HSL_SERIAL));

    card.send_best_identity(&mut sink).unwrap();
    assert_eq!(
        payloads(&sink),
        vec![
            format!("serial=troika/{}", fixtures::TROIKA_SERIAL),
            format!("cardid=hsl/{}", fixtures::HSL_SERIAL),
        ]
    );
}
