#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use common::helpers::run_decoder;
use libtransit::decode::Iso14443aDecoder;
use libtransit::test_support::{app_ids_response, payloads};
use libtransit::{Error, InfoKind, OutputFlags, UidKind};

fn decode_apps(
    responses: Vec<Option<Vec<u8>>>,
    flags: OutputFlags,
) -> (
    libtransit::CardIdentity,
    libtransit::Result<InfoKind>,
    Vec<u8>,
    libtransit::MockTransceiver,
) {
    run_decoder(
        &Iso14443aDecoder,
        UidKind::Iso14443a,
        &fixtures::iso14443a_uid(),
        responses,
        flags,
    )
}

#[test]
fn myki_serial_format() {
    let (card, outcome, _, mock) = decode_apps(
        vec![
            Some(app_ids_response(&[fixtures::myki_app()])),
            Some(vec![0x00]),
            Some(fixtures::myki_file()),
        ],
        OutputFlags::empty(),
    );
    assert_eq!(outcome.unwrap(), InfoKind::SerialMiki);
    assert_eq!(card.render_info(), format!("miki/{}", fixtures::MYKI_SERIAL));
    assert_eq!(
        mock.commands()[2],
        &[0xbd, 0x0f, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00][..]
    );
}

#[test]
fn opal_serial_format() {
    let (card, outcome, _, _) = decode_apps(
        vec![
            Some(app_ids_response(&[fixtures::opal_app()])),
            Some(vec![0x00]),
            Some(fixtures::opal_file()),
        ],
        OutputFlags::empty(),
    );
    assert_eq!(outcome.unwrap(), InfoKind::SerialOpal);
    assert_eq!(card.info().as_str(), fixtures::OPAL_SERIAL);
    assert!(card.info().as_str().starts_with("308522"));
}

#[test]
fn clipper_serial_format() {
    let (card, _, _, _) = decode_apps(
        vec![
            Some(app_ids_response(&[fixtures::clipper_app()])),
            Some(vec![0x00]),
            Some(fixtures::clipper_file()),
        ],
        OutputFlags::empty(),
    );
    assert_eq!(card.render_info(), format!("clipper/{}", fixtures::CLIPPER_SERIAL));
}

#[test]
fn first_known_application_wins() {
    // Myki listed before Opal: only Myki is attempted
    let (card, outcome, _, mock) = decode_apps(
        vec![
            Some(app_ids_response(&[
                libtransit::AppId::new(0x123456),
                fixtures::myki_app(),
                fixtures::opal_app(),
            ])),
            Some(vec![0x00]),
            Some(fixtures::myki_file()),
        ],
        OutputFlags::empty(),
    );
    assert_eq!(outcome.unwrap(), InfoKind::SerialMiki);
    assert_eq!(card.info_kind(), InfoKind::SerialMiki);
    assert_eq!(mock.commands()[1], &[0x5a, 0x00, 0x11, 0xf2][..]);
    assert_eq!(mock.sent.len(), 3);
}

#[test]
fn failed_first_match_does_not_try_the_next() {
    let (card, outcome, _, mock) = decode_apps(
        vec![
            Some(app_ids_response(&[fixtures::myki_app(), fixtures::opal_app()])),
            Some(vec![0x00]),
            Some(vec![0x00, 0x01]),
        ],
        OutputFlags::empty(),
    );
    assert!(matches!(
        outcome,
        Err(Error::InvalidLength {
            expected: 9,
            actual: 2
        })
    ));
    assert!(!card.has_info());
    assert_eq!(mock.sent.len(), 3);
}

#[test]
fn raw_all_reports_application_list() {
    let listing = app_ids_response(&[fixtures::clipper_app()]);
    let (_, _, sink, _) = decode_apps(
        vec![
            Some(listing),
            Some(vec![0x00]),
            Some(fixtures::clipper_file()),
        ],
        OutputFlags::RAW_ALL,
    );
    assert_eq!(payloads(&sink), vec!["apps=009011F2"]);
}

#[test]
fn failed_listing_reports_empty_apps() {
    let (card, outcome, sink, _) = decode_apps(vec![None], OutputFlags::RAW_ALL);
    assert!(matches!(outcome, Err(Error::Unrecognized)));
    assert!(!card.has_info());
    assert_eq!(payloads(&sink), vec!["apps="]);
}
