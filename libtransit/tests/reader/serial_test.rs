#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use common::helpers::mock_reader;
use libtransit::led::LedMode;
use libtransit::test_support::payloads;
use libtransit::{OutputFlags, UidKind};

#[test]
fn raw_tag_toggled_over_serial() {
    let (mut reader, mock) = mock_reader(OutputFlags::empty());
    reader.handle_serial_bytes(b"\x02t\x04").unwrap();
    assert!(reader.flags().contains(OutputFlags::RAW_TAG));

    mock.borrow_mut()
        .add_target(UidKind::Felica, &fixtures::from_hex("0123456789abcdef"))
        .unwrap();
    reader.poll().unwrap();
    assert_eq!(
        payloads(reader.sink())[0],
        "rawtag=felica/0123456789ABCDEF"
    );
}

#[test]
fn hello_and_unknown_commands() {
    let (mut reader, _) = mock_reader(OutputFlags::empty());
    reader.handle_serial_bytes(b"\x02Z\x04\x02HH\x04\x02H\x04").unwrap();
    assert_eq!(reader.sink().as_slice(), b"Hello\r\n");
}

#[test]
fn overflow_nak_then_resync() {
    let (mut reader, _) = mock_reader(OutputFlags::empty());
    reader
        .handle_serial_bytes(b"\x02overlong!\x04\x04\x025\x04")
        .unwrap();
    assert_eq!(reader.sink().as_slice(), &[0x15]);
    assert_eq!(reader.leds().led1.mode, LedMode::Blink2);
    assert_eq!(reader.leds().led2.mode, LedMode::Off);
}

#[test]
fn led_off_clears_both() {
    let (mut reader, _) = mock_reader(OutputFlags::empty());
    reader.handle_serial_bytes(b"\x021\x04\x024\x04").unwrap();
    assert_eq!(reader.leds().led1.mode, LedMode::On);
    assert_eq!(reader.leds().led2.mode, LedMode::Blink1);
    reader.handle_serial_bytes(b"\x020\x04").unwrap();
    assert_eq!(reader.leds().led1.mode, LedMode::Off);
    assert_eq!(reader.leds().led2.mode, LedMode::Off);
    assert!(reader.leds().led1.hold_until.is_none());
}
