use libtransit::protocol::{CommandReceiver, ControlCommand, InboundEvent};
use proptest::prelude::*;

fn feed(rx: &mut CommandReceiver, bytes: &[u8]) -> Vec<InboundEvent> {
    bytes.iter().filter_map(|&b| rx.push(b)).collect()
}

#[test]
fn eight_bytes_fit_nine_overflow() {
    let mut rx = CommandReceiver::new();
    assert_eq!(
        feed(&mut rx, b"\x0212345678\x04"),
        vec![InboundEvent::Frame(b"12345678".to_vec())]
    );
    assert_eq!(
        feed(&mut rx, b"\x02123456789abc\x04"),
        vec![InboundEvent::Overflow]
    );
    assert!(!rx.is_open());
}

#[test]
fn stx_restarts_and_stray_bytes_are_dropped() {
    let mut rx = CommandReceiver::new();
    let events = feed(&mut rx, b"xx\x04\x02AB\x02H\x04zz");
    assert_eq!(events, vec![InboundEvent::Frame(b"H".to_vec())]);
    let cmds: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            InboundEvent::Frame(p) => ControlCommand::parse(p),
            InboundEvent::Overflow => None,
        })
        .collect();
    assert_eq!(cmds, vec![ControlCommand::Hello]);
}

#[test]
fn receiver_recovers_after_overflow() {
    let mut rx = CommandReceiver::new();
    let events = feed(&mut rx, b"\x02AAAAAAAAAAAA\x04\x02t\x04");
    assert_eq!(
        events,
        vec![InboundEvent::Overflow, InboundEvent::Frame(b"t".to_vec())]
    );
}

proptest! {
    #[test]
    fn at_most_one_overflow_per_packet(body in prop::collection::vec(0x05u8..=0xff, 0..40)) {
        let mut rx = CommandReceiver::new();
        let mut bytes = vec![0x02];
        bytes.extend_from_slice(&body);
        bytes.push(0x04);
        let events = feed(&mut rx, &bytes);
        prop_assert_eq!(events.len(), 1);
        if body.len() > 8 {
            prop_assert_eq!(&events[0], &InboundEvent::Overflow);
        } else {
            prop_assert_eq!(&events[0], &InboundEvent::Frame(body.clone()));
        }
    }
}
