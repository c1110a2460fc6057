// Replays a handful of scripted taps through a Reader and writes the
// resulting serial stream to stdout.
//
// Run with RUST_LOG=debug to see decoder decisions alongside the packets.

use anyhow::Context;
use libtransit::prelude::*;
use libtransit::test_support::{
    MIFARE_TEST_UID, app_ids_response, hsl_page, seed_application, shared_mock, troika_page,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (transceiver, mock) = shared_mock();
    let stdout = PacketWriter::new(std::io::stdout());
    let mut reader = ReaderBuilder::new()
        .with_transceiver(transceiver)
        .with_sink(stdout)
        .build()
        .context("building reader")?;

    // Host greets the reader and asks for raw tags
    reader.handle_serial_bytes(b"\x02H\x04\x02t\x04")?;

    // HSL card
    {
        let mut m = mock.borrow_mut();
        m.add_target(UidKind::Mifare, &MIFARE_TEST_UID)?;
        m.push_response(hsl_page());
    }
    tap(&mut reader)?;

    // Troika card, same hardware family
    {
        let mut m = mock.borrow_mut();
        m.clear_targets();
        m.add_target(UidKind::Mifare, &[0x04, 0x99, 0x88, 0x77, 0x66, 0x55, 0x44])?;
        m.push_response(troika_page());
    }
    tap(&mut reader)?;

    // Clipper card with raw output and the APDU pass enabled
    reader.set_flags(OutputFlags::RAW_ALL | OutputFlags::EXTRA);
    {
        let mut m = mock.borrow_mut();
        m.clear_targets();
        m.add_target(UidKind::Iso14443a, &[0x04, 0xa1, 0xb2, 0xc3, 0xd4, 0xe5, 0x80])?;
        seed_application(&mut m, &[AppId::new(0x9011f2)], vec![0x00, 0x3a, 0xde, 0x68, 0xb1]);
        for _ in 0..4 {
            m.push_response(vec![0x6a, 0x82]);
        }
    }
    tap(&mut reader)?;

    // Card with applications we cannot read
    {
        let mut m = mock.borrow_mut();
        m.clear_targets();
        m.add_target(UidKind::Iso14443a, &[0x08, 0x01, 0x02, 0x03])?;
        m.push_response(app_ids_response(&[AppId::new(0xf21030)]));
        for _ in 0..4 {
            m.push_failure();
        }
    }
    tap(&mut reader)?;

    println!();
    Ok(())
}

fn tap<S: PacketSink>(reader: &mut Reader<S>) -> anyhow::Result<()> {
    match reader.poll()? {
        Some(card) => log::info!("reported {}", card.render_uid()),
        None => log::info!("nothing new in the field"),
    }
    Ok(())
}
