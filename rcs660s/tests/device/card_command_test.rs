#[path = "../common/mod.rs"]
mod common;

use rcs660s::prelude::*;
use rcs660s::protocol::Frame;
use rcs660s::test_support::{self, FIRST_SEQ_AFTER_INIT};

#[test]
fn read_without_encryption_round_trip() {
    common::init_logging();
    let idm = common::fixtures::idm_bytes();
    let block = *b"0123456789ABCDEF";
    let card = common::fixtures::read_response(&idm, block);
    let reply = test_support::escape_response(
        FIRST_SEQ_AFTER_INIT,
        &test_support::transceive_body(&card),
    );
    let mut dev = Device::new(common::seeded_mock(&[reply])).initialize().unwrap();

    let cmd = common::fixtures::read_without_encryption(&idm);
    let resp = dev.card_command(&cmd, 64).unwrap();
    assert_eq!(resp.len(), 28);
    assert_eq!(resp[0], 0x07);
    assert_eq!(&resp[1..9], &idm);
    assert_eq!(&resp[12..], &block);

    let sent = Frame::decode(dev.transport().sent.last().unwrap()).unwrap();
    assert_eq!(sent[0], 0x6B);
    assert_eq!(sent[6], FIRST_SEQ_AFTER_INIT);
    assert_eq!(&sent[25..40], cmd.as_slice());
}

#[test]
fn response_exactly_at_capacity_is_accepted() {
    let reply = test_support::escape_response(
        FIRST_SEQ_AFTER_INIT,
        &test_support::transceive_body(&[0x5A; 12]),
    );
    let mut dev = Device::new(common::seeded_mock(&[reply])).initialize().unwrap();
    assert_eq!(dev.card_command(&[0x0C], 12).unwrap(), vec![0x5A; 12]);
}

#[test]
fn reader_error_status_is_reported() {
    let reply = test_support::ccid_response(0x83, FIRST_SEQ_AFTER_INIT, 0x42, &[]);
    let mut dev = Device::new(common::seeded_mock(&[reply])).initialize().unwrap();
    match dev.card_command(&[0x0C], 16) {
        Err(Error::CcidHeader {
            message_type,
            status,
        }) => {
            assert_eq!(message_type, 0x83);
            assert_eq!(status, 0x42);
        }
        other => panic!("expected CcidHeader, got: {:?}", other),
    }
}

#[test]
fn truncated_transceive_reply_is_invalid_length() {
    // PC/SC status only: nothing at the length offset
    let reply = test_support::escape_response(FIRST_SEQ_AFTER_INIT, &[0xC0, 0x03, 0x00, 0x90, 0x00]);
    let mut dev = Device::new(common::seeded_mock(&[reply])).initialize().unwrap();
    assert!(matches!(
        dev.card_command(&[0x0C], 16),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn sequence_advances_once_per_command() {
    let replies: Vec<Vec<u8>> = (0..3u8)
        .map(|i| {
            test_support::escape_response(
                FIRST_SEQ_AFTER_INIT + i,
                &test_support::transceive_body(&[0x0D, i]),
            )
        })
        .collect();
    let mut dev = Device::new(common::seeded_mock(&replies)).initialize().unwrap();
    for i in 0..3u8 {
        assert_eq!(dev.card_command(&[0x0C], 8).unwrap(), vec![0x0D, i]);
        assert_eq!(dev.sequence(), FIRST_SEQ_AFTER_INIT + i);
    }
}
