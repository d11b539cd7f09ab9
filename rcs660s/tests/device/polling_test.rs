#[path = "../common/mod.rs"]
mod common;

use rcs660s::prelude::*;
use rcs660s::protocol::Frame;
use rcs660s::test_support::{self, FIRST_SEQ_AFTER_INIT};

fn ready(replies: &[Vec<u8>]) -> Device<MockTransport, Ready> {
    common::init_logging();
    Device::new(common::seeded_mock(replies)).initialize().unwrap()
}

#[test]
fn polling_request_matches_known_frame() {
    let mut dev = ready(&[test_support::no_card_response(FIRST_SEQ_AFTER_INIT)]);
    assert!(!dev.poll(SystemCode::ANY));
    let last = dev.transport().sent.last().unwrap();
    assert_eq!(last, &common::fixtures::polling_frame_seq9());
}

#[test]
fn card_identifiers_come_from_fixed_offsets() {
    let idm = common::fixtures::idm_bytes();
    let pmm = common::fixtures::pmm_bytes();
    let mut dev = ready(&[test_support::polling_response(
        FIRST_SEQ_AFTER_INIT,
        idm,
        pmm,
        SystemCode::COMMON,
    )]);

    let card = dev.polling(SystemCode::COMMON).unwrap().unwrap();
    assert_eq!(card.idm.to_hex(), common::fixtures::IDM_HEX);
    assert_eq!(card.pmm.to_hex(), common::fixtures::PMM_HEX);
    assert_eq!(dev.last_card(), Some(card));

    let req = Frame::decode(dev.transport().sent.last().unwrap()).unwrap();
    assert_eq!(&req[26..28], &[0xFE, 0x00]);
}

#[test]
fn second_poll_replaces_identifiers() {
    let first = test_support::polling_response(
        FIRST_SEQ_AFTER_INIT,
        [0x11; 8],
        [0x22; 8],
        SystemCode::ANY,
    );
    let second = test_support::polling_response(
        FIRST_SEQ_AFTER_INIT + 1,
        [0x33; 8],
        [0x44; 8],
        SystemCode::ANY,
    );
    let mut dev = ready(&[first, second]);

    assert!(dev.poll(SystemCode::ANY));
    assert!(dev.poll(SystemCode::ANY));
    assert_eq!(dev.idm().unwrap().as_bytes(), &[0x33; 8]);
    assert_eq!(dev.pmm().unwrap().as_bytes(), &[0x44; 8]);
}

#[test]
fn any_other_length_means_no_card() {
    for len in [10usize, 20, 43, 45, 60] {
        let body = vec![0u8; len - 10];
        let resp = test_support::escape_response(FIRST_SEQ_AFTER_INIT, &body);
        let mut dev = ready(&[resp]);
        assert_eq!(dev.polling(SystemCode::ANY).unwrap(), None, "len {}", len);
        assert!(dev.idm().is_none());
    }
}

#[test]
fn broken_reply_frame_is_an_error_for_polling_and_false_for_poll() {
    let mut m = common::seeded_mock(&[]);
    m.push_ack();
    // header with a bad LCS
    m.push_bytes(&[0x00, 0x00, 0xFF, 0x00, 0x2C, 0x00]);
    m.tick_ms = 5;
    let mut dev = Device::new(m).initialize().unwrap();
    dev.set_timeout(ms(20));
    assert!(matches!(
        dev.polling(SystemCode::ANY),
        Err(Error::FrameChecksum { .. })
    ));
    assert!(!dev.poll(SystemCode::ANY));
}
