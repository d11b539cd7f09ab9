#[path = "../common/mod.rs"]
mod common;

use proptest::prelude::*;
use rcs660s::Error;
use rcs660s::constants::MAX_PAYLOAD_LEN;
use rcs660s::protocol::{CcidMessage, Frame};

#[test]
fn abort_frame_matches_known_bytes() {
    let payload = CcidMessage::abort(1).to_bytes();
    let frame = Frame::encode(&payload).unwrap();
    assert_eq!(frame, common::fixtures::abort_frame_seq1());
}

#[test]
fn known_polling_frame_decodes_to_escape_message() {
    let payload = Frame::decode(&common::fixtures::polling_frame_seq9()).unwrap();
    assert_eq!(payload[0], 0x6B);
    assert_eq!(payload[6], 9);
    assert_eq!(&payload[10..12], &[0xFF, 0xC2]);
}

#[test]
fn largest_payload_frames_and_one_more_does_not() {
    let max = vec![0xA5; MAX_PAYLOAD_LEN];
    let frame = Frame::encode(&max).unwrap();
    assert_eq!(&frame[3..5], &[0x01, 0x1A]);
    assert_eq!(Frame::decode(&frame).unwrap(), max);

    let over = vec![0xA5; MAX_PAYLOAD_LEN + 1];
    assert!(matches!(
        Frame::encode(&over),
        Err(Error::PayloadTooLong { max: 282, actual: 283 })
    ));
}

#[test]
fn truncated_frame_is_rejected() {
    let mut frame = common::fixtures::abort_frame_seq1();
    frame.pop();
    assert!(matches!(
        Frame::decode(&frame),
        Err(Error::InvalidLength { .. })
    ));
}

proptest! {
    #[test]
    fn single_bit_flip_in_payload_breaks_dcs(
        payload in prop::collection::vec(any::<u8>(), 1..64),
        idx in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut frame = Frame::encode(&payload).unwrap();
        let i = 6 + idx.index(payload.len());
        frame[i] ^= 1 << bit;
        let is_dcs_error = matches!(Frame::decode(&frame), Err(Error::DataChecksum { .. }));
        prop_assert!(is_dcs_error);
    }
}
