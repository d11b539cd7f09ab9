use rcs660s::Error;
use rcs660s::protocol::escape::validate_escape_response;
use rcs660s::protocol::{CcidHeader, CcidMessage};
use rcs660s::test_support;

#[test]
fn escape_message_header_layout() {
    let apdu = [0xFF, 0xC2, 0x00, 0x00, 0x02, 0x82, 0x00];
    let bytes = CcidMessage::escape(0x2A, &apdu).to_bytes();
    assert_eq!(
        &bytes[..10],
        &[0x6B, 0x07, 0x00, 0x00, 0x00, 0x00, 0x2A, 0x00, 0x00, 0x00]
    );
    assert_eq!(&bytes[10..], &apdu);
}

#[test]
fn parse_reader_header() {
    let resp = test_support::escape_response(0x10, &[0xC0, 0x03, 0x00, 0x90, 0x00]);
    let h = CcidHeader::parse(&resp).unwrap();
    assert_eq!(h.message_type, 0x83);
    assert_eq!(h.length, 5);
    assert_eq!(h.sequence, 0x10);
    assert_eq!(h.status, 0x02);
}

#[test]
fn validation_checks_header_before_pcsc_status() {
    // wrong type and wrong PC/SC status: header wins
    let resp = test_support::ccid_response(0x80, 1, 0x02, &[0xC0, 0x03, 0x01, 0x64, 0x01]);
    assert!(matches!(
        validate_escape_response(&resp),
        Err(Error::CcidHeader { message_type: 0x80, .. })
    ));
}

#[test]
fn short_response_is_rejected() {
    assert!(validate_escape_response(&[0x83, 0x00]).is_err());
}
