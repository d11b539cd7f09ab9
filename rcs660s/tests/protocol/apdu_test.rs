use rcs660s::Error;
use rcs660s::SystemCode;
use rcs660s::constants::CARD_COMMAND_LC;
use rcs660s::protocol::apdu::{self, Apdu, DataObject, function, session, tag};

#[path = "../common/mod.rs"]
mod common;

#[test]
fn card_command_for_single_block_read() {
    let cmd = common::fixtures::read_without_encryption(&common::fixtures::idm_bytes());
    assert_eq!(cmd.len(), 15);

    let a = apdu::card_command(&cmd).unwrap();
    assert_eq!(&a[..5], &[0xFF, 0xC2, 0x00, 0x01, CARD_COMMAND_LC]);
    assert_eq!(&a[5..12], &[0x5F, 0x46, 0x04, 0x60, 0xEA, 0x01, 0x00]);
    assert_eq!(&a[12..15], &[0x95, 0x11, 0x11]);
    assert_eq!(&a[15..30], cmd.as_slice());
    assert_eq!(a[30], 0x00);
    // Lc counts exactly the data field for this command size
    assert_eq!(a.len() - 5, CARD_COMMAND_LC as usize);
}

#[test]
fn card_command_lc_stays_fixed_for_other_sizes() {
    let a = apdu::card_command(&[0x0C, 0x01]).unwrap();
    assert_eq!(a[4], CARD_COMMAND_LC);
    assert_eq!(&a[12..], &[0x95, 0x04, 0x04, 0x0C, 0x01, 0x00]);
}

#[test]
fn card_command_too_long_for_length_byte() {
    let cmd = vec![0u8; 254];
    assert!(matches!(
        apdu::card_command(&cmd),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn polling_carries_system_code_big_endian() {
    let a = apdu::polling(SystemCode::SUICA).unwrap();
    assert_eq!(&a[14..20], &[0x06, 0x00, 0x00, 0x03, 0x00, 0x00]);
}

#[test]
fn every_session_apdu_uses_escape_class() {
    let all = [
        session::end_transparent_session(),
        session::start_transparent_session(),
        session::switch_protocol_felica(),
        session::transceive_flags(),
        session::transmission_bit_framing(),
        session::set_parameters(),
        session::turn_on_rf_field(),
    ];
    for a in all {
        let a = a.unwrap();
        assert_eq!(&a[..2], &[0xFF, 0xC2]);
    }
}

#[test]
fn builder_with_two_byte_tag() {
    let a = Apdu::escape(function::MANAGE_SESSION)
        .with(DataObject::new(tag::SESSION_PARAMETERS, &[0x05, 0x01, 0x89]))
        .to_bytes()
        .unwrap();
    assert_eq!(a, vec![0xFF, 0xC2, 0x00, 0x00, 0x06, 0xFF, 0x6E, 0x03, 0x05, 0x01, 0x89]);
}
