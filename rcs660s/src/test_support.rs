//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize scripting of MockTransport byte streams so tests
//! across the crate and tests/ directory can reuse the same reader replies.
#![allow(dead_code)]

use crate::constants::PCSC_STATUS_OK;
use crate::device::{Device, Ready};
use crate::device::init::InitStep;
use crate::transport::mock::MockTransport;
use crate::types::{Idm, Pmm, SystemCode};
use crate::Result;

/// Build a reader->host CCID message with the given type and status.
#[doc(hidden)]
pub fn ccid_response(message_type: u8, seq: u8, status: u8, body: &[u8]) -> Vec<u8> {
    let mut v = vec![message_type];
    v.extend_from_slice(&(body.len() as u32).to_le_bytes());
    v.extend_from_slice(&[0x00, seq, status, 0x00, 0x00]);
    v.extend_from_slice(body);
    v
}

/// RDR_to_PC_Escape with bStatus 0x02 carrying `body`.
#[doc(hidden)]
pub fn escape_response(seq: u8, body: &[u8]) -> Vec<u8> {
    ccid_response(0x83, seq, 0x02, body)
}

/// Escape response body for a successful transceive: PC/SC status,
/// reader status objects, then the card's response behind its LEN byte.
#[doc(hidden)]
pub fn transceive_body(card_response: &[u8]) -> Vec<u8> {
    let felica_len = (card_response.len() + 1) as u8;
    let mut v = PCSC_STATUS_OK.to_vec();
    v.extend_from_slice(&[0x92, 0x01, 0x00]);
    v.extend_from_slice(&[0x96, 0x02, 0x00, 0x00]);
    v.push(0x97);
    v.push(felica_len);
    v.push(felica_len);
    v.extend_from_slice(card_response);
    v
}

/// 44-byte escape response to a polling command that found a card.
#[doc(hidden)]
pub fn polling_response(seq: u8, idm: [u8; 8], pmm: [u8; 8], system_code: SystemCode) -> Vec<u8> {
    let mut card = vec![0x01];
    card.extend_from_slice(&idm);
    card.extend_from_slice(&pmm);
    card.extend_from_slice(&system_code.to_be_bytes());
    escape_response(seq, &transceive_body(&card))
}

/// Escape response to a polling command when no card answered.
#[doc(hidden)]
pub fn no_card_response(seq: u8) -> Vec<u8> {
    let mut body = PCSC_STATUS_OK.to_vec();
    body.extend_from_slice(&[0x92, 0x01, 0x01]);
    escape_response(seq, &body)
}

/// Queue an ACK followed by `payload` as one framed reply.
#[doc(hidden)]
pub fn seed_exchange(mock: &mut MockTransport, payload: &[u8]) {
    mock.push_ack();
    mock.push_frame(payload)
        .expect("scripted reply must fit in one frame");
}

/// Queue every reply `Device::initialize` expects from a healthy reader:
/// abort ACK + slot status, then ACK + success for each session step.
/// Sequence numbers start at 1.
#[doc(hidden)]
pub fn seed_initialize(mock: &mut MockTransport) {
    seed_exchange(mock, &ccid_response(0x81, 1, 0x00, &[]));
    for (i, _) in InitStep::SEQUENCE.iter().enumerate() {
        seed_exchange(mock, &escape_response(i as u8 + 2, &PCSC_STATUS_OK));
    }
}

/// Sequence number of the first exchange after a clean initialization.
pub const FIRST_SEQ_AFTER_INIT: u8 = 1 + InitStep::SEQUENCE.len() as u8 + 1;

/// Convenience: a Ready device backed by a MockTransport that has already
/// been through initialization. `replies` are queued afterwards, each as
/// ACK + framed payload.
#[doc(hidden)]
pub fn initialized_mock_device(replies: Vec<Vec<u8>>) -> Result<Device<MockTransport, Ready>> {
    let mut mock = MockTransport::new();
    seed_initialize(&mut mock);
    for r in replies {
        seed_exchange(&mut mock, &r);
    }
    Device::new(mock).initialize()
}

pub fn sample_idm() -> Idm {
    Idm::from_bytes([0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08])
}

pub fn sample_pmm() -> Pmm {
    Pmm::from_bytes([0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18])
}
