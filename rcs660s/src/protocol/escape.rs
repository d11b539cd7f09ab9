// rcs660s/src/protocol/escape.rs

//! APDU escape layer: APDUs travel inside PC_to_RDR_Escape messages.

use std::time::Duration;

use log::{Level, debug, log_enabled};

use crate::channel::Channel;
use crate::constants::{
    CCID_ESCAPE_STATUS_OK, CCID_RDR_TO_PC_ESCAPE, MAX_APDU_LEN, PCSC_STATUS_OFFSET, PCSC_STATUS_OK,
};
use crate::protocol::ccid::{CcidHeader, CcidMessage};
use crate::protocol::{Frame, codec, handshake};
use crate::transport::Transport;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Wrap `apdu` in a CCID escape message with sequence number `seq`, frame it
/// and wait for the ACK. The capacity check happens before anything is
/// written.
pub fn send_apdu<T: Transport>(
    channel: &mut Channel<T>,
    seq: u8,
    apdu: &[u8],
    timeout: Duration,
) -> Result<()> {
    if apdu.len() > MAX_APDU_LEN {
        return Err(Error::PayloadTooLong {
            max: MAX_APDU_LEN,
            actual: apdu.len(),
        });
    }

    let msg = CcidMessage::escape(seq, apdu).to_bytes();
    if log_enabled!(Level::Debug) {
        debug!("ccid_com({}): {}", msg.len(), bytes_to_hex_spaced(&msg));
    }

    let frame = Frame::encode(&msg)?;
    handshake::send_and_ack(channel, &frame, timeout)
}

/// Read the raw CCID response message for the last escape command.
pub fn receive_response<T: Transport>(
    channel: &mut Channel<T>,
    timeout: Duration,
    verify_trailer: bool,
) -> Result<Vec<u8>> {
    let resp = codec::read_frame(channel, timeout, verify_trailer)?;
    if log_enabled!(Level::Debug) {
        debug!("ccid_res({}): {}", resp.len(), bytes_to_hex_spaced(&resp));
    }
    Ok(resp)
}

/// Require an RDR_to_PC_Escape header with the expected status and a PC/SC
/// success status object right after it.
pub fn validate_escape_response(resp: &[u8]) -> Result<CcidHeader> {
    let header = CcidHeader::parse(resp)?;
    if header.message_type != CCID_RDR_TO_PC_ESCAPE || header.status != CCID_ESCAPE_STATUS_OK {
        return Err(Error::CcidHeader {
            message_type: header.message_type,
            status: header.status,
        });
    }

    let end = (PCSC_STATUS_OFFSET + PCSC_STATUS_OK.len()).min(resp.len());
    let status = &resp[PCSC_STATUS_OFFSET..end];
    if status != PCSC_STATUS_OK {
        return Err(Error::PcscStatus(status.to_vec()));
    }

    Ok(header)
}
