// rcs660s/src/protocol/handshake.rs

//! ACK handshake and best-effort abort.

use std::time::Duration;

use log::{debug, warn};

use crate::channel::Channel;
use crate::constants::ACK_FRAME;
use crate::protocol::ccid::CcidMessage;
use crate::protocol::codec;
use crate::transport::Transport;
use crate::{Error, Result};

/// Write an already-encoded frame and wait for the reader's ACK.
pub fn send_and_ack<T: Transport>(
    channel: &mut Channel<T>,
    frame: &[u8],
    timeout: Duration,
) -> Result<()> {
    channel.write_all(frame)?;
    await_ack(channel, timeout)
}

/// Read exactly 7 bytes and require the literal ACK frame. Not retried.
pub fn await_ack<T: Transport>(channel: &mut Channel<T>, timeout: Duration) -> Result<()> {
    let mut ack = [0u8; ACK_FRAME.len()];
    channel.read_exact(&mut ack, timeout).inspect_err(|e| {
        warn!("ack read failed: {}", e);
    })?;

    if ack != ACK_FRAME {
        warn!("not ack: {:02x?}", ack);
        return Err(Error::AckMismatch(ack));
    }
    Ok(())
}

/// Send PC_to_RDR_Abort with sequence number `seq`, wait for the ACK and
/// read the abort's own response frame. Failures are logged and swallowed.
pub fn abort<T: Transport>(
    channel: &mut Channel<T>,
    seq: u8,
    timeout: Duration,
    verify_trailer: bool,
) {
    let msg = CcidMessage::abort(seq).to_bytes();

    let sent = codec::write_frame(channel, &msg).and_then(|_| await_ack(channel, timeout));
    if let Err(e) = sent {
        warn!("abort (seq={}) not acknowledged: {}", seq, e);
        return;
    }

    match codec::read_frame(channel, timeout, verify_trailer) {
        Ok(resp) => debug!("abort (seq={}) response: {} bytes", seq, resp.len()),
        Err(e) => warn!("abort (seq={}) response failed: {}", seq, e),
    }
}
