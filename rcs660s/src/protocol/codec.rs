// rcs660s/src/protocol/codec.rs

use std::time::Duration;

use log::warn;

use crate::Result;
use crate::channel::Channel;
use crate::constants::{FRAME_HEADER_LEN, FRAME_TRAILER_LEN};
use crate::transport::Transport;

use super::Frame;
use super::frame::{FrameHeader, verify_trailer};

/// Encode `payload` into a wire frame and write it.
pub fn write_frame<T: Transport>(channel: &mut Channel<T>, payload: &[u8]) -> Result<()> {
    let frame = Frame::encode(payload)?;
    channel.write_all(&frame)
}

/// Read one frame from the channel and return its payload.
///
/// The 6-byte header is read and validated first. A bad preamble, bad LCS
/// or a length over capacity fails without reading anything further; the
/// bytes already consumed are dropped and no resynchronization is tried.
/// DCS and postamble are only checked when `verify_trailer_bytes` is set.
pub fn read_frame<T: Transport>(
    channel: &mut Channel<T>,
    timeout: Duration,
    verify_trailer_bytes: bool,
) -> Result<Vec<u8>> {
    let mut header = [0u8; FRAME_HEADER_LEN];
    channel.read_exact(&mut header, timeout)?;

    let FrameHeader { payload_len } = FrameHeader::parse(&header).inspect_err(|e| {
        warn!("invalid response header: {}", e);
    })?;

    let mut rest = channel.read_vec(payload_len + FRAME_TRAILER_LEN, timeout)?;
    let trailer = rest.split_off(payload_len);

    if verify_trailer_bytes {
        verify_trailer(&rest, &trailer)?;
    }

    Ok(rest)
}
