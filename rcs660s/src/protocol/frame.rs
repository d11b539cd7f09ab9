// rcs660s/src/protocol/frame.rs

use crate::constants::{
    FRAME_HEADER_LEN, FRAME_POSTAMBLE, FRAME_PREAMBLE, FRAME_TRAILER_LEN, MAX_PAYLOAD_LEN,
};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// Reader frame helper. Provides encode/decode of the wire frame
/// Format: [Preamble(3)] [LenHi(1)] [LenLo(1)] [LCS(1)] [Payload(n)] [DCS(1)] [Postamble(1)]
/// Preamble: 0x00 0x00 0xFF
/// Postamble: 0x00
pub struct Frame {
    pub payload: Vec<u8>,
}

/// Parsed 6-byte frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub payload_len: usize,
}

impl FrameHeader {
    /// Validate preamble, length checksum and capacity of a frame header.
    /// Checks run in wire order so a bad preamble is reported before a bad
    /// LCS, and a bad LCS before an oversized length.
    pub fn parse(header: &[u8; FRAME_HEADER_LEN]) -> Result<Self> {
        if header[..3] != FRAME_PREAMBLE {
            return Err(Error::FrameHeader([header[0], header[1], header[2]]));
        }

        let len = u16::from_be_bytes([header[3], header[4]]);
        let lcs_expected = lcs(len);
        if header[5] != lcs_expected {
            return Err(Error::FrameChecksum {
                expected: lcs_expected,
                actual: header[5],
            });
        }

        let payload_len = len as usize;
        if payload_len > MAX_PAYLOAD_LEN {
            return Err(Error::PayloadTooLong {
                max: MAX_PAYLOAD_LEN,
                actual: payload_len,
            });
        }

        Ok(Self { payload_len })
    }
}

impl Frame {
    /// Encode a payload into a full wire frame
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::PayloadTooLong {
                max: MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let len = payload.len() as u16;
        let mut out = Vec::with_capacity(FRAME_HEADER_LEN + payload.len() + FRAME_TRAILER_LEN);
        out.extend_from_slice(&FRAME_PREAMBLE);
        out.extend_from_slice(&len.to_be_bytes());
        out.push(lcs(len));
        out.extend_from_slice(payload);
        out.push(dcs(payload));
        out.push(FRAME_POSTAMBLE);
        Ok(out)
    }

    /// Decode one complete wire frame held in memory and return the payload.
    /// Unlike the streaming reader this always verifies DCS and postamble.
    pub fn decode(frame: &[u8]) -> Result<Vec<u8>> {
        let min = FRAME_HEADER_LEN + FRAME_TRAILER_LEN;
        if frame.len() < min {
            return Err(Error::InvalidLength {
                expected: min,
                actual: frame.len(),
            });
        }

        let mut header = [0u8; FRAME_HEADER_LEN];
        header.copy_from_slice(&frame[..FRAME_HEADER_LEN]);
        let FrameHeader { payload_len } = FrameHeader::parse(&header)?;

        let required_len = FRAME_HEADER_LEN + payload_len + FRAME_TRAILER_LEN;
        if frame.len() != required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }

        let payload = &frame[FRAME_HEADER_LEN..FRAME_HEADER_LEN + payload_len];
        verify_trailer(payload, &frame[FRAME_HEADER_LEN + payload_len..])?;

        Ok(payload.to_vec())
    }
}

/// Check the DCS + postamble that follow `payload`.
pub(crate) fn verify_trailer(payload: &[u8], trailer: &[u8]) -> Result<()> {
    let (dcs_actual, postamble) = match trailer {
        [d, p] => (*d, *p),
        _ => {
            return Err(Error::InvalidLength {
                expected: FRAME_TRAILER_LEN,
                actual: trailer.len(),
            });
        }
    };

    let dcs_expected = dcs(payload);
    if dcs_actual != dcs_expected {
        return Err(Error::DataChecksum {
            expected: dcs_expected,
            actual: dcs_actual,
        });
    }

    if postamble != FRAME_POSTAMBLE {
        return Err(Error::FrameFormat(format!(
            "invalid postamble {:#04x}",
            postamble
        )));
    }

    Ok(())
}
