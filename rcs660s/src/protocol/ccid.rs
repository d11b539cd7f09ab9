// rcs660s/src/protocol/ccid.rs

//! CCID message framing carried inside reader frames.
//!
//! Header layout (10 bytes):
//! `[bMessageType] [dwLength LE (4)] [bSlot] [bSeq] [3 bytes]`
//! For host->reader messages the last three bytes are reserved zeros; for
//! reader->host messages they are `bStatus`, `bError` and one
//! message-specific byte.

use crate::Result;
use crate::constants::{CCID_HEADER_LEN, CCID_PC_TO_RDR_ABORT, CCID_PC_TO_RDR_ESCAPE};
use crate::protocol::parser::{byte_at, ensure_len, le_u32_at};

/// Outgoing CCID message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CcidMessage {
    pub message_type: u8,
    pub sequence: u8,
    pub data: Vec<u8>,
}

impl CcidMessage {
    /// PC_to_RDR_Escape carrying an escape APDU.
    pub fn escape(sequence: u8, apdu: &[u8]) -> Self {
        Self {
            message_type: CCID_PC_TO_RDR_ESCAPE,
            sequence,
            data: apdu.to_vec(),
        }
    }

    /// PC_to_RDR_Abort, no data.
    pub fn abort(sequence: u8) -> Self {
        Self {
            message_type: CCID_PC_TO_RDR_ABORT,
            sequence,
            data: Vec::new(),
        }
    }

    /// Serialized length (header + data).
    pub fn encoded_len(&self) -> usize {
        CCID_HEADER_LEN + self.data.len()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.push(self.message_type);
        out.extend_from_slice(&(self.data.len() as u32).to_le_bytes());
        out.push(0x00); // bSlot
        out.push(self.sequence);
        out.extend_from_slice(&[0x00, 0x00, 0x00]);
        out.extend_from_slice(&self.data);
        out
    }
}

/// Parsed reader->host CCID header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CcidHeader {
    pub message_type: u8,
    pub length: u32,
    pub slot: u8,
    pub sequence: u8,
    pub status: u8,
    pub error: u8,
}

impl CcidHeader {
    pub fn parse(data: &[u8]) -> Result<Self> {
        ensure_len(data, CCID_HEADER_LEN)?;
        Ok(Self {
            message_type: byte_at(data, 0)?,
            length: le_u32_at(data, 1)?,
            slot: byte_at(data, 5)?,
            sequence: byte_at(data, 6)?,
            status: byte_at(data, 7)?,
            error: byte_at(data, 8)?,
        })
    }
}
