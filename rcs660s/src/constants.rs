// rcs660s/src/constants.rs
//! Common protocol constants used across the crate

/// Frame preamble + start code: 0x00 0x00 0xFF
pub const FRAME_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// Frame postamble: 0x00
pub const FRAME_POSTAMBLE: u8 = 0x00;

/// Preamble(3) + LEN_HI + LEN_LO + LCS
pub const FRAME_HEADER_LEN: usize = 6;

/// DCS + postamble
pub const FRAME_TRAILER_LEN: usize = 2;

/// Maximum payload length carried by a single frame
pub const MAX_PAYLOAD_LEN: usize = 282;

/// ACK frame returned by the reader after every accepted command frame
pub const ACK_FRAME: [u8; 7] = [0x00, 0x00, 0xFF, 0x00, 0x00, 0xFF, 0x00];

/// Byte written on the serial line to wake/reset the reader
pub const RESET_PULSE: u8 = 0x01;

/// CCID message header length
pub const CCID_HEADER_LEN: usize = 10;

/// PC_to_RDR_Escape
pub const CCID_PC_TO_RDR_ESCAPE: u8 = 0x6B;
/// PC_to_RDR_Abort
pub const CCID_PC_TO_RDR_ABORT: u8 = 0x72;
/// RDR_to_PC_Escape
pub const CCID_RDR_TO_PC_ESCAPE: u8 = 0x83;
/// bStatus value the reader reports on a completed escape exchange
pub const CCID_ESCAPE_STATUS_OK: u8 = 0x02;

/// Largest APDU that still fits a frame once the CCID header is added
pub const MAX_APDU_LEN: usize = MAX_PAYLOAD_LEN - CCID_HEADER_LEN;

/// PC/SC escape APDU class / instruction
pub const APDU_CLA_ESCAPE: u8 = 0xFF;
pub const APDU_INS_ESCAPE: u8 = 0xC2;

/// PC/SC generic status data object `C0 03 00 90 00` (success)
pub const PCSC_STATUS_OK: [u8; 5] = [0xC0, 0x03, 0x00, 0x90, 0x00];
/// Offset of the PC/SC status object inside an escape response
pub const PCSC_STATUS_OFFSET: usize = CCID_HEADER_LEN;

/// Escape response length when a FeliCa card answered the polling command
pub const POLLING_RESPONSE_LEN: usize = 44;
/// Offset of IDm inside the polling escape response
pub const POLLING_IDM_OFFSET: usize = 26;
/// Offset of PMm inside the polling escape response
pub const POLLING_PMM_OFFSET: usize = 34;

/// Offset of the FeliCa LEN byte in a card command escape response
pub const CARD_RESPONSE_LEN_OFFSET: usize = 23;
/// Offset of the first card response data byte
pub const CARD_RESPONSE_DATA_OFFSET: usize = 25;

/// Fixed Lc of the timer + transceive card command APDU
pub const CARD_COMMAND_LC: u8 = 0x1A;
