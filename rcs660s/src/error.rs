// rcs660s/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("operation timed out: received {received} of {expected} bytes")]
    Timeout { expected: usize, received: usize },

    #[error("invalid frame header: {0:02x?}")]
    FrameHeader([u8; 3]),

    #[error("length checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    FrameChecksum { expected: u8, actual: u8 },

    #[error("data checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    DataChecksum { expected: u8, actual: u8 },

    #[error("payload too long: max {max}, got {actual}")]
    PayloadTooLong { max: usize, actual: usize },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("not an ack frame: {0:02x?}")]
    AckMismatch([u8; 7]),

    #[error("invalid ccid response header: type={message_type:#04x}, status={status:#04x}")]
    CcidHeader { message_type: u8, status: u8 },

    #[error("invalid pc/sc status: {0:02x?}")]
    PcscStatus(Vec<u8>),

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("device not found")]
    DeviceNotFound,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // シリアル実装は feature で有効化する
    #[cfg(feature = "serial")]
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
