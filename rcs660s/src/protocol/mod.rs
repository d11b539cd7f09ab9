// rcs660s/src/protocol/mod.rs

pub mod apdu;
pub mod ccid;
pub mod checksum;
pub mod codec;
pub mod escape;
pub mod frame;
pub mod handshake;
pub mod parser;

pub use apdu::{Apdu, DataObject};
pub use ccid::{CcidHeader, CcidMessage};
pub use checksum::{checksum, dcs, lcs};
pub use frame::{Frame, FrameHeader};
