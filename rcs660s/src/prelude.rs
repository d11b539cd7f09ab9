// rcs660s/src/prelude.rs

pub use crate::card::CardInfo;
pub use crate::device::{Device, DeviceBuilder, InitReport, InitStep, SessionConfig};
pub use crate::device::{Ready, SessionState, Uninitialized};
pub use crate::transport::{MockTransport, Transport};
#[cfg(feature = "serial")]
pub use crate::transport::SerialTransport;
pub use crate::{Error, Idm, Pmm, Result, SystemCode};

pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_read_timeout, ms, parse_hex};
