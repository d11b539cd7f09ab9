//! Small helpers shared across the crate: hex formatting for traces and
//! timeout arithmetic.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
