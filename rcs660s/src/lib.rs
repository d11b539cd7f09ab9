// rcs660s/src/lib.rs

//! rcs660s
//!
//! Pure Rust host driver for the Sony RC-S660/S FeliCa reader over a UART
//! link: framing, CCID escape messaging, session setup, card polling and
//! transparent card commands.

pub mod card;
pub mod channel;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the identifier newtypes are available without the module path.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
