// rcs660s/src/device/config.rs

//! Session configuration

use std::time::Duration;

use crate::utils::default_read_timeout;

/// Per-session settings. Log verbosity is not part of this: it follows
/// whatever `log` implementation the host installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    /// Bound applied to every blocking read (ACK, frame header, payload)
    pub timeout: Duration,
    /// Check DCS and postamble of received frames. Off by default: the
    /// reader firmware's trailer has never been checked by earlier hosts.
    pub verify_data_checksum: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout: default_read_timeout(),
            verify_data_checksum: false,
        }
    }
}
