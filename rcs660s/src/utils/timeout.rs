//! Timeout helpers. All read timeouts are measured against the transport's
//! millisecond clock, never against wall time directly.

use std::time::Duration;

/// Read timeout applied when a session is created without one.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_READ_TIMEOUT_MS)
}

/// True once `now - start` has reached `timeout`. A clock that goes
/// backwards counts as no time elapsed.
pub fn expired(start_ms: u64, now_ms: u64, timeout: Duration) -> bool {
    let limit = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
    now_ms.saturating_sub(start_ms) >= limit
}
