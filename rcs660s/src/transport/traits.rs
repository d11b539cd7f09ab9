// rcs660s/src/transport/traits.rs

use crate::Result;
use crate::constants::RESET_PULSE;

/// Transport trait abstracts the serial line away from protocol/device logic.
///
/// Implementations only move bytes; they never interpret frames. Reads are
/// non-blocking: timeouts are enforced by the caller against `now_millis`.
pub trait Transport {
    /// Write all bytes to the reader
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Return the next received byte, or `None` if nothing is available yet
    fn try_read_byte(&mut self) -> Result<Option<u8>>;

    /// Monotonic clock in milliseconds
    fn now_millis(&self) -> u64;

    /// Hardware reset pulse. The default writes the wake byte; transports
    /// that need a settle delay override this.
    fn reset(&mut self) -> Result<()> {
        self.write(&[RESET_PULSE])
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        (**self).write(data)
    }

    fn try_read_byte(&mut self) -> Result<Option<u8>> {
        (**self).try_read_byte()
    }

    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        (**self).write(data)
    }

    fn try_read_byte(&mut self) -> Result<Option<u8>> {
        (**self).try_read_byte()
    }

    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}
