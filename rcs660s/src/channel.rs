// rcs660s/src/channel.rs

//! Timeout-bounded byte channel on top of a [`Transport`].
//!
//! Reads poll the transport in a tight loop with no backoff until the
//! requested count is collected or the timeout, measured against the
//! transport clock from the start of the call, has elapsed.

use std::time::Duration;

use log::{Level, debug, log_enabled};

use crate::transport::Transport;
use crate::utils::{bytes_to_hex_spaced, expired};
use crate::{Error, Result};

pub struct Channel<T> {
    transport: T,
}

impl<T: Transport> Channel<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Single blocking write, no timeout.
    pub fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.transport.write(data)?;
        if log_enabled!(Level::Debug) {
            debug!("write ({}): {}", data.len(), bytes_to_hex_spaced(data));
        }
        Ok(())
    }

    /// Fill `buf` completely or fail with `Error::Timeout`. On failure the
    /// buffer is zeroed so no partial data leaks to the caller.
    pub fn read_exact(&mut self, buf: &mut [u8], timeout: Duration) -> Result<()> {
        let t0 = self.transport.now_millis();
        let mut nread = 0usize;

        while nread < buf.len() {
            if expired(t0, self.transport.now_millis(), timeout) {
                buf.fill(0);
                debug!("read timeout after {} of {} bytes", nread, buf.len());
                return Err(Error::Timeout {
                    expected: buf.len(),
                    received: nread,
                });
            }

            if let Some(b) = self.transport.try_read_byte()? {
                buf[nread] = b;
                nread += 1;
            }
        }

        if log_enabled!(Level::Debug) {
            debug!("read ({}): {}", buf.len(), bytes_to_hex_spaced(buf));
        }
        Ok(())
    }

    /// Convenience wrapper around `read_exact` returning an owned buffer.
    pub fn read_vec(&mut self, count: usize, timeout: Duration) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; count];
        self.read_exact(&mut buf, timeout)?;
        Ok(buf)
    }

    /// Forward the hardware reset pulse to the transport.
    pub fn reset(&mut self) -> Result<()> {
        self.transport.reset()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }
}
