// rcs660s/src/transport/mock.rs

use std::cell::Cell;
use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records written data and hands out
/// queued inbound bytes one at a time.
///
/// The clock is simulated: it only moves when `try_read_byte` finds the
/// queue empty, by `tick_ms` per poll. A read with a 1000 ms timeout
/// against an empty queue therefore terminates after 1000 polls.
#[derive(Debug)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    rx: VecDeque<u8>,
    clock: Cell<u64>,
    pub tick_ms: u64,
    /// Testing hook: number of write calls that should fail
    pub write_failures: usize,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            rx: VecDeque::new(),
            clock: Cell::new(0),
            tick_ms: 1,
            write_failures: 0,
        }
    }

    /// Queue raw inbound bytes.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }

    /// Queue the reader's ACK frame.
    pub fn push_ack(&mut self) {
        self.push_bytes(&crate::constants::ACK_FRAME);
    }

    /// Queue a framed payload.
    pub fn push_frame(&mut self, payload: &[u8]) -> Result<()> {
        let frame = crate::protocol::Frame::encode(payload)?;
        self.push_bytes(&frame);
        Ok(())
    }

    /// Number of queued bytes nobody has read yet.
    pub fn remaining(&self) -> usize {
        self.rx.len()
    }

    /// Set how many subsequent write calls should fail (for tests).
    pub fn set_write_failures(&mut self, n: usize) {
        self.write_failures = n;
    }

    /// All written bytes, concatenated.
    pub fn sent_bytes(&self) -> Vec<u8> {
        self.sent.concat()
    }

    /// Current simulated time.
    pub fn elapsed_ms(&self) -> u64 {
        self.clock.get()
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        if self.write_failures > 0 {
            self.write_failures -= 1;
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "simulated write failure",
            )));
        }
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn try_read_byte(&mut self) -> Result<Option<u8>> {
        match self.rx.pop_front() {
            Some(b) => Ok(Some(b)),
            None => {
                self.clock.set(self.clock.get() + self.tick_ms);
                Ok(None)
            }
        }
    }

    fn now_millis(&self) -> u64 {
        self.clock.get()
    }
}
