// rcs660s/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::io::{Read, Write};
use std::thread;
use std::time::{Duration, Instant};

use serialport::SerialPort;

use crate::Result;
use crate::constants::RESET_PULSE;
use crate::transport::traits::Transport;

/// Factory default UART speed of the RC-S660/S
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Settle time after the reset pulse
const RESET_SETTLE: Duration = Duration::from_millis(20);

/// Transport over a host serial port. Feature-gated behind
/// `--features serial` and backed by the `serialport` crate.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
    epoch: Instant,
}

impl SerialTransport {
    /// Open `path` at `baud` with 8N1 framing and no flow control.
    pub fn open(path: &str, baud: u32) -> Result<Self> {
        let port = serialport::new(path, baud)
            .data_bits(serialport::DataBits::Eight)
            .parity(serialport::Parity::None)
            .stop_bits(serialport::StopBits::One)
            .flow_control(serialport::FlowControl::None)
            .timeout(Duration::from_millis(10))
            .open()?;
        Ok(Self::from_port(port))
    }

    /// Wrap an already-configured port.
    pub fn from_port(port: Box<dyn SerialPort>) -> Self {
        Self {
            port,
            epoch: Instant::now(),
        }
    }

    pub fn into_inner(self) -> Box<dyn SerialPort> {
        self.port
    }
}

impl Transport for SerialTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.port.write_all(data)?;
        self.port.flush()?;
        Ok(())
    }

    fn try_read_byte(&mut self) -> Result<Option<u8>> {
        if self.port.bytes_to_read()? == 0 {
            return Ok(None);
        }
        let mut b = [0u8; 1];
        match self.port.read(&mut b) {
            Ok(1) => Ok(Some(b[0])),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn now_millis(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    fn reset(&mut self) -> Result<()> {
        self.write(&[RESET_PULSE])?;
        thread::sleep(RESET_SETTLE);
        Ok(())
    }
}
