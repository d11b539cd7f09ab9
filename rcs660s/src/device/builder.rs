// rcs660s/src/device/builder.rs

use std::time::Duration;

use crate::device::config::SessionConfig;
use crate::device::handle::{Device, Uninitialized};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
pub struct DeviceBuilder<T> {
    transport: Option<T>,
    config: SessionConfig,
}

impl<T: Transport> Default for DeviceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> DeviceBuilder<T> {
    pub fn new() -> Self {
        Self {
            transport: None,
            config: SessionConfig::default(),
        }
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn verify_data_checksum(mut self, enabled: bool) -> Self {
        self.config.verify_data_checksum = enabled;
        self
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and return an uninitialized Device.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    pub fn build_uninitialized(self) -> Result<Device<T, Uninitialized>> {
        match self.transport {
            Some(t) => Ok(Device::with_config(t, self.config)),
            None => Err(Error::DeviceNotFound),
        }
    }
}
