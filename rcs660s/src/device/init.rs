// rcs660s/src/device/init.rs

use derive_more::Display;

use crate::protocol::apdu::session;
use crate::{Error, Result};

/// Fixed initialization steps, in the order they are sent.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum InitStep {
    #[display(fmt = "end transparent session")]
    EndTransparentSession,
    #[display(fmt = "start transparent session")]
    StartTransparentSession,
    #[display(fmt = "switch protocol")]
    SwitchProtocol,
    #[display(fmt = "set transceive flags")]
    TransceiveFlags,
    #[display(fmt = "set bit framing")]
    BitFraming,
    #[display(fmt = "set session parameters")]
    SessionParameters,
    #[display(fmt = "turn on rf field")]
    TurnOnRf,
}

impl InitStep {
    pub const SEQUENCE: [InitStep; 7] = [
        InitStep::EndTransparentSession,
        InitStep::StartTransparentSession,
        InitStep::SwitchProtocol,
        InitStep::TransceiveFlags,
        InitStep::BitFraming,
        InitStep::SessionParameters,
        InitStep::TurnOnRf,
    ];

    pub fn apdu(self) -> Result<Vec<u8>> {
        match self {
            InitStep::EndTransparentSession => session::end_transparent_session(),
            InitStep::StartTransparentSession => session::start_transparent_session(),
            InitStep::SwitchProtocol => session::switch_protocol_felica(),
            InitStep::TransceiveFlags => session::transceive_flags(),
            InitStep::BitFraming => session::transmission_bit_framing(),
            InitStep::SessionParameters => session::set_parameters(),
            InitStep::TurnOnRf => session::turn_on_rf_field(),
        }
    }
}

/// A step that did not complete cleanly.
#[derive(Debug)]
pub struct InitFailure {
    pub step: InitStep,
    pub error: Error,
}

/// Outcome of `Device::initialize`. Initialization never stops at a failed
/// step; the failures are collected here instead.
#[derive(Debug, Default)]
pub struct InitReport {
    failures: Vec<InitFailure>,
}

impl InitReport {
    pub(crate) fn record(&mut self, step: InitStep, outcome: Result<()>) {
        if let Err(error) = outcome {
            self.failures.push(InitFailure { step, error });
        }
    }

    /// True when every step was acknowledged and answered.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[InitFailure] {
        &self.failures
    }

    pub fn failed_steps(&self) -> Vec<InitStep> {
        self.failures.iter().map(|f| f.step).collect()
    }
}
