// rcs660s/src/device/handle.rs

use std::marker::PhantomData;
use std::time::Duration;

use derive_more::Display;
use log::{debug, info, warn};

use crate::card::CardInfo;
use crate::channel::Channel;
use crate::constants::{
    CARD_RESPONSE_DATA_OFFSET, CARD_RESPONSE_LEN_OFFSET, POLLING_IDM_OFFSET, POLLING_PMM_OFFSET,
    POLLING_RESPONSE_LEN,
};
use crate::device::config::SessionConfig;
use crate::device::init::{InitReport, InitStep};
use crate::protocol::parser::{byte_at, idm_at, pmm_at, slice_at};
use crate::protocol::{apdu, escape, handshake};
use crate::transport::Transport;
use crate::types::{Idm, Pmm, SystemCode};
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
pub struct Ready;

/// Runtime view of the session state, mainly for logs.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    #[display(fmt = "uninitialized")]
    Uninitialized,
    #[display(fmt = "initializing")]
    Initializing,
    #[display(fmt = "ready")]
    Ready,
}

/// Reader session. Owns the transport, the CCID sequence counter, the
/// timeout and the identifiers of the last card found by polling.
pub struct Device<T, State = Uninitialized> {
    channel: Channel<T>,
    config: SessionConfig,
    seq: u8,
    state: SessionState,
    idm: Option<Idm>,
    pmm: Option<Pmm>,
    init_report: InitReport,
    _state: PhantomData<State>,
}

impl<T: Transport, S> Device<T, S> {
    /// Last sequence number put on the wire.
    pub fn sequence(&self) -> u8 {
        self.seq
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.config.timeout = timeout;
    }

    pub fn transport(&self) -> &T {
        self.channel.transport()
    }

    pub fn transport_mut(&mut self) -> &mut T {
        self.channel.transport_mut()
    }

    pub fn into_transport(self) -> T {
        self.channel.into_inner()
    }

    fn next_seq(&mut self) -> u8 {
        self.seq = self.seq.wrapping_add(1);
        self.seq
    }

    /// Send an escape APDU under the next sequence number.
    fn send_escape(&mut self, apdu: &[u8]) -> Result<()> {
        let seq = self.next_seq();
        let timeout = self.config.timeout;
        escape::send_apdu(&mut self.channel, seq, apdu, timeout)
    }

    fn receive_escape(&mut self) -> Result<Vec<u8>> {
        escape::receive_response(
            &mut self.channel,
            self.config.timeout,
            self.config.verify_data_checksum,
        )
    }

    /// Send `apdu` and always read the reply frame, even when the ACK was
    /// bad, so the reply never lingers in front of the next ACK. An ACK
    /// failure takes precedence over the read result.
    fn exchange(&mut self, apdu: &[u8]) -> Result<Vec<u8>> {
        let sent = self.send_escape(apdu);
        let received = self.receive_escape();
        sent?;
        received
    }

    fn send_abort(&mut self) {
        let seq = self.next_seq();
        handshake::abort(
            &mut self.channel,
            seq,
            self.config.timeout,
            self.config.verify_data_checksum,
        );
    }

    fn into_state<N>(self, state: SessionState) -> Device<T, N> {
        Device {
            channel: self.channel,
            config: self.config,
            seq: self.seq,
            state,
            idm: self.idm,
            pmm: self.pmm,
            init_report: self.init_report,
            _state: PhantomData,
        }
    }
}

impl<T: Transport> Device<T, Uninitialized> {
    /// Create a Device from an existing Transport instance with the default
    /// configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, SessionConfig::default())
    }

    pub fn with_config(transport: T, config: SessionConfig) -> Self {
        Self {
            channel: Channel::new(transport),
            config,
            seq: 0,
            state: SessionState::Uninitialized,
            idm: None,
            pmm: None,
            init_report: InitReport::default(),
            _state: PhantomData,
        }
    }

    /// Reset pulse, abort, then the fixed session setup sequence.
    ///
    /// Only a failing reset pulse is returned as an error. Every later step
    /// is attempted in order regardless of earlier failures; what went
    /// wrong is logged and kept in [`Device::init_report`].
    pub fn initialize(mut self) -> Result<Device<T, Ready>> {
        self.state = SessionState::Initializing;
        info!("reader {}", self.state);

        self.channel.reset()?;
        self.send_abort();

        let mut report = InitReport::default();
        for step in InitStep::SEQUENCE {
            let outcome = self.run_init_step(step);
            if let Err(e) = &outcome {
                warn!("init step '{}' failed: {}", step, e);
            }
            report.record(step, outcome);
        }

        if report.is_clean() {
            info!("reader ready");
        } else {
            warn!(
                "reader ready with {} failed init step(s)",
                report.failures().len()
            );
        }

        self.init_report = report;
        Ok(self.into_state(SessionState::Ready))
    }

    /// The response read is attempted even if the ACK was not seen.
    fn run_init_step(&mut self, step: InitStep) -> Result<()> {
        let apdu = step.apdu()?;
        let resp = self.exchange(&apdu)?;
        debug!("init step '{}' answered with {} bytes", step, resp.len());
        Ok(())
    }
}

impl<T: Transport> Device<T, Ready> {
    /// Outcome of the initialization sequence.
    pub fn init_report(&self) -> &InitReport {
        &self.init_report
    }

    /// IDm of the last card found, if any poll succeeded yet.
    pub fn idm(&self) -> Option<&Idm> {
        self.idm.as_ref()
    }

    /// PMm of the last card found, if any poll succeeded yet.
    pub fn pmm(&self) -> Option<&Pmm> {
        self.pmm.as_ref()
    }

    pub fn last_card(&self) -> Option<CardInfo> {
        match (self.idm, self.pmm) {
            (Some(idm), Some(pmm)) => Some(CardInfo::new(idm, pmm)),
            _ => None,
        }
    }

    /// Poll for a FeliCa card. Returns true and updates IDm/PMm when a card
    /// answered; any error is logged and reported as "no card".
    pub fn poll(&mut self, system_code: SystemCode) -> bool {
        match self.polling(system_code) {
            Ok(found) => found.is_some(),
            Err(e) => {
                debug!("polling {} failed: {}", system_code, e);
                false
            }
        }
    }

    /// Poll for a FeliCa card.
    ///
    /// Card presence is decided by the response length alone: exactly 44
    /// bytes means a card answered. Any other length leaves the stored
    /// identifiers untouched and yields `Ok(None)`.
    pub fn polling(&mut self, system_code: SystemCode) -> Result<Option<CardInfo>> {
        let apdu = apdu::polling(system_code)?;
        let resp = self.exchange(&apdu)?;

        if resp.len() != POLLING_RESPONSE_LEN {
            debug!("no card ({} byte response)", resp.len());
            return Ok(None);
        }

        let idm = idm_at(&resp, POLLING_IDM_OFFSET)?;
        let pmm = pmm_at(&resp, POLLING_PMM_OFFSET)?;
        self.idm = Some(idm);
        self.pmm = Some(pmm);
        info!("card found: idm={} pmm={}", idm.to_hex(), pmm.to_hex());

        Ok(Some(CardInfo::new(idm, pmm)))
    }

    /// Send `command` to the card through a transparent exchange and return
    /// the card's response (without its LEN byte).
    ///
    /// `capacity` bounds the accepted response length.
    pub fn card_command(&mut self, command: &[u8], capacity: usize) -> Result<Vec<u8>> {
        let apdu = apdu::card_command(command)?;
        let resp = self.exchange(&apdu)?;

        escape::validate_escape_response(&resp).inspect_err(|e| {
            warn!("card command rejected: {}", e);
        })?;

        let len = match byte_at(&resp, CARD_RESPONSE_LEN_OFFSET)? {
            0 => {
                return Err(Error::InvalidLength {
                    expected: 1,
                    actual: 0,
                });
            }
            n => (n - 1) as usize,
        };

        if len > capacity {
            return Err(Error::InvalidLength {
                expected: capacity,
                actual: len,
            });
        }

        let data = slice_at(&resp, CARD_RESPONSE_DATA_OFFSET, len)?;
        Ok(data.to_vec())
    }

    /// Best-effort abort of whatever the reader is doing. Never fails.
    pub fn abort(&mut self) {
        self.send_abort();
    }
}
