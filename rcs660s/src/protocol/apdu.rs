// rcs660s/src/protocol/apdu.rs

//! PC/SC escape APDUs (`FF C2 P1 P2 Lc data [Le]`) and their TLV data objects.

use crate::constants::{APDU_CLA_ESCAPE, APDU_INS_ESCAPE, MAX_APDU_LEN};
use crate::types::SystemCode;
use crate::{Error, Result};

/// P1/P2 pairs of the escape functions used by the driver
pub mod function {
    /// Manage Session
    pub const MANAGE_SESSION: (u8, u8) = (0x00, 0x00);
    /// Transparent Exchange
    pub const TRANSPARENT_EXCHANGE: (u8, u8) = (0x00, 0x01);
    /// Switch Protocol
    pub const SWITCH_PROTOCOL: (u8, u8) = (0x00, 0x02);
}

/// Tags of the data objects used by the driver
pub mod tag {
    pub const START_TRANSPARENT_SESSION: u16 = 0x81;
    pub const END_TRANSPARENT_SESSION: u16 = 0x82;
    pub const TURN_ON_RF: u16 = 0x84;
    pub const SWITCH_PROTOCOL: u16 = 0x8F;
    pub const TRANSCEIVE_FLAGS: u16 = 0x90;
    pub const TRANSMISSION_BIT_FRAMING: u16 = 0x91;
    pub const TRANSCEIVE: u16 = 0x95;
    pub const TIMER: u16 = 0x5F46;
    pub const SESSION_PARAMETERS: u16 = 0xFF6E;
}

/// Timer value (µs) sent with the polling command
pub const POLLING_TIMER_US: u32 = 0x0000_EA60;
/// Timer value (µs) sent with a card command
pub const CARD_COMMAND_TIMER_US: u32 = 0x0001_EA60;

/// FeliCa polling command code
pub const FELICA_POLLING: u8 = 0x00;

/// A single TLV data object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataObject {
    /// Timer, value is a little-endian u32 in microseconds
    Timer(u32),
    /// Transceive, value is sent to the card as-is
    Transceive(Vec<u8>),
    /// Any other object; tags above 0xFF are written as two bytes
    Other { tag: u16, value: Vec<u8> },
}

impl DataObject {
    pub fn new(tag: u16, value: &[u8]) -> Self {
        DataObject::Other {
            tag,
            value: value.to_vec(),
        }
    }

    fn tag(&self) -> u16 {
        match self {
            DataObject::Timer(_) => tag::TIMER,
            DataObject::Transceive(_) => tag::TRANSCEIVE,
            DataObject::Other { tag, .. } => *tag,
        }
    }

    pub fn encode_into(&self, out: &mut Vec<u8>) -> Result<()> {
        let timer;
        let value: &[u8] = match self {
            DataObject::Timer(us) => {
                timer = us.to_le_bytes();
                &timer
            }
            DataObject::Transceive(v) | DataObject::Other { value: v, .. } => v,
        };

        let len = u8::try_from(value.len()).map_err(|_| Error::InvalidLength {
            expected: u8::MAX as usize,
            actual: value.len(),
        })?;

        let tag = self.tag();
        if tag > 0xFF {
            out.extend_from_slice(&tag.to_be_bytes());
        } else {
            out.push(tag as u8);
        }
        out.push(len);
        out.extend_from_slice(value);
        Ok(())
    }
}

/// Escape APDU builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apdu {
    p1: u8,
    p2: u8,
    lc: Option<u8>,
    objects: Vec<DataObject>,
    le: Option<u8>,
}

impl Apdu {
    pub fn escape((p1, p2): (u8, u8)) -> Self {
        Self {
            p1,
            p2,
            lc: None,
            objects: Vec::new(),
            le: None,
        }
    }

    pub fn with(mut self, object: DataObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Force Lc instead of deriving it from the encoded data objects.
    pub fn with_lc(mut self, lc: u8) -> Self {
        self.lc = Some(lc);
        self
    }

    pub fn with_le(mut self, le: u8) -> Self {
        self.le = Some(le);
        self
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        for obj in &self.objects {
            obj.encode_into(&mut data)?;
        }

        let lc = match self.lc {
            Some(lc) => lc,
            None => u8::try_from(data.len()).map_err(|_| Error::InvalidLength {
                expected: u8::MAX as usize,
                actual: data.len(),
            })?,
        };

        let mut out = Vec::with_capacity(5 + data.len() + 1);
        out.extend_from_slice(&[APDU_CLA_ESCAPE, APDU_INS_ESCAPE, self.p1, self.p2, lc]);
        out.extend_from_slice(&data);
        if let Some(le) = self.le {
            out.push(le);
        }

        if out.len() > MAX_APDU_LEN {
            return Err(Error::PayloadTooLong {
                max: MAX_APDU_LEN,
                actual: out.len(),
            });
        }
        Ok(out)
    }
}

/// Polling APDU: timer + transceive(FeliCa polling, request code 0, 1 slot).
pub fn polling(system_code: SystemCode) -> Result<Vec<u8>> {
    let sc = system_code.to_be_bytes();
    let felica = vec![0x06, FELICA_POLLING, sc[0], sc[1], 0x00, 0x00];
    Apdu::escape(function::TRANSPARENT_EXCHANGE)
        .with(DataObject::Timer(POLLING_TIMER_US))
        .with(DataObject::Transceive(felica))
        .to_bytes()
}

/// Card command APDU: timer + transceive carrying `command` behind a length
/// byte and followed by a zero pad. Lc is fixed at
/// [`crate::constants::CARD_COMMAND_LC`], which is exact for a 15-byte
/// single-block command.
pub fn card_command(command: &[u8]) -> Result<Vec<u8>> {
    let wrapped_len = command.len() + 2;
    let len_byte = u8::try_from(wrapped_len).map_err(|_| Error::InvalidLength {
        expected: u8::MAX as usize - 2,
        actual: command.len(),
    })?;

    let mut felica = Vec::with_capacity(wrapped_len);
    felica.push(len_byte);
    felica.extend_from_slice(command);
    felica.push(0x00);

    Apdu::escape(function::TRANSPARENT_EXCHANGE)
        .with_lc(crate::constants::CARD_COMMAND_LC)
        .with(DataObject::Timer(CARD_COMMAND_TIMER_US))
        .with(DataObject::Transceive(felica))
        .to_bytes()
}

/// Fixed session-management APDUs sent during initialization.
pub mod session {
    use super::{Apdu, DataObject, function, tag};
    use crate::Result;

    pub fn end_transparent_session() -> Result<Vec<u8>> {
        Apdu::escape(function::MANAGE_SESSION)
            .with(DataObject::new(tag::END_TRANSPARENT_SESSION, &[]))
            .to_bytes()
    }

    pub fn start_transparent_session() -> Result<Vec<u8>> {
        Apdu::escape(function::MANAGE_SESSION)
            .with(DataObject::new(tag::START_TRANSPARENT_SESSION, &[]))
            .to_bytes()
    }

    /// Switch to FeliCa 212 kbps, layer 3
    pub fn switch_protocol_felica() -> Result<Vec<u8>> {
        Apdu::escape(function::SWITCH_PROTOCOL)
            .with(DataObject::new(tag::SWITCH_PROTOCOL, &[0x03, 0x00]))
            .to_bytes()
    }

    /// Reader appends/strips CRC and handles parity
    pub fn transceive_flags() -> Result<Vec<u8>> {
        Apdu::escape(function::TRANSPARENT_EXCHANGE)
            .with(DataObject::new(tag::TRANSCEIVE_FLAGS, &[0x00, 0x1C]))
            .to_bytes()
    }

    pub fn transmission_bit_framing() -> Result<Vec<u8>> {
        Apdu::escape(function::TRANSPARENT_EXCHANGE)
            .with(DataObject::new(tag::TRANSMISSION_BIT_FRAMING, &[0x00]))
            .to_bytes()
    }

    pub fn set_parameters() -> Result<Vec<u8>> {
        Apdu::escape(function::MANAGE_SESSION)
            .with(DataObject::new(tag::SESSION_PARAMETERS, &[0x05, 0x01, 0x89]))
            .to_bytes()
    }

    pub fn turn_on_rf_field() -> Result<Vec<u8>> {
        Apdu::escape(function::MANAGE_SESSION)
            .with(DataObject::new(tag::TURN_ON_RF, &[]))
            .with_le(0x00)
            .to_bytes()
    }
}
