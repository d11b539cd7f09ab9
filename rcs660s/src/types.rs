// rcs660s/src/types.rs

use std::fmt;

use derive_more::Display;

use crate::Error;

/// Length of both card identifiers returned by polling.
pub const CARD_ID_LEN: usize = 8;

macro_rules! card_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name([u8; CARD_ID_LEN]);

        impl $name {
            pub const fn from_bytes(bytes: [u8; CARD_ID_LEN]) -> Self {
                Self(bytes)
            }

            pub fn as_bytes(&self) -> &[u8; CARD_ID_LEN] {
                &self.0
            }

            /// Uppercase hex without separators.
            pub fn to_hex(&self) -> String {
                crate::utils::bytes_to_hex(&self.0)
            }
        }

        impl From<[u8; CARD_ID_LEN]> for $name {
            fn from(bytes: [u8; CARD_ID_LEN]) -> Self {
                Self(bytes)
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = Error;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                <[u8; CARD_ID_LEN]>::try_from(bytes)
                    .map(Self)
                    .map_err(|_| Error::InvalidLength {
                        expected: CARD_ID_LEN,
                        actual: bytes.len(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }
    };
}

card_id! {
    /// Manufacture ID: card serial, also addresses every later card command.
    Idm
}

card_id! {
    /// Manufacture parameters: IC type and response-time coefficients.
    Pmm
}

/// FeliCa system code. Carried big-endian inside the polling command.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{:04X}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemCode(u16);

impl SystemCode {
    /// Wildcard: any system answers.
    pub const ANY: Self = Self(0xFFFF);
    pub const COMMON: Self = Self(0xFE00);
    pub const SUICA: Self = Self(0x0003);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl Default for SystemCode {
    fn default() -> Self {
        Self::ANY
    }
}

impl From<u16> for SystemCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}
