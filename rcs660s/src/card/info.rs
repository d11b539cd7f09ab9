// rcs660s/src/card/info.rs

use std::fmt;

use crate::types::{Idm, Pmm};

/// Identifiers reported by a card that answered a polling command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardInfo {
    pub idm: Idm,
    pub pmm: Pmm,
}

impl CardInfo {
    pub fn new(idm: Idm, pmm: Pmm) -> Self {
        Self { idm, pmm }
    }

    pub fn idm(&self) -> &Idm {
        &self.idm
    }

    pub fn pmm(&self) -> &Pmm {
        &self.pmm
    }
}

impl fmt::Display for CardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "idm={} pmm={}", self.idm.to_hex(), self.pmm.to_hex())
    }
}
