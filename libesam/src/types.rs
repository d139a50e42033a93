// libesam-rs/libesam/src/types.rs

use crate::Error;
use crate::constants::{SESSION_INIT_LEN, STATUS_SUCCESS};
use derive_more::Display;
use std::convert::TryFrom;

/// Status word carried in every response frame. Rendered as four
/// uppercase hex digits, e.g. `9000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:04X}", _0)]
pub struct StatusWord(u16);

impl StatusWord {
    pub const SUCCESS: Self = Self(STATUS_SUCCESS);

    pub const fn new(sw: u16) -> Self {
        Self(sw)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn is_success(&self) -> bool {
        *self == Self::SUCCESS
    }

    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for StatusWord {
    fn from(sw: u16) -> Self {
        Self(sw)
    }
}

/// SessionInit - Newtype Pattern (48 バイト)
///
/// Peer random value sent with session key negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionInit([u8; SESSION_INIT_LEN]);

impl SessionInit {
    pub fn from_bytes(bytes: [u8; SESSION_INIT_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SESSION_INIT_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for SessionInit {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != SESSION_INIT_LEN {
            return Err(Error::InvalidLength {
                expected: SESSION_INIT_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; SESSION_INIT_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}
