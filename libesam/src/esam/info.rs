// libesam-rs/libesam/src/esam/info.rs

use std::convert::TryFrom;

use crate::Error;

/// Decoded ESAM status/session descriptor.
///
/// Built once from a validated 82-byte payload and never mutated
/// afterwards; fields are exposed through accessors only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EsamInfo {
    pub(crate) esam_number: String,
    pub(crate) esam_version: String,
    pub(crate) symmetric_key_version: String,
    pub(crate) main_station_certificate_version: u8,
    pub(crate) terminal_certificate_version: u8,
    pub(crate) session_time_limit: u32,
    #[cfg_attr(feature = "serde", serde(rename = "session_time_remaining_time"))]
    pub(crate) session_time_remaining: u32,
    #[cfg_attr(feature = "serde", serde(rename = "ASCTR"))]
    pub(crate) asctr: u32,
    #[cfg_attr(feature = "serde", serde(rename = "ARCTR"))]
    pub(crate) arctr: u32,
    #[cfg_attr(feature = "serde", serde(rename = "AGSEQ"))]
    pub(crate) agseq: u32,
    pub(crate) terminal_certificate_number: String,
    pub(crate) main_station_certificate_number: String,
}

impl EsamInfo {
    /// Decode the record from a validated response payload.
    pub fn decode(payload: &[u8]) -> crate::Result<Self> {
        crate::protocol::responses::decode_esam_info(payload)
    }

    /// ESAM serial number (8 bytes, hex)
    pub fn esam_number(&self) -> &str {
        &self.esam_number
    }

    /// ESAM version (4 bytes, hex)
    pub fn esam_version(&self) -> &str {
        &self.esam_version
    }

    /// Symmetric key version (16 bytes, hex)
    pub fn symmetric_key_version(&self) -> &str {
        &self.symmetric_key_version
    }

    pub fn main_station_certificate_version(&self) -> u8 {
        self.main_station_certificate_version
    }

    pub fn terminal_certificate_version(&self) -> u8 {
        self.terminal_certificate_version
    }

    /// Session time-limit threshold
    pub fn session_time_limit(&self) -> u32 {
        self.session_time_limit
    }

    pub fn session_time_remaining(&self) -> u32 {
        self.session_time_remaining
    }

    /// Single-address application negotiation counter
    pub fn asctr(&self) -> u32 {
        self.asctr
    }

    /// Active report counter
    pub fn arctr(&self) -> u32 {
        self.arctr
    }

    /// Application broadcast sequence number
    pub fn agseq(&self) -> u32 {
        self.agseq
    }

    pub fn terminal_certificate_number(&self) -> &str {
        &self.terminal_certificate_number
    }

    pub fn main_station_certificate_number(&self) -> &str {
        &self.main_station_certificate_number
    }
}

impl TryFrom<&[u8]> for EsamInfo {
    type Error = Error;

    fn try_from(payload: &[u8]) -> Result<Self, Self::Error> {
        Self::decode(payload)
    }
}
