// libesam-rs/libesam/src/protocol/responses/mod.rs

pub mod certificate;
pub mod info;
pub mod session;

pub use certificate::decode_certificate;
pub use info::decode_esam_info;
pub use session::decode_session_key;

use crate::esam::{EsamInfo, SessionKey};
use crate::protocol::commands::Command;

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    MasterStationCertificate(String),
    TerminalCertificate(String),
    EsamInfo(EsamInfo),
    SessionKey(SessionKey),
}

impl Response {
    /// Decode a validated frame payload for the command that produced it.
    pub fn decode(cmd: &Command, data: &[u8]) -> crate::Result<Self> {
        match cmd {
            Command::MasterStationCertificate => {
                Ok(Self::MasterStationCertificate(decode_certificate(data)))
            }
            Command::TerminalCertificate => Ok(Self::TerminalCertificate(decode_certificate(data))),
            Command::EsamInfo => Ok(Self::EsamInfo(decode_esam_info(data)?)),
            Command::SessionKeyConnect { .. } => Ok(Self::SessionKey(decode_session_key(data)?)),
        }
    }
}
