// libesam-rs/libesam/src/protocol/commands/mod.rs

pub mod select;
pub mod session;

pub use select::{
    encode_esam_info, encode_master_station_certificate, encode_select,
    encode_terminal_certificate,
};
pub use session::encode_session_key;

use derive_more::Display;

use crate::Result;
use crate::constants::{CERTIFICATE_TRANSFER_LEN, INFO_TRANSFER_LEN, SESSION_TRANSFER_LEN};
use crate::types::SessionInit;

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Command {
    #[display(fmt = "SelectMasterStationCertificate")]
    MasterStationCertificate,
    #[display(fmt = "SelectTerminalCertificate")]
    TerminalCertificate,
    #[display(fmt = "SelectEsamInfo")]
    EsamInfo,
    #[display(fmt = "SessionKeyConnect")]
    SessionKeyConnect {
        session_init: SessionInit,
        signature: Vec<u8>,
    },
}

impl Command {
    /// Build a session key negotiation command, checking the peer random
    /// value length.
    pub fn session_key_connect(session_init: &[u8], signature: &[u8]) -> Result<Self> {
        Ok(Self::SessionKeyConnect {
            session_init: SessionInit::try_from(session_init)?,
            signature: signature.to_vec(),
        })
    }

    /// Instruction byte (INS) of the command.
    pub fn instruction(&self) -> u8 {
        match self {
            Self::MasterStationCertificate | Self::TerminalCertificate | Self::EsamInfo => 0x36,
            Self::SessionKeyConnect { .. } => 0x02,
        }
    }

    /// Default duplex transfer length for this command. The bus exchange is
    /// symmetric, so this is also the number of bytes read back.
    pub fn transfer_len(&self) -> usize {
        match self {
            Self::MasterStationCertificate | Self::TerminalCertificate => CERTIFICATE_TRANSFER_LEN,
            Self::EsamInfo => INFO_TRANSFER_LEN,
            Self::SessionKeyConnect { .. } => SESSION_TRANSFER_LEN,
        }
    }

    /// Encode the command into the raw body (header + params), without the
    /// sync marker and checksum.
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Self::MasterStationCertificate => Ok(encode_master_station_certificate()),
            Self::TerminalCertificate => Ok(encode_terminal_certificate()),
            Self::EsamInfo => Ok(encode_esam_info()),
            Self::SessionKeyConnect {
                session_init,
                signature,
            } => encode_session_key(session_init, signature),
        }
    }
}
