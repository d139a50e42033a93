// libesam-rs/libesam/src/constants.rs
//! Common protocol constants used across the crate

/// Sync marker that starts every command and response frame
pub const SYNC_MARKER: u8 = 0x55;

/// Status word reported by the ESAM on success
pub const STATUS_SUCCESS: u16 = 0x9000;

/// Response header after the sync marker: status(2) + length(2)
pub const RESPONSE_HEADER_LEN: usize = 4;

/// Length of the ESAM info record payload
pub const ESAM_INFO_LEN: usize = 82;

/// Length of the peer random value sent with session key negotiation, and
/// the offset at which the reply is split into session data and signature
pub const SESSION_INIT_LEN: usize = 48;

/// Duplex transfer length for certificate queries
pub const CERTIFICATE_TRANSFER_LEN: usize = 4096;

/// Duplex transfer length for the info record query
pub const INFO_TRANSFER_LEN: usize = 1024;

/// Duplex transfer length for session key negotiation
pub const SESSION_TRANSFER_LEN: usize = 1024;

/// Command header (CLA INS P1) for certificate and info selection; P2 is
/// one of the `SELECT_*` selectors
pub const CMD_SELECT_HEADER: [u8; 3] = [0x80, 0x36, 0x00];

/// Command header (CLA INS P1 P2) for session key negotiation
pub const CMD_SESSION_HEADER: [u8; 4] = [0x80, 0x02, 0x00, 0x00];

/// P2 selectors used with `CMD_SELECT_HEADER`
pub const SELECT_MASTER_STATION_CERT: u8 = 0x0C;
pub const SELECT_TERMINAL_CERT: u8 = 0x0B;
pub const SELECT_ESAM_INFO: u8 = 0xFF;
