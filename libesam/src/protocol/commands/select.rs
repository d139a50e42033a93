// libesam-rs/libesam/src/protocol/commands/select.rs

use crate::constants::{
    CMD_SELECT_HEADER, SELECT_ESAM_INFO, SELECT_MASTER_STATION_CERT, SELECT_TERMINAL_CERT,
};

/// Encode a select command body (INS 0x36)
/// Layout: cla/ins/p1(3) + selector(1) + length(2) = 0
pub fn encode_select(selector: u8) -> Vec<u8> {
    let mut buf = Vec::with_capacity(3 + 1 + 2);
    buf.extend_from_slice(&CMD_SELECT_HEADER);
    buf.push(selector);
    buf.extend_from_slice(&0u16.to_be_bytes());
    buf
}

/// Main-station certificate selection body
pub fn encode_master_station_certificate() -> Vec<u8> {
    encode_select(SELECT_MASTER_STATION_CERT)
}

/// Terminal certificate selection body
pub fn encode_terminal_certificate() -> Vec<u8> {
    encode_select(SELECT_TERMINAL_CERT)
}

/// ESAM info record selection body
pub fn encode_esam_info() -> Vec<u8> {
    encode_select(SELECT_ESAM_INFO)
}
