// libesam-rs/libesam/src/protocol/responses/session.rs

use crate::constants::SESSION_INIT_LEN;
use crate::esam::SessionKey;
use crate::protocol::parser;
use crate::utils::bytes_to_hex;
use crate::Result;

/// Decode session key negotiation response payload
/// Layout: session_data(48) + signature(len - 48)
pub fn decode_session_key(data: &[u8]) -> Result<SessionKey> {
    parser::ensure_len(data, SESSION_INIT_LEN)?;
    let (session_data, signature) = data.split_at(SESSION_INIT_LEN);
    Ok(SessionKey {
        session_data: bytes_to_hex(session_data),
        signature: bytes_to_hex(signature),
    })
}
