// libesam-rs/libesam/src/protocol/commands/session.rs

use crate::constants::CMD_SESSION_HEADER;
use crate::types::SessionInit;
use crate::{Error, Result};

/// Encode session key negotiation command body (INS 0x02)
/// Layout: cla/ins/p1/p2(4) + length(2, BE) + session_init(48) + signature(N)
pub fn encode_session_key(session_init: &SessionInit, signature: &[u8]) -> Result<Vec<u8>> {
    let data_len = session_init.as_bytes().len() + signature.len();
    let len = u16::try_from(data_len).map_err(|_| Error::InvalidLength {
        expected: u16::MAX as usize,
        actual: data_len,
    })?;

    let mut buf = Vec::with_capacity(4 + 2 + data_len);
    buf.extend_from_slice(&CMD_SESSION_HEADER);
    buf.extend_from_slice(&len.to_be_bytes());
    buf.extend_from_slice(session_init.as_bytes());
    buf.extend_from_slice(signature);
    Ok(buf)
}
