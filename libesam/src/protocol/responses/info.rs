// libesam-rs/libesam/src/protocol/responses/info.rs

use crate::constants::ESAM_INFO_LEN;
use crate::esam::EsamInfo;
use crate::protocol::parser::{self, Reader};
use crate::Result;

/// Decode the ESAM info record payload
/// Layout: esam_number(8) + esam_version(4) + symmetric_key_version(16)
///       + main_station_cert_version(1) + terminal_cert_version(1)
///       + session_time_limit(4) + session_time_remaining(4)
///       + asctr(4) + arctr(4) + agseq(4)
///       + terminal_cert_number(16) + main_station_cert_number(16) = 82
pub fn decode_esam_info(data: &[u8]) -> Result<EsamInfo> {
    parser::ensure_len(data, ESAM_INFO_LEN)?;

    let mut r = Reader::new(data);
    Ok(EsamInfo {
        esam_number: r.hex(8)?,
        esam_version: r.hex(4)?,
        symmetric_key_version: r.hex(16)?,
        main_station_certificate_version: r.u8()?,
        terminal_certificate_version: r.u8()?,
        session_time_limit: r.be_u32()?,
        session_time_remaining: r.be_u32()?,
        asctr: r.be_u32()?,
        arctr: r.be_u32()?,
        agseq: r.be_u32()?,
        terminal_certificate_number: r.hex(16)?,
        main_station_certificate_number: r.hex(16)?,
    })
}
