// libesam-rs/libesam/src/protocol/frame.rs

use log::debug;

use crate::constants::{RESPONSE_HEADER_LEN, SYNC_MARKER};
use crate::protocol::checksum::checksum;
use crate::protocol::parser;
use crate::types::StatusWord;
use crate::{Error, Result};

/// ESAM frame helper. Provides encode/decode of the wire frame
/// Command:  [Sync(1)] [Body(n)] [CS(1)] [Zero padding]
/// Response: [Filler(*)] [Sync(1)] [Status(2)] [Len(2)] [Payload(len)] [CS(1)]
/// Sync: 0x55
pub struct Frame;

impl Frame {
    /// Encode a command body into a duplex buffer of exactly `total_len`
    /// bytes. The checksum covers the body only.
    pub fn encode(body: &[u8], total_len: usize) -> Result<Vec<u8>> {
        let frame_len = 1 + body.len() + 1;
        if frame_len > total_len {
            return Err(Error::InvalidLength {
                expected: total_len,
                actual: frame_len,
            });
        }

        let mut out = Vec::with_capacity(total_len);
        out.push(SYNC_MARKER);
        out.extend_from_slice(body);
        out.push(checksum(body));
        // Remainder of the transmit buffer is clocked out as zeros
        out.resize(total_len, 0x00);
        Ok(out)
    }

    /// Encode a device-side response frame (no filler, no padding).
    pub fn encode_response(status: StatusWord, payload: &[u8]) -> Result<Vec<u8>> {
        let len = u16::try_from(payload.len()).map_err(|_| Error::InvalidLength {
            expected: u16::MAX as usize,
            actual: payload.len(),
        })?;

        let mut out = Vec::with_capacity(1 + RESPONSE_HEADER_LEN + payload.len() + 1);
        out.push(SYNC_MARKER);
        out.extend_from_slice(&status.to_be_bytes());
        out.extend_from_slice(&len.to_be_bytes());
        out.extend_from_slice(payload);
        out.push(checksum(&out[1..]));
        Ok(out)
    }

    /// Decode a received duplex buffer and return the validated payload.
    ///
    /// Every sync marker is a candidate start. Candidates that are truncated
    /// or fail the checksum are skipped and scanning resumes on the next
    /// byte. A checksum-valid frame with a non-success status is returned as
    /// `Error::Status`. When no candidate validates, the first candidate's
    /// error is reported.
    ///
    /// The checksum is verified before the status word is looked at. A
    /// device that answers with a bare status and no length or checksum
    /// (`55 69 85` then padding) is therefore reported as
    /// `Error::ChecksumMismatch`, not `Error::Status`.
    pub fn decode(raw: &[u8]) -> Result<Vec<u8>> {
        let mut first_err: Option<Error> = None;
        let mut from = 0usize;

        while let Some(offset) = raw[from..].iter().position(|&b| b == SYNC_MARKER) {
            let start = from + offset;
            match Self::decode_at(&raw[start + 1..]) {
                Ok(payload) => return Ok(payload),
                Err(err @ Error::Status { .. }) => return Err(err),
                Err(err) => {
                    debug!("discarding sync candidate at offset {}: {}", start, err);
                    first_err.get_or_insert(err);
                }
            }
            from = start + 1;
        }

        Err(first_err.unwrap_or(Error::SyncNotFound { len: raw.len() }))
    }

    /// Parse one frame whose sync marker has already been consumed.
    fn decode_at(frame: &[u8]) -> Result<Vec<u8>> {
        let status = StatusWord::new(parser::be_u16_at(frame, 0)?);
        let len = parser::be_u16_at(frame, 2)? as usize;
        let payload = parser::slice_at(frame, RESPONSE_HEADER_LEN, len)?;
        let cs_actual = parser::byte_at(frame, RESPONSE_HEADER_LEN + len)?;

        let cs_expected = checksum(&frame[..RESPONSE_HEADER_LEN + len]);
        if cs_actual != cs_expected {
            return Err(Error::ChecksumMismatch {
                expected: cs_expected,
                actual: cs_actual,
            });
        }

        // Status is only trusted once the frame is known to be intact
        if !status.is_success() {
            return Err(Error::Status { status });
        }

        Ok(payload.to_vec())
    }
}
