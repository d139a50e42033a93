// fixtures.rs — provides commonly used test payloads/frames

use libesam::protocol::Frame;
use libesam::types::StatusWord;

pub const ESAM_NUMBER: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

/// Held-out 82-byte info record with every field distinct and non-zero.
pub fn info_payload() -> Vec<u8> {
    let mut payload = Vec::with_capacity(82);
    payload.extend_from_slice(&ESAM_NUMBER); // esam number
    payload.extend_from_slice(&[0x11, 0x12, 0x13, 0x14]); // esam version
    payload.extend(0x21..=0x30u8); // symmetric key version
    payload.push(0x05); // main station certificate version
    payload.push(0x06); // terminal certificate version
    payload.extend_from_slice(&[0x00, 0x00, 0x01, 0x00]); // session time limit
    payload.extend_from_slice(&[0x00, 0x01, 0x00, 0x00]); // session time remaining
    payload.extend_from_slice(&[0x00, 0x00, 0x00, 0x2a]); // ASCTR
    payload.extend_from_slice(&[0x01, 0x02, 0x03, 0x04]); // ARCTR
    payload.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]); // AGSEQ
    payload.extend(0x41..=0x50u8); // terminal certificate number
    payload.extend(0x61..=0x70u8); // main station certificate number
    payload
}

pub fn ok_frame(payload: &[u8]) -> Vec<u8> {
    Frame::encode_response(StatusWord::SUCCESS, payload).unwrap()
}

pub fn info_frame() -> Vec<u8> {
    ok_frame(&info_payload())
}

/// A full duplex read: filler, the frame, then zero padding up to `len`.
pub fn duplex_buffer(filler: &[u8], frame: &[u8], len: usize) -> Vec<u8> {
    let mut raw = filler.to_vec();
    raw.extend_from_slice(frame);
    raw.resize(len, 0x00);
    raw
}

pub fn session_init() -> [u8; 48] {
    let mut init = [0u8; 48];
    for (i, b) in init.iter_mut().enumerate() {
        *b = i as u8 + 1;
    }
    init
}

/// Session reply payload: 48 bytes of session data then a signature.
pub fn session_reply_payload() -> Vec<u8> {
    let mut payload = vec![0xc0u8; 48];
    payload.extend_from_slice(&[0x5a, 0x5b, 0x5c, 0x5d]);
    payload
}
