// libesam-rs/libesam/src/protocol/codec.rs

use crate::Result;

use super::Frame;
use super::commands::Command;
use super::responses::Response;

/// Encode a Command into a duplex transmit buffer of the command's default
/// transfer length (sync + body + checksum + zero padding).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    let body = cmd.encode()?;
    Frame::encode(&body, cmd.transfer_len())
}

/// Decode a received duplex buffer and parse the contained response for
/// the command that was sent.
pub fn decode_response_frame(cmd: &Command, raw: &[u8]) -> Result<Response> {
    let payload = Frame::decode(raw)?;
    Response::decode(cmd, &payload)
}
