//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::esam::Esam;
use crate::protocol::Frame;
use crate::transport::mock::MockTransport;
use crate::types::StatusWord;
use crate::Result;

/// Build a successful response frame preceded by `filler` leading bytes,
/// the way a duplex read returns it before padding.
#[doc(hidden)]
pub fn response_with_filler(filler: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    let mut raw = filler.to_vec();
    raw.extend_from_slice(&Frame::encode_response(StatusWord::SUCCESS, payload)?);
    Ok(raw)
}

/// Build a MockTransport pre-seeded with the given raw responses.
#[doc(hidden)]
pub fn mock_with_responses(responses: Vec<Vec<u8>>) -> MockTransport {
    let mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    mock
}

/// Convenience: create an Esam backed by a MockTransport pre-seeded with
/// the provided responses. The returned mock shares state with the one
/// inside the handle so tests can inspect what was sent.
#[doc(hidden)]
pub fn mock_esam(responses: Vec<Vec<u8>>) -> (Esam, MockTransport) {
    let mock = mock_with_responses(responses);
    let esam = Esam::new_with_transport(Box::new(mock.clone()));
    (esam, mock)
}
