#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{duplex_buffer, ok_frame};
use libesam::Error;
use libesam::types::StatusWord;
use libesam::protocol::Frame;
use proptest::prelude::*;

// Payload chosen so that neither the frame nor any single-bit tampering of
// it contains a stray 0x55: 55 90 00 00 04 10 20 30 40 2b
const PAYLOAD: [u8; 4] = [0x10, 0x20, 0x30, 0x40];

#[test]
fn info_frame_payload_matches_fixture() {
    let raw = duplex_buffer(&[0xff; 5], &common::fixtures::info_frame(), 1024);
    let payload = Frame::decode(&raw).expect("frame decode");
    assert_eq!(payload, common::fixtures::info_payload());
}

#[test]
fn response_frame_bytes() {
    let frame = ok_frame(&PAYLOAD);
    assert_eq!(
        frame,
        vec![0x55, 0x90, 0x00, 0x00, 0x04, 0x10, 0x20, 0x30, 0x40, 0x2b]
    );
}

#[test]
fn embedded_sync_bytes_before_frame_are_skipped() {
    // The first two 0x55 bytes announce lengths that run past the buffer
    // and are discarded as truncated candidates.
    let raw = duplex_buffer(&[0x00, 0x55, 0x12, 0x55, 0x00], &ok_frame(&PAYLOAD), 15);
    assert_eq!(Frame::decode(&raw).unwrap(), PAYLOAD.to_vec());
}

#[test]
fn first_candidate_error_wins_when_nothing_validates() {
    // Candidates at 0 (len 0x5555 past the 13 bytes left), 3 (bad checksum)
    // and 4 (the real frame with its checksum corrupted) all fail; the first
    // one is reported.
    let mut frame = ok_frame(&PAYLOAD);
    let cs = frame.len() - 1;
    frame[cs] = 0x2c;
    let mut raw = vec![0x55, 0x90, 0x00, 0x55];
    raw.extend_from_slice(&frame);

    match Frame::decode(&raw) {
        Err(Error::Truncated {
            expected: 21_849,
            actual: 13,
        }) => {}
        other => panic!("expected Truncated from the first candidate, got {:?}", other),
    }
}

#[test]
fn checksum_valid_stray_frame_stops_the_scan() {
    // 55 00 00 00 00 ff is a complete frame with status 0000, so the good
    // frame behind it is never reached.
    let mut raw = vec![0x55, 0x00, 0x00, 0x00, 0x00, 0xff];
    raw.extend_from_slice(&ok_frame(&PAYLOAD));

    match Frame::decode(&raw) {
        Err(Error::Status { status }) => assert_eq!(status, StatusWord::new(0x0000)),
        other => panic!("expected Status, got {:?}", other),
    }
}

#[test]
fn tampering_any_status_length_or_payload_byte_is_checksum_mismatch() {
    let frame = ok_frame(&PAYLOAD);
    // Bytes 1..=8 cover status(2), length(2) and payload(4)
    for idx in 1..frame.len() - 1 {
        let mut raw = duplex_buffer(&[0x00, 0x00], &frame, 1024);
        raw[2 + idx] ^= 0x01;
        match Frame::decode(&raw) {
            Err(Error::ChecksumMismatch { .. }) => {}
            other => panic!("byte {}: expected ChecksumMismatch, got {:?}", idx, other),
        }
    }
}

#[test]
fn over_declared_length_is_truncated() {
    let mut frame = ok_frame(&PAYLOAD);
    frame[4] = 0x40; // declare 64 payload bytes, only 4 + checksum present
    match Frame::decode(&frame) {
        Err(Error::Truncated { .. }) => {}
        other => panic!("expected Truncated, got {:?}", other),
    }
}

#[test]
fn all_filler_is_sync_not_found() {
    match Frame::decode(&[0x00; 1024]) {
        Err(Error::SyncNotFound { len: 1024 }) => {}
        other => panic!("expected SyncNotFound, got {:?}", other),
    }
}

proptest! {
    #[test]
    fn filler_prefix_does_not_change_payload(
        filler in prop::collection::vec(any::<u8>().prop_filter("not sync", |b| *b != 0x55), 0..64),
        payload in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        let frame = ok_frame(&payload);
        let raw = duplex_buffer(&filler, &frame, filler.len() + frame.len() + 16);
        prop_assert_eq!(Frame::decode(&raw).unwrap(), payload);
    }
}
