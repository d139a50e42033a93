#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{session_init, session_reply_payload};
use libesam::Error;

#[test]
fn session_key_round_trip_over_mock() {
    let raw = common::response_with_filler(&[0x00, 0x00], &session_reply_payload()).unwrap();
    let (mut esam, mock) = common::mock_esam(vec![raw]);

    let init = session_init();
    let signature = [0x7e; 16];
    let key = esam.session_key_connect(&init, &signature).unwrap();
    assert_eq!(key.session_data(), "c0".repeat(48));
    assert_eq!(key.signature(), "5a5b5c5d");

    let sent = mock.sent();
    assert_eq!(sent[0].len(), 1024);
    assert_eq!(&sent[0][..7], &[0x55, 0x80, 0x02, 0x00, 0x00, 0x00, 0x40]);
    assert_eq!(&sent[0][7..55], &init[..]);
    assert_eq!(&sent[0][55..71], &signature[..]);
}

#[test]
fn reply_without_signature_is_valid() {
    let raw = common::response_with_filler(&[], &[0x33; 48]).unwrap();
    let (mut esam, _mock) = common::mock_esam(vec![raw]);
    let (data, sig) = esam
        .session_key_connect(&session_init(), &[])
        .unwrap()
        .into_parts();
    assert_eq!(data.len(), 96);
    assert!(sig.is_empty());
}

#[test]
fn short_reply_is_truncated() {
    let raw = common::response_with_filler(&[], &[0x33; 20]).unwrap();
    let (mut esam, _mock) = common::mock_esam(vec![raw]);
    assert!(matches!(
        esam.session_key_connect(&session_init(), &[0x01]),
        Err(Error::Truncated {
            expected: 48,
            actual: 20
        })
    ));
}

#[test]
fn oversized_command_is_rejected_before_transfer() {
    let (mut esam, mock) = common::mock_esam(vec![]);
    // 1 + 6 + 48 + 1000 + 1 bytes does not fit in a 1024 byte transfer
    let signature = vec![0x01; 1000];
    assert!(matches!(
        esam.session_key_connect(&session_init(), &signature),
        Err(Error::InvalidLength { .. })
    ));
    assert!(mock.sent().is_empty());
}
