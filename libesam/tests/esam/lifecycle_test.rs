#[path = "../common/mod.rs"]
mod common;

use libesam::esam::EsamBuilder;
use libesam::transport::MockTransport;

#[test]
fn explicit_close_closes_transport_once() {
    let (esam, mock) = common::mock_esam(vec![]);
    esam.close().unwrap();
    assert_eq!(mock.close_count(), 1);
}

#[test]
fn dropping_handle_closes_transport() {
    let (esam, mock) = common::mock_esam(vec![]);
    drop(esam);
    assert_eq!(mock.close_count(), 1);
}

#[test]
fn failed_query_still_closes_on_drop() {
    let (mut esam, mock) = common::mock_esam(vec![]);
    assert!(esam.esam_info().is_err());
    drop(esam);
    assert_eq!(mock.close_count(), 1);
}

#[test]
fn builder_uses_supplied_transport() {
    let mock = MockTransport::new();
    mock.push_response(common::response_with_filler(&[], &[0xaa]).unwrap());
    let mut esam = EsamBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .build()
        .unwrap();
    assert_eq!(esam.terminal_certificate().unwrap(), "aa");
    esam.close().unwrap();
    assert_eq!(mock.close_count(), 1);
}
