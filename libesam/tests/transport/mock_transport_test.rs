use libesam::transport::{MockTransport, Transport};

#[test]
fn mock_records_padded_duplex_transfer() {
    let mut mock = MockTransport::new();
    mock.push_response(vec![0xff, 0x55]);

    let rx = mock.duplex_transfer(&[0x55, 0x80, 0x36], 16).unwrap();
    assert_eq!(rx.len(), 16);
    assert_eq!(&rx[..2], &[0xff, 0x55]);
    assert!(rx[2..].iter().all(|b| *b == 0));

    let sent = mock.pop_sent().unwrap();
    assert_eq!(sent.len(), 16);
    assert_eq!(&sent[..3], &[0x55, 0x80, 0x36]);
}

#[test]
fn transfer_failures_are_consumed_in_order() {
    let mut mock = MockTransport::new();
    mock.set_transfer_failures(2);
    mock.push_response(vec![0x01]);

    assert!(mock.transfer(&[0x00]).is_err());
    assert!(mock.transfer(&[0x00]).is_err());
    assert_eq!(mock.transfer(&[0x00]).unwrap(), vec![0x01]);
    assert_eq!(mock.sent().len(), 3);
}
