#[path = "../common/mod.rs"]
mod common;

use libesam::protocol::{checksum, xor_fold};

#[test]
fn checksum_examples() {
    assert_eq!(checksum(&[]), 0xff);
    assert_eq!(checksum(&[0x01, 0x02, 0x03]), 0xff);
    assert_eq!(checksum(&[0x90, 0x00, 0x00, 0x00]), 0x6f);
}

#[test]
fn checksum_of_info_payload_closes_fold() {
    let payload = common::fixtures::info_payload();
    let mut data = payload.clone();
    data.push(checksum(&payload));
    assert_eq!(xor_fold(&data), 0xff);
}
