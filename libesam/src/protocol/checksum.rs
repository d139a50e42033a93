// libesam-rs/libesam/src/protocol/checksum.rs

/// XOR of all bytes, seeded with 0
pub fn xor_fold(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// Compute the frame checksum (CS)
/// CS = !(b0 ^ b1 ^ ... ^ bn)
///
/// Outbound frames checksum the command body only; inbound frames
/// checksum status ∥ length ∥ payload.
pub fn checksum(data: &[u8]) -> u8 {
    !xor_fold(data)
}
