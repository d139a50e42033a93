// libesam-rs/libesam/src/protocol/responses/certificate.rs

/// Decode a certificate response payload. Certificates are opaque to this
/// crate and are passed through as lowercase hex.
pub fn decode_certificate(data: &[u8]) -> String {
    crate::utils::bytes_to_hex(data)
}
