//! Utilities for libesam: small, reusable helpers used across the crate.
//!
//! Hex rendering is used both for decoded opaque fields and for debug
//! dumps of duplex buffers.

pub mod hex;

// Re-export the most common helpers at the `utils` module level so callers can
// use `crate::utils::bytes_to_hex(...)` etc if they prefer.
pub use self::hex::*;
