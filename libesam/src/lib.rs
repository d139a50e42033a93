// libesam-rs/libesam/src/lib.rs

//! libesam
//!
//! Pure Rust codec for ESAM secure elements attached over SPI.
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod error;
pub mod esam;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
