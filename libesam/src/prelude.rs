// libesam-rs/libesam/src/prelude.rs

pub use crate::config::SpiConfig;
pub use crate::esam::{Esam, EsamBuilder, EsamInfo, SessionKey};
pub use crate::protocol::{Command, Frame, Response};
pub use crate::transport::Transport;
pub use crate::{Error, Result, SessionInit, StatusWord};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
