// libesam-rs/libesam/src/error.rs

use thiserror::Error;

use crate::types::StatusWord;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("device not found: no transport configured")]
    DeviceNotFound,

    // spidev 実装を後から有効化できるように optional dependency にしている
    #[cfg(feature = "spidev")]
    #[error("spi error: {0}")]
    Spi(#[from] std::io::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid spi configuration: {0}")]
    Config(String),

    #[error("sync marker not found in {len}-byte response")]
    SyncNotFound { len: usize },

    #[error("truncated data: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("esam returned error status {status}")]
    Status { status: StatusWord },

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
