// libesam-rs/libesam/src/config.rs
//! SPI bus configuration for the ESAM link

use std::path::PathBuf;

use crate::{Error, Result};

/// Default spidev node the ESAM is wired to
pub const DEFAULT_DEVICE: &str = "/dev/spidev0.0";

/// Default SPI mode (CPOL=1, CPHA=1)
pub const DEFAULT_MODE: u8 = 3;

/// Default maximum clock speed (Hz)
pub const DEFAULT_SPEED_HZ: u32 = 25_000;

/// Word size; the ESAM protocol is byte oriented
pub const DEFAULT_BITS_PER_WORD: u8 = 8;

/// Bus parameters used to open the ESAM transport.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpiConfig {
    pub device: PathBuf,
    pub mode: u8,
    pub speed_hz: u32,
    pub bits_per_word: u8,
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            device: PathBuf::from(DEFAULT_DEVICE),
            mode: DEFAULT_MODE,
            speed_hz: DEFAULT_SPEED_HZ,
            bits_per_word: DEFAULT_BITS_PER_WORD,
        }
    }
}

impl SpiConfig {
    pub fn new(device: impl Into<PathBuf>) -> Self {
        Self {
            device: device.into(),
            ..Self::default()
        }
    }

    pub fn mode(mut self, mode: u8) -> Self {
        self.mode = mode;
        self
    }

    pub fn speed_hz(mut self, speed_hz: u32) -> Self {
        self.speed_hz = speed_hz;
        self
    }

    /// Reject parameters the bus driver cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.mode > 3 {
            return Err(Error::Config(format!(
                "spi mode must be 0..=3, got {}",
                self.mode
            )));
        }
        if self.speed_hz == 0 {
            return Err(Error::Config("spi speed must be non-zero".into()));
        }
        if self.bits_per_word != DEFAULT_BITS_PER_WORD {
            return Err(Error::Config(format!(
                "esam link is byte oriented, got {} bits per word",
                self.bits_per_word
            )));
        }
        Ok(())
    }
}
