// libesam-rs/libesam/src/transport/spi.rs

#![cfg(feature = "spidev")]

use log::debug;
use spidev::{SpiModeFlags, Spidev, SpidevOptions, SpidevTransfer};

use crate::config::SpiConfig;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Linux spidev transport. It is feature-gated behind `--features spidev`
/// and talks to `/dev/spidevB.C` through the `SPI_IOC_MESSAGE` ioctl.
pub struct SpidevTransport {
    spi: Option<Spidev>,
    config: SpiConfig,
}

impl SpidevTransport {
    /// Open and configure the spidev node named in `config`.
    pub fn open(config: &SpiConfig) -> Result<Self> {
        config.validate()?;

        let mut spi = Spidev::open(&config.device)?;
        let options = SpidevOptions::new()
            .bits_per_word(config.bits_per_word)
            .max_speed_hz(config.speed_hz)
            .mode(mode_flags(config.mode)?)
            .build();
        spi.configure(&options)?;

        debug!(
            "opened {} (mode {}, {} Hz)",
            config.device.display(),
            config.mode,
            config.speed_hz
        );
        Ok(Self {
            spi: Some(spi),
            config: config.clone(),
        })
    }
}

fn mode_flags(mode: u8) -> Result<SpiModeFlags> {
    match mode {
        0 => Ok(SpiModeFlags::SPI_MODE_0),
        1 => Ok(SpiModeFlags::SPI_MODE_1),
        2 => Ok(SpiModeFlags::SPI_MODE_2),
        3 => Ok(SpiModeFlags::SPI_MODE_3),
        other => Err(Error::Config(format!("spi mode must be 0..=3, got {}", other))),
    }
}

impl Transport for SpidevTransport {
    fn transfer(&mut self, tx: &[u8]) -> Result<Vec<u8>> {
        let spi = self
            .spi
            .as_mut()
            .ok_or_else(|| Error::Transport("spi device already closed".into()))?;

        let mut rx = vec![0u8; tx.len()];
        {
            let mut transfer = SpidevTransfer::read_write(tx, &mut rx);
            spi.transfer(&mut transfer)?;
        }
        Ok(rx)
    }

    fn close(&mut self) -> Result<()> {
        // Dropping the handle closes the file descriptor
        if self.spi.take().is_some() {
            debug!("closed {}", self.config.device.display());
        }
        Ok(())
    }
}
