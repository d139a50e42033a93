// libesam-rs/libesam/src/transport/embedded.rs

#![cfg(feature = "embedded-hal")]

use embedded_hal::spi::{Error as _, SpiDevice};

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Transport over any `embedded_hal::spi::SpiDevice`. Chip select and bus
/// configuration are owned by the `SpiDevice` implementation.
#[derive(Debug)]
pub struct EmbeddedHalTransport<SPI> {
    spi: SPI,
}

impl<SPI: SpiDevice> EmbeddedHalTransport<SPI> {
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Give the underlying device back to the caller.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI: SpiDevice> Transport for EmbeddedHalTransport<SPI> {
    fn transfer(&mut self, tx: &[u8]) -> Result<Vec<u8>> {
        let mut rx = vec![0u8; tx.len()];
        self.spi
            .transfer(&mut rx, tx)
            .map_err(|e| Error::Transport(format!("spi transfer failed: {:?}", e.kind())))?;
        Ok(rx)
    }
}
