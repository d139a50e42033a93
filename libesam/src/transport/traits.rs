// libesam-rs/libesam/src/transport/traits.rs

use crate::{Error, Result};

/// Transport trait abstracts the SPI bus away from protocol/device logic.
///
/// The bus is full duplex: every byte clocked out clocks one byte in, so a
/// transfer always returns as many bytes as it was given.
pub trait Transport {
    /// Perform one full-duplex exchange of `tx.len()` bytes.
    fn transfer(&mut self, tx: &[u8]) -> Result<Vec<u8>>;

    /// Release the bus handle. Calling it again after a successful close
    /// is a no-op.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }

    /// Fixed-size exchange: `tx` is zero padded or truncated to exactly
    /// `length` bytes before the transfer, and exactly `length` bytes are
    /// returned.
    fn duplex_transfer(&mut self, tx: &[u8], length: usize) -> Result<Vec<u8>> {
        let mut buf = tx[..tx.len().min(length)].to_vec();
        buf.resize(length, 0x00);

        let rx = self.transfer(&buf)?;
        if rx.len() != length {
            return Err(Error::Transport(format!(
                "duplex transfer returned {} bytes, expected {}",
                rx.len(),
                length
            )));
        }
        Ok(rx)
    }
}
