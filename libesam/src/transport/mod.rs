// libesam-rs/libesam/src/transport/mod.rs

#[cfg(feature = "embedded-hal")]
pub mod embedded;
pub mod mock;
#[cfg(feature = "spidev")]
pub mod spi;
pub mod traits;

#[cfg(feature = "embedded-hal")]
pub use embedded::EmbeddedHalTransport;
pub use mock::MockTransport;
#[cfg(feature = "spidev")]
pub use spi::SpidevTransport;
pub use traits::Transport;
