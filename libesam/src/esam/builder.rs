// libesam-rs/libesam/src/esam/builder.rs

use crate::config::SpiConfig;
use crate::esam::handle::Esam;
use crate::transport::Transport;
use crate::Result;

/// Helper to construct an Esam with optional configuration.
#[derive(Default)]
pub struct EsamBuilder {
    transport: Option<Box<dyn Transport>>,
    config: Option<SpiConfig>,
}

impl EsamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Bus parameters used when no transport was provided.
    pub fn with_config(mut self, config: SpiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Consume the builder and return an Esam handle.
    ///
    /// An explicit transport wins. Otherwise the configured (or default)
    /// spidev node is opened when the `spidev` feature is enabled, and
    /// `DeviceNotFound` is returned when it is not.
    pub fn build(self) -> Result<Esam> {
        if let Some(t) = self.transport {
            return Ok(Esam::new_with_transport(t));
        }
        let config = self.config.unwrap_or_default();
        config.validate()?;
        Self::open(&config)
    }

    #[cfg(feature = "spidev")]
    fn open(config: &SpiConfig) -> Result<Esam> {
        Esam::open(config)
    }

    #[cfg(not(feature = "spidev"))]
    fn open(_config: &SpiConfig) -> Result<Esam> {
        Err(crate::Error::DeviceNotFound)
    }
}
