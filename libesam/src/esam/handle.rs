// libesam-rs/libesam/src/esam/handle.rs

use log::{debug, trace, warn};

use crate::esam::{EsamInfo, SessionKey};
use crate::protocol::{Command, Frame, Response, responses};
use crate::transport::Transport;
use crate::utils::bytes_to_hex_spaced;
use crate::Result;

/// ESAM handle. Owns the bus transport exclusively; the transport is
/// closed exactly once, either by `close` or when the handle is dropped.
pub struct Esam {
    transport: Box<dyn Transport>,
    closed: bool,
}

impl Esam {
    /// Create an Esam from an existing Transport instance (e.g. a
    /// MockTransport in tests).
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            closed: false,
        }
    }

    /// Open the spidev node described by `config`.
    #[cfg(feature = "spidev")]
    pub fn open(config: &crate::config::SpiConfig) -> Result<Self> {
        let transport = crate::transport::SpidevTransport::open(config)?;
        Ok(Self::new_with_transport(Box::new(transport)))
    }

    /// Send a raw command body in a duplex exchange of `transfer_len`
    /// bytes and return the validated response payload.
    pub fn transact(&mut self, body: &[u8], transfer_len: usize) -> Result<Vec<u8>> {
        // Build (and reject oversize commands) before touching the bus
        let tx = Frame::encode(body, transfer_len)?;
        trace!("tx {}", bytes_to_hex_spaced(&tx[..body.len() + 2]));

        let rx = self.transport.duplex_transfer(&tx, transfer_len)?;
        trace!("rx {}", bytes_to_hex_spaced(&rx));

        Frame::decode(&rx)
    }

    /// Execute a command and return its validated payload.
    pub fn execute(&mut self, cmd: &Command) -> Result<Vec<u8>> {
        let body = cmd.encode()?;
        debug!(
            "{} (INS {:02X}, {} byte transfer)",
            cmd,
            cmd.instruction(),
            cmd.transfer_len()
        );
        self.transact(&body, cmd.transfer_len())
    }

    /// Execute a command and return the parsed Response.
    pub fn query(&mut self, cmd: &Command) -> Result<Response> {
        let payload = self.execute(cmd)?;
        Response::decode(cmd, &payload)
    }

    /// Fetch the main-station certificate as hex.
    pub fn master_station_certificate(&mut self) -> Result<String> {
        let payload = self.execute(&Command::MasterStationCertificate)?;
        Ok(responses::decode_certificate(&payload))
    }

    /// Fetch the terminal certificate as hex.
    pub fn terminal_certificate(&mut self) -> Result<String> {
        let payload = self.execute(&Command::TerminalCertificate)?;
        Ok(responses::decode_certificate(&payload))
    }

    /// Fetch and decode the ESAM info record.
    pub fn esam_info(&mut self) -> Result<EsamInfo> {
        let payload = self.execute(&Command::EsamInfo)?;
        responses::decode_esam_info(&payload)
    }

    /// Session key negotiation. `session_init` must be exactly 48 bytes;
    /// the length is checked before anything is sent.
    pub fn session_key_connect(
        &mut self,
        session_init: &[u8],
        signature: &[u8],
    ) -> Result<SessionKey> {
        let cmd = Command::session_key_connect(session_init, signature)?;
        let payload = self.execute(&cmd)?;
        responses::decode_session_key(&payload)
    }

    /// Close the underlying transport and report any failure.
    pub fn close(mut self) -> Result<()> {
        self.close_transport()
    }

    fn close_transport(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        // Marked first so a failing close is never retried from Drop
        self.closed = true;
        self.transport.close()
    }
}

impl Drop for Esam {
    fn drop(&mut self) {
        if let Err(e) = self.close_transport() {
            warn!("failed to close esam transport: {}", e);
        }
    }
}
