// libesam-rs/libesam/src/transport/mock.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::transport::traits::Transport;
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockState {
    sent: Vec<Vec<u8>>,
    responses: VecDeque<Vec<u8>>,
    close_count: usize,
    transfer_failures: usize,
}

/// Mock transport for unit tests. It records sent buffers and replays
/// queued responses, zero padded or truncated to the transfer size as a
/// duplex bus would.
///
/// Clones share state, so a test can keep one handle for assertions after
/// handing another to an `Esam`.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, resp: Vec<u8>) {
        self.state.borrow_mut().responses.push_back(resp);
    }

    /// Set how many subsequent transfers should fail (for tests).
    pub fn set_transfer_failures(&self, n: usize) {
        self.state.borrow_mut().transfer_failures = n;
    }

    /// All transmit buffers seen so far, oldest first.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.state.borrow().sent.clone()
    }

    pub fn pop_sent(&self) -> Option<Vec<u8>> {
        self.state.borrow_mut().sent.pop()
    }

    pub fn pending_responses(&self) -> usize {
        self.state.borrow().responses.len()
    }

    pub fn close_count(&self) -> usize {
        self.state.borrow().close_count
    }
}

impl Transport for MockTransport {
    fn transfer(&mut self, tx: &[u8]) -> Result<Vec<u8>> {
        let mut state = self.state.borrow_mut();
        if state.close_count > 0 {
            return Err(Error::Transport("mock transport is closed".into()));
        }
        state.sent.push(tx.to_vec());

        if state.transfer_failures > 0 {
            state.transfer_failures -= 1;
            return Err(Error::Transport("simulated transfer failure".into()));
        }

        let mut rx = state
            .responses
            .pop_front()
            .ok_or_else(|| Error::Transport("no response queued".into()))?;
        rx.resize(tx.len(), 0x00);
        Ok(rx)
    }

    fn close(&mut self) -> Result<()> {
        self.state.borrow_mut().close_count += 1;
        Ok(())
    }
}
