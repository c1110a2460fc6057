// libtransit/src/transport/mock.rs

//! Scripted transceiver for tests and demos.

use std::collections::VecDeque;

use crate::transport::traits::{Target, TargetHandle, Transceiver};
use crate::types::{Uid, UidKind};
use crate::{Error, Result};

/// Mock transceiver for tests. It records every command sent and answers
/// from a queue of scripted responses; a queued failure (or an empty
/// queue) makes the exchange fail.
#[derive(Debug, Default)]
pub struct MockTransceiver {
    /// Cards reported by `list_targets`
    pub targets: Vec<Target>,
    /// Every exchange, in order
    pub sent: Vec<(TargetHandle, Vec<u8>)>,
    /// Scripted answers; `None` fails that exchange
    pub responses: VecDeque<Option<Vec<u8>>>,
    /// Testing hook: number of list_targets calls that should fail
    pub list_failures: usize,
}

impl MockTransceiver {
    /// An empty field and an empty response queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a card in the field. Handles are assigned from 1 in order.
    pub fn add_target(&mut self, uid_kind: UidKind, uid: &[u8]) -> Result<TargetHandle> {
        let handle = TargetHandle(self.targets.len() as u8 + 1);
        self.targets
            .push(Target::new(handle, uid_kind, Uid::try_from(uid)?));
        Ok(handle)
    }

    /// Take every card out of the field
    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    /// Queue a successful exchange
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(Some(resp));
    }

    /// Queue a failed exchange
    pub fn push_failure(&mut self) {
        self.responses.push_back(None);
    }

    /// Fail the next `n` calls to `list_targets`
    pub fn set_list_failures(&mut self, n: usize) {
        self.list_failures = n;
    }

    /// Command bytes sent so far, in order
    pub fn commands(&self) -> Vec<&[u8]> {
        self.sent.iter().map(|(_, c)| c.as_slice()).collect()
    }
}

impl Transceiver for MockTransceiver {
    fn list_targets(&mut self) -> Result<Vec<Target>> {
        if self.list_failures > 0 {
            self.list_failures -= 1;
            return Err(Error::Exchange("simulated list failure".into()));
        }
        Ok(self.targets.clone())
    }

    fn exchange(&mut self, target: TargetHandle, command: &[u8]) -> Result<Vec<u8>> {
        self.sent.push((target, command.to_vec()));
        match self.responses.pop_front() {
            Some(Some(resp)) => Ok(resp),
            Some(None) => Err(Error::Exchange("simulated exchange failure".into())),
            None => Err(Error::Exchange("no response queued".into())),
        }
    }
}
