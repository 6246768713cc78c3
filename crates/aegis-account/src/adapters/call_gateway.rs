//! # In-Memory Call Gateway
//!
//! A transactional `CallGateway` backed by a `HashMap`. Contracts are
//! registered as handlers over a staged storage view; writes land in a
//! staging area that `commit` folds into committed storage and `rollback`
//! discards, which gives batches their all-or-nothing semantics.
//!
//! Ships a small counter contract (`set_number` / `increase_number` /
//! `get_number`) used throughout the test suite as the external dapp.

use crate::domain::value_objects::{Address, Call, CallOutput};
use crate::errors::GatewayError;
use crate::ports::outbound::CallGateway;
use std::collections::HashMap;

/// Storage key: (contract, slot).
pub type SlotKey = (Address, u64);

/// Staged-over-committed view handed to contract handlers.
pub struct StorageView<'a> {
    committed: &'a HashMap<SlotKey, u64>,
    staged: &'a mut HashMap<SlotKey, u64>,
}

impl StorageView<'_> {
    /// Reads a slot, preferring staged writes. Unset slots read as 0.
    #[must_use]
    pub fn read(&self, contract: Address, slot: u64) -> u64 {
        let key = (contract, slot);
        self.staged
            .get(&key)
            .or_else(|| self.committed.get(&key))
            .copied()
            .unwrap_or(0)
    }

    /// Stages a write to a slot.
    pub fn write(&mut self, contract: Address, slot: u64, value: u64) {
        self.staged.insert((contract, slot), value);
    }
}

/// A registered contract entry point set.
pub type ContractHandler =
    Box<dyn FnMut(&mut StorageView<'_>, &Call) -> Result<CallOutput, GatewayError>>;

/// In-memory transactional call gateway.
#[derive(Default)]
pub struct InMemoryCallGateway {
    contracts: HashMap<Address, ContractHandler>,
    committed: HashMap<SlotKey, u64>,
    staged: HashMap<SlotKey, u64>,
}

impl InMemoryCallGateway {
    /// Creates an empty gateway with no contracts deployed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a contract handler at `address`.
    pub fn register(&mut self, address: Address, handler: ContractHandler) {
        self.contracts.insert(address, handler);
    }

    /// Deploys the test counter contract at `address`.
    ///
    /// Entry points: `set_number(n)`, `increase_number(n)` and
    /// `get_number()` over the contract's slot 0.
    pub fn register_counter_dapp(&mut self, address: Address) {
        self.register(
            address,
            Box::new(|storage, call| {
                let target = call.target;
                match call.selector.name() {
                    "set_number" => {
                        let n = *call
                            .calldata
                            .first()
                            .ok_or_else(|| GatewayError::Reverted("missing argument".into()))?;
                        storage.write(target, 0, n);
                        Ok(CallOutput::empty())
                    }
                    "increase_number" => {
                        let n = *call
                            .calldata
                            .first()
                            .ok_or_else(|| GatewayError::Reverted("missing argument".into()))?;
                        let current = storage.read(target, 0);
                        storage.write(target, 0, current + n);
                        Ok(CallOutput { data: vec![current + n] })
                    }
                    "get_number" => Ok(CallOutput {
                        data: vec![storage.read(target, 0)],
                    }),
                    _ => Err(GatewayError::UnknownSelector(call.selector.clone())),
                }
            }),
        );
    }

    /// Reads committed (post-commit) storage; staged writes are invisible.
    #[must_use]
    pub fn committed_slot(&self, contract: Address, slot: u64) -> u64 {
        self.committed.get(&(contract, slot)).copied().unwrap_or(0)
    }
}

impl CallGateway for InMemoryCallGateway {
    fn execute_call(&mut self, call: &Call) -> Result<CallOutput, GatewayError> {
        let handler = self
            .contracts
            .get_mut(&call.target)
            .ok_or(GatewayError::UnknownTarget(call.target))?;

        let mut view = StorageView {
            committed: &self.committed,
            staged: &mut self.staged,
        };
        handler(&mut view, call)
    }

    fn commit(&mut self) {
        self.committed.extend(self.staged.drain());
    }

    fn rollback(&mut self) {
        self.staged.clear();
    }
}
