//! # Account Service
//!
//! Application service implementing the inbound `AccountApi`. Every
//! mutating entry point runs the same pipeline:
//!
//! 1. compute the operation's request hash
//! 2. `NonceGuard::check` (nonce rejection wins over signature rejection)
//! 3. `AuthorizationEngine::authorize`
//! 4. operation-specific preconditions and domain transition
//! 5. `NonceGuard::advance`, commit external effects, emit the event
//!
//! Steps 1-4 mutate nothing until all checks of the operation have passed,
//! so any rejection is a total rollback by construction.

use crate::dispatcher::CallDispatcher;
use crate::domain::authorization::{AuthorizationEngine, Operation};
use crate::domain::entities::{AccountState, Escape, SignatureSet};
use crate::domain::escape::EscapeStateMachine;
use crate::domain::invariants;
use crate::domain::nonce::NonceGuard;
use crate::domain::services as hashes;
use crate::domain::value_objects::{Address, Call, Hash, Timestamp};
use crate::errors::AccountError;
use crate::events::{AccountEvent, ExecutionReceipt};
use crate::ports::inbound::AccountApi;
use crate::ports::outbound::{CallGateway, SignatureVerifier};
use aegis_crypto::Ed25519PublicKey;
use tracing::{info, warn};

/// The account: owns its state and its outbound collaborators.
pub struct AccountService<V: SignatureVerifier, G: CallGateway> {
    address: Address,
    state: AccountState,
    verifier: V,
    gateway: G,
}

impl<V: SignatureVerifier, G: CallGateway> AccountService<V, G> {
    /// Creates an uninitialized account at `address`.
    pub fn new(address: Address, verifier: V, gateway: G) -> Self {
        Self {
            address,
            state: AccountState::uninitialized(),
            verifier,
            gateway,
        }
    }

    /// The account's own address.
    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    /// Read access to the durable state.
    #[must_use]
    pub fn state(&self) -> &AccountState {
        &self.state
    }

    /// Read access to the call gateway (post-commit assertions in tests).
    #[must_use]
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    fn finish(&mut self, event: AccountEvent) -> AccountEvent {
        NonceGuard::advance(&mut self.state);
        debug_assert!(invariants::check_all(&self.state));
        info!(account = %self.address, event = ?event, "state transition applied");
        event
    }

    fn try_execute(
        &mut self,
        nonce: u64,
        calls: Vec<Call>,
        signatures: SignatureSet,
    ) -> Result<ExecutionReceipt, AccountError> {
        let tx_hash = hashes::execute_hash(&self.address, nonce, &calls);
        NonceGuard::check(nonce, &self.state)?;
        AuthorizationEngine::authorize(
            &self.verifier,
            Operation::ExecuteBatch,
            &tx_hash,
            &signatures,
            &self.state,
        )?;

        let outputs = CallDispatcher::execute(&mut self.gateway, &self.address, &calls)?;

        let event = self.finish(AccountEvent::TransactionExecuted {
            account: self.address,
        });
        self.gateway.commit();

        Ok(ExecutionReceipt {
            tx_hash,
            outputs,
            event,
        })
    }

    fn try_change_signer(
        &mut self,
        nonce: u64,
        new_signer: Ed25519PublicKey,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError> {
        let hash = hashes::change_signer_hash(&self.address, nonce, &new_signer);
        NonceGuard::check(nonce, &self.state)?;
        AuthorizationEngine::authorize(
            &self.verifier,
            Operation::ChangeSigner,
            &hash,
            &signatures,
            &self.state,
        )?;

        self.state.signer_key = Some(new_signer);
        Ok(self.finish(AccountEvent::SignerChanged { new_signer }))
    }

    fn try_change_guardian(
        &mut self,
        nonce: u64,
        new_guardian: Option<Ed25519PublicKey>,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError> {
        let hash = hashes::change_guardian_hash(&self.address, nonce, new_guardian.as_ref());
        NonceGuard::check(nonce, &self.state)?;
        AuthorizationEngine::authorize(
            &self.verifier,
            Operation::ChangeGuardian,
            &hash,
            &signatures,
            &self.state,
        )?;
        // Clearing the guardian would orphan the backup.
        if new_guardian.is_none() && self.state.guardian_backup_key.is_some() {
            return Err(AccountError::BackupWithoutGuardian);
        }

        self.state.guardian_key = new_guardian;
        Ok(self.finish(AccountEvent::GuardianChanged { new_guardian }))
    }

    fn try_change_guardian_backup(
        &mut self,
        nonce: u64,
        new_backup: Option<Ed25519PublicKey>,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError> {
        let hash = hashes::change_guardian_backup_hash(&self.address, nonce, new_backup.as_ref());
        NonceGuard::check(nonce, &self.state)?;
        AuthorizationEngine::authorize(
            &self.verifier,
            Operation::ChangeGuardianBackup,
            &hash,
            &signatures,
            &self.state,
        )?;

        self.state.guardian_backup_key = new_backup;
        Ok(self.finish(AccountEvent::GuardianBackupChanged { new_backup }))
    }

    fn try_trigger_escape_guardian(
        &mut self,
        nonce: u64,
        now: Timestamp,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError> {
        let hash = hashes::trigger_escape_guardian_hash(&self.address, nonce);
        NonceGuard::check(nonce, &self.state)?;
        AuthorizationEngine::authorize(
            &self.verifier,
            Operation::TriggerGuardianEscape,
            &hash,
            &signatures,
            &self.state,
        )?;

        let ready_at = EscapeStateMachine::trigger_guardian_escape(&mut self.state, now);
        Ok(self.finish(AccountEvent::EscapeGuardianTriggered { ready_at }))
    }

    fn try_trigger_escape_signer(
        &mut self,
        nonce: u64,
        now: Timestamp,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError> {
        let hash = hashes::trigger_escape_signer_hash(&self.address, nonce);
        NonceGuard::check(nonce, &self.state)?;
        AuthorizationEngine::authorize(
            &self.verifier,
            Operation::TriggerSignerEscape,
            &hash,
            &signatures,
            &self.state,
        )?;

        let ready_at = EscapeStateMachine::trigger_signer_escape(&mut self.state, now)?;
        Ok(self.finish(AccountEvent::EscapeSignerTriggered { ready_at }))
    }

    fn try_escape_guardian(
        &mut self,
        nonce: u64,
        now: Timestamp,
        new_guardian: Ed25519PublicKey,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError> {
        let hash = hashes::escape_guardian_hash(&self.address, nonce, &new_guardian);
        NonceGuard::check(nonce, &self.state)?;
        AuthorizationEngine::authorize(
            &self.verifier,
            Operation::CompleteGuardianEscape,
            &hash,
            &signatures,
            &self.state,
        )?;

        EscapeStateMachine::complete_guardian_escape(&mut self.state, now, new_guardian)?;
        Ok(self.finish(AccountEvent::GuardianEscaped { new_guardian }))
    }

    fn try_escape_signer(
        &mut self,
        nonce: u64,
        now: Timestamp,
        new_signer: Ed25519PublicKey,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError> {
        let hash = hashes::escape_signer_hash(&self.address, nonce, &new_signer);
        NonceGuard::check(nonce, &self.state)?;
        AuthorizationEngine::authorize(
            &self.verifier,
            Operation::CompleteSignerEscape,
            &hash,
            &signatures,
            &self.state,
        )?;

        EscapeStateMachine::complete_signer_escape(&mut self.state, now, new_signer)?;
        Ok(self.finish(AccountEvent::SignerEscaped { new_signer }))
    }

    fn try_cancel_escape(
        &mut self,
        nonce: u64,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError> {
        let hash = hashes::cancel_escape_hash(&self.address, nonce);
        NonceGuard::check(nonce, &self.state)?;
        AuthorizationEngine::authorize(
            &self.verifier,
            Operation::CancelEscape,
            &hash,
            &signatures,
            &self.state,
        )?;

        EscapeStateMachine::cancel_escape(&mut self.state)?;
        Ok(self.finish(AccountEvent::EscapeCanceled))
    }
}

fn reject(operation: &'static str, err: AccountError) -> AccountError {
    warn!(operation, error = %err, "request rejected");
    err
}

impl<V: SignatureVerifier, G: CallGateway> AccountApi for AccountService<V, G> {
    fn initialize(
        &mut self,
        signer: Ed25519PublicKey,
        guardian: Option<Ed25519PublicKey>,
    ) -> Result<(), AccountError> {
        if self.state.is_initialized() {
            return Err(reject("initialize", AccountError::AlreadyInitialized));
        }
        self.state.signer_key = Some(signer);
        self.state.guardian_key = guardian;
        debug_assert!(invariants::check_all(&self.state));
        info!(account = %self.address, guardian = guardian.is_some(), "account initialized");
        Ok(())
    }

    fn execute(
        &mut self,
        nonce: u64,
        calls: Vec<Call>,
        signatures: SignatureSet,
    ) -> Result<ExecutionReceipt, AccountError> {
        self.try_execute(nonce, calls, signatures)
            .map_err(|err| reject("execute", err))
    }

    fn change_signer(
        &mut self,
        nonce: u64,
        new_signer: Ed25519PublicKey,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError> {
        self.try_change_signer(nonce, new_signer, signatures)
            .map_err(|err| reject("change_signer", err))
    }

    fn change_guardian(
        &mut self,
        nonce: u64,
        new_guardian: Option<Ed25519PublicKey>,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError> {
        self.try_change_guardian(nonce, new_guardian, signatures)
            .map_err(|err| reject("change_guardian", err))
    }

    fn change_guardian_backup(
        &mut self,
        nonce: u64,
        new_backup: Option<Ed25519PublicKey>,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError> {
        self.try_change_guardian_backup(nonce, new_backup, signatures)
            .map_err(|err| reject("change_guardian_backup", err))
    }

    fn trigger_escape_guardian(
        &mut self,
        nonce: u64,
        now: Timestamp,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError> {
        self.try_trigger_escape_guardian(nonce, now, signatures)
            .map_err(|err| reject("trigger_escape_guardian", err))
    }

    fn trigger_escape_signer(
        &mut self,
        nonce: u64,
        now: Timestamp,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError> {
        self.try_trigger_escape_signer(nonce, now, signatures)
            .map_err(|err| reject("trigger_escape_signer", err))
    }

    fn escape_guardian(
        &mut self,
        nonce: u64,
        now: Timestamp,
        new_guardian: Ed25519PublicKey,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError> {
        self.try_escape_guardian(nonce, now, new_guardian, signatures)
            .map_err(|err| reject("escape_guardian", err))
    }

    fn escape_signer(
        &mut self,
        nonce: u64,
        now: Timestamp,
        new_signer: Ed25519PublicKey,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError> {
        self.try_escape_signer(nonce, now, new_signer, signatures)
            .map_err(|err| reject("escape_signer", err))
    }

    fn cancel_escape(
        &mut self,
        nonce: u64,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError> {
        self.try_cancel_escape(nonce, signatures)
            .map_err(|err| reject("cancel_escape", err))
    }

    fn is_valid_signature(&self, hash: &Hash, signatures: &SignatureSet) -> bool {
        AuthorizationEngine::authorize(
            &self.verifier,
            Operation::ExecuteBatch,
            hash,
            signatures,
            &self.state,
        )
        .is_ok()
    }

    fn get_signer(&self) -> Option<Ed25519PublicKey> {
        self.state.signer_key
    }

    fn get_guardian(&self) -> Option<Ed25519PublicKey> {
        self.state.guardian_key
    }

    fn get_guardian_backup(&self) -> Option<Ed25519PublicKey> {
        self.state.guardian_backup_key
    }

    fn get_escape(&self) -> Escape {
        self.state.escape
    }

    fn get_nonce(&self) -> u64 {
        self.state.nonce
    }
}
