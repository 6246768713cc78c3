//! # Driving Ports (API - Inbound)
//!
//! The public surface of the account, consumed by the execution
//! environment. All methods are synchronous: the core is specified as
//! strictly sequential, with requests totally ordered by the nonce and at
//! most one applied at a time.
//!
//! Every state-mutating method is atomic: on any rejection nothing is
//! observable externally, nonce included.

use crate::domain::entities::{Escape, SignatureSet};
use crate::domain::value_objects::{Call, Hash, Timestamp};
use crate::errors::AccountError;
use crate::events::{AccountEvent, ExecutionReceipt};
use aegis_crypto::Ed25519PublicKey;

/// Primary API of the account core.
pub trait AccountApi {
    /// One-time setup: installs the mandatory signer and the optional
    /// guardian. Fails with `AlreadyInitialized` on any later call.
    fn initialize(
        &mut self,
        signer: Ed25519PublicKey,
        guardian: Option<Ed25519PublicKey>,
    ) -> Result<(), AccountError>;

    /// Executes a batch of outbound calls as one atomic unit.
    fn execute(
        &mut self,
        nonce: u64,
        calls: Vec<Call>,
        signatures: SignatureSet,
    ) -> Result<ExecutionReceipt, AccountError>;

    /// Replaces the signer key.
    fn change_signer(
        &mut self,
        nonce: u64,
        new_signer: Ed25519PublicKey,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError>;

    /// Replaces or clears the guardian key. Clearing is rejected while a
    /// guardian backup is set.
    fn change_guardian(
        &mut self,
        nonce: u64,
        new_guardian: Option<Ed25519PublicKey>,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError>;

    /// Replaces or clears the guardian backup key. Requires a guardian.
    fn change_guardian_backup(
        &mut self,
        nonce: u64,
        new_backup: Option<Ed25519PublicKey>,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError>;

    /// Signer starts recovery of the guardian, overriding any pending
    /// signer recovery.
    fn trigger_escape_guardian(
        &mut self,
        nonce: u64,
        now: Timestamp,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError>;

    /// Guardian (or backup) starts recovery of the signer; cannot override
    /// a pending guardian recovery.
    fn trigger_escape_signer(
        &mut self,
        nonce: u64,
        now: Timestamp,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError>;

    /// Signer completes a matured guardian recovery.
    fn escape_guardian(
        &mut self,
        nonce: u64,
        now: Timestamp,
        new_guardian: Ed25519PublicKey,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError>;

    /// Guardian (or backup) completes a matured signer recovery.
    fn escape_signer(
        &mut self,
        nonce: u64,
        now: Timestamp,
        new_signer: Ed25519PublicKey,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError>;

    /// Signer and guardian jointly abort a pending recovery.
    fn cancel_escape(
        &mut self,
        nonce: u64,
        signatures: SignatureSet,
    ) -> Result<AccountEvent, AccountError>;

    /// Read-only: verifies the signer (+ guardian, when set) pair over an
    /// arbitrary caller-supplied hash. No nonce, no state mutation.
    fn is_valid_signature(&self, hash: &Hash, signatures: &SignatureSet) -> bool;

    /// Current signer key, `None` before initialization.
    fn get_signer(&self) -> Option<Ed25519PublicKey>;

    /// Current guardian key.
    fn get_guardian(&self) -> Option<Ed25519PublicKey>;

    /// Current guardian backup key.
    fn get_guardian_backup(&self) -> Option<Ed25519PublicKey>;

    /// Current escape slot.
    fn get_escape(&self) -> Escape;

    /// Current nonce.
    fn get_nonce(&self) -> u64;
}
