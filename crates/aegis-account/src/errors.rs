//! # Error Types
//!
//! The full rejection taxonomy of the account core. Every rejection is
//! terminal for its request: the whole operation is rolled back, including
//! any nonce advancement, and retrying is the caller's responsibility.

use crate::domain::value_objects::{Address, Selector};
use thiserror::Error;

// =============================================================================
// ACCOUNT ERRORS
// =============================================================================

/// Rejection reasons surfaced by account entry points.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// `initialize` was called on an already-initialized account.
    #[error("already initialized")]
    AlreadyInitialized,

    /// The presented nonce did not match the account's counter exactly.
    #[error("nonce mismatch: expected {expected}, got {presented}")]
    NonceMismatch {
        /// The account's current counter.
        expected: u64,
        /// The nonce presented with the request.
        presented: u64,
    },

    /// The signer-role signature was missing, from the wrong key, or did
    /// not verify.
    #[error("signer signature invalid")]
    InvalidSignerSignature,

    /// The guardian-role signature was missing, from the wrong key, or did
    /// not verify.
    #[error("guardian signature invalid")]
    InvalidGuardianSignature,

    /// The operation requires a guardian but none is set.
    #[error("guardian must be set")]
    GuardianRequired,

    /// A batched call targeted the account itself.
    #[error("call to self forbidden")]
    SelfCallForbidden,

    /// An escape completion was attempted before its ready time, or with
    /// no matching escape pending.
    #[error("escape is not valid")]
    EscapeNotReady,

    /// The guardian tried to start a signer recovery while a guardian
    /// recovery was pending. Only the signer may override.
    #[error("cannot override signer escape")]
    CannotOverrideSignerEscape,

    /// `cancel_escape` was called with nothing pending.
    #[error("no active escape")]
    NoActiveEscape,

    /// Clearing the guardian while a guardian backup is still set.
    #[error("backup requires an active guardian")]
    BackupWithoutGuardian,

    /// A call in the batch failed; the whole batch was rolled back.
    #[error("call {index} failed: {reason}")]
    CallFailed {
        /// Position of the failing call within the batch.
        index: usize,
        /// Failure reported by the gateway.
        reason: String,
    },
}

// =============================================================================
// GATEWAY ERRORS
// =============================================================================

/// Failures reported by the outbound call gateway.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// No contract is deployed at the target address.
    #[error("unknown target: {0:?}")]
    UnknownTarget(Address),

    /// The target has no entry point with this selector.
    #[error("unknown selector: {0:?}")]
    UnknownSelector(Selector),

    /// The callee reverted.
    #[error("call reverted: {0}")]
    Reverted(String),
}
