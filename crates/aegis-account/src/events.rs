//! # Account Events
//!
//! Payloads emitted on successful state transitions, one per mutating
//! entry point. Rejected requests emit nothing.

use crate::domain::value_objects::{Address, CallOutput, Hash, Timestamp};
use aegis_crypto::Ed25519PublicKey;
use serde::{Deserialize, Serialize};

/// Event emitted by a successful account operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountEvent {
    /// A call batch was executed.
    TransactionExecuted {
        /// The account that executed the batch.
        account: Address,
    },
    /// The signer key was replaced via `change_signer`.
    SignerChanged {
        /// The new signer key.
        new_signer: Ed25519PublicKey,
    },
    /// The guardian key was replaced or cleared via `change_guardian`.
    GuardianChanged {
        /// The new guardian key, `None` when cleared.
        new_guardian: Option<Ed25519PublicKey>,
    },
    /// The guardian backup key was replaced or cleared.
    GuardianBackupChanged {
        /// The new backup key, `None` when cleared.
        new_backup: Option<Ed25519PublicKey>,
    },
    /// The signer started recovery of the guardian.
    EscapeGuardianTriggered {
        /// When the escape becomes completable.
        ready_at: Timestamp,
    },
    /// The guardian started recovery of the signer.
    EscapeSignerTriggered {
        /// When the escape becomes completable.
        ready_at: Timestamp,
    },
    /// A guardian recovery completed.
    GuardianEscaped {
        /// The newly installed guardian key.
        new_guardian: Ed25519PublicKey,
    },
    /// A signer recovery completed.
    SignerEscaped {
        /// The newly installed signer key.
        new_signer: Ed25519PublicKey,
    },
    /// A pending recovery was jointly aborted.
    EscapeCanceled,
}

/// Everything a successful `execute` produces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionReceipt {
    /// Hash the signatures were verified against.
    pub tx_hash: Hash,
    /// Outputs of the batch's calls, in call order.
    pub outputs: Vec<CallOutput>,
    /// The emitted event.
    pub event: AccountEvent,
}
