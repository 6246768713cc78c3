//! # Core Domain Entities
//!
//! The durable account aggregate and the credential set presented with a
//! request. `AccountState` is owned exclusively by the account service and
//! passed by exclusive reference into every operation; no component keeps
//! its own copy.

use crate::domain::value_objects::Timestamp;
use aegis_crypto::{Ed25519PublicKey, Ed25519Signature};
use serde::{Deserialize, Serialize};

// =============================================================================
// ESCAPE SLOT
// =============================================================================

/// The single escape slot of an account.
///
/// Exactly one escape can be pending at a time; the slot is a tagged
/// variant (never parallel booleans) so the override rules are checked by
/// exhaustive pattern matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Escape {
    /// No recovery in progress.
    #[default]
    None,
    /// The signer is replacing a lost guardian; completes at `ready_at`.
    PendingGuardianRecovery {
        /// Absolute timestamp at which the escape becomes completable.
        ready_at: Timestamp,
    },
    /// The guardian is replacing a lost signer; completes at `ready_at`.
    PendingSignerRecovery {
        /// Absolute timestamp at which the escape becomes completable.
        ready_at: Timestamp,
    },
}

impl Escape {
    /// Returns true if any recovery is pending.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Escape::None)
    }

    /// Returns the ready time of a pending escape, if any.
    #[must_use]
    pub fn ready_at(&self) -> Option<Timestamp> {
        match self {
            Escape::None => None,
            Escape::PendingGuardianRecovery { ready_at }
            | Escape::PendingSignerRecovery { ready_at } => Some(*ready_at),
        }
    }
}

// =============================================================================
// ACCOUNT STATE
// =============================================================================

/// Durable state of one account.
///
/// Invariants (checked by `domain::invariants`):
/// - `signer_key` is `Some` from initialization onward.
/// - `guardian_backup_key` is `Some` only while `guardian_key` is `Some`.
/// - `escape` holds at most one pending recovery.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    /// Primary authorization key. `None` only before initialization.
    pub signer_key: Option<Ed25519PublicKey>,
    /// Secondary key for sensitive changes and signer recovery.
    pub guardian_key: Option<Ed25519PublicKey>,
    /// Alternate guardian key for signer recovery only.
    pub guardian_backup_key: Option<Ed25519PublicKey>,
    /// Replay-protection counter, starts at 0.
    pub nonce: u64,
    /// The single escape slot.
    pub escape: Escape,
}

impl AccountState {
    /// Creates the pre-initialization state.
    #[must_use]
    pub fn uninitialized() -> Self {
        Self::default()
    }

    /// Returns true once `initialize` has run.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.signer_key.is_some()
    }
}

// =============================================================================
// PRESENTED CREDENTIALS
// =============================================================================

/// One (public key, signature) pair presented for a role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureEntry {
    /// Key the signature claims to come from.
    pub key: Ed25519PublicKey,
    /// Signature over the request hash.
    pub signature: Ed25519Signature,
}

impl SignatureEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(key: Ed25519PublicKey, signature: Ed25519Signature) -> Self {
        Self { key, signature }
    }
}

/// The credential set attached to a request: one slot per role.
///
/// A required slot that is left empty fails verification for that role;
/// it is never treated as "not required".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureSet {
    /// Signer-role slot.
    pub signer: Option<SignatureEntry>,
    /// Guardian-role slot (guardian or, where allowed, guardian backup).
    pub guardian: Option<SignatureEntry>,
}

impl SignatureSet {
    /// No credentials.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Only the signer slot filled.
    #[must_use]
    pub fn signer_only(entry: SignatureEntry) -> Self {
        Self {
            signer: Some(entry),
            guardian: None,
        }
    }

    /// Only the guardian slot filled.
    #[must_use]
    pub fn guardian_only(entry: SignatureEntry) -> Self {
        Self {
            signer: None,
            guardian: Some(entry),
        }
    }

    /// Both slots filled.
    #[must_use]
    pub fn signer_and_guardian(signer: SignatureEntry, guardian: SignatureEntry) -> Self {
        Self {
            signer: Some(signer),
            guardian: Some(guardian),
        }
    }
}
