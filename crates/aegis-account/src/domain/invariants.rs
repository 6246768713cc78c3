//! # Domain Invariants
//!
//! Critical invariants that MUST hold for every observable `AccountState`.
//! The service debug-asserts these after each mutation; tests assert them
//! directly.

use crate::domain::entities::{AccountState, Escape};

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// INVARIANT-1: Signer Always Set
///
/// From initialization onward the account can never exist without a signer.
#[must_use]
pub fn check_signer_set_invariant(state: &AccountState) -> bool {
    state.signer_key.is_some()
}

/// INVARIANT-2: Backup Implies Guardian
///
/// A guardian backup can only exist while a guardian is set.
#[must_use]
pub fn check_backup_invariant(state: &AccountState) -> bool {
    state.guardian_backup_key.is_none() || state.guardian_key.is_some()
}

/// INVARIANT-3: Escape Slot Well-Formed
///
/// A pending escape always carries a non-zero ready time; `Escape::None`
/// carries none (the slot is a single tagged variant, so mutual exclusion
/// holds structurally).
#[must_use]
pub fn check_escape_slot_invariant(state: &AccountState) -> bool {
    match state.escape {
        Escape::None => true,
        Escape::PendingGuardianRecovery { ready_at }
        | Escape::PendingSignerRecovery { ready_at } => ready_at > 0,
    }
}

/// INVARIANT-4: Rejection Is a Total Rollback
///
/// After a rejected operation the state must be bit-identical to before,
/// nonce included.
#[must_use]
pub fn check_rollback_invariant(before: &AccountState, after: &AccountState) -> bool {
    before == after
}

/// All post-initialization invariants at once.
#[must_use]
pub fn check_all(state: &AccountState) -> bool {
    check_signer_set_invariant(state)
        && check_backup_invariant(state)
        && check_escape_slot_invariant(state)
}
