//! # Escape State Machine
//!
//! Dual-control recovery: either the signer or the guardian can recover the
//! account from loss of the other key, behind a fixed time lock. The
//! override rules are asymmetric on purpose: the signer (the true owner)
//! may always replace a pending signer recovery with its own guardian
//! recovery, while the guardian can never pre-empt a pending guardian
//! recovery.
//!
//! Transitions mutate `AccountState` only after their own preconditions
//! pass; a rejected transition leaves the slot untouched.

use crate::domain::entities::{AccountState, Escape};
use crate::domain::value_objects::Timestamp;
use crate::errors::AccountError;
use aegis_crypto::Ed25519PublicKey;

/// Mandatory waiting time between triggering and completing an escape.
pub const ESCAPE_SECURITY_PERIOD: Timestamp = 604_800; // 7 days

/// Stateless escape transition logic over `AccountState::escape`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapeStateMachine;

impl EscapeStateMachine {
    /// Signer starts (or restarts) recovery of the guardian.
    ///
    /// Allowed from any state, including overwriting a pending signer
    /// recovery: this is the owner's override right. Returns the new
    /// ready time.
    pub fn trigger_guardian_escape(state: &mut AccountState, now: Timestamp) -> Timestamp {
        let ready_at = now + ESCAPE_SECURITY_PERIOD;
        state.escape = Escape::PendingGuardianRecovery { ready_at };
        ready_at
    }

    /// Guardian starts (or refreshes) recovery of the signer.
    ///
    /// Allowed only when no guardian recovery is pending; refreshing an
    /// existing signer recovery restarts the timer.
    pub fn trigger_signer_escape(
        state: &mut AccountState,
        now: Timestamp,
    ) -> Result<Timestamp, AccountError> {
        match state.escape {
            Escape::PendingGuardianRecovery { .. } => {
                Err(AccountError::CannotOverrideSignerEscape)
            }
            Escape::None | Escape::PendingSignerRecovery { .. } => {
                let ready_at = now + ESCAPE_SECURITY_PERIOD;
                state.escape = Escape::PendingSignerRecovery { ready_at };
                Ok(ready_at)
            }
        }
    }

    /// Signer completes a matured guardian recovery, installing the new
    /// guardian key and clearing the slot.
    pub fn complete_guardian_escape(
        state: &mut AccountState,
        now: Timestamp,
        new_guardian: Ed25519PublicKey,
    ) -> Result<(), AccountError> {
        match state.escape {
            Escape::PendingGuardianRecovery { ready_at } if now >= ready_at => {
                state.guardian_key = Some(new_guardian);
                state.escape = Escape::None;
                Ok(())
            }
            _ => Err(AccountError::EscapeNotReady),
        }
    }

    /// Guardian completes a matured signer recovery, installing the new
    /// signer key and clearing the slot.
    pub fn complete_signer_escape(
        state: &mut AccountState,
        now: Timestamp,
        new_signer: Ed25519PublicKey,
    ) -> Result<(), AccountError> {
        match state.escape {
            Escape::PendingSignerRecovery { ready_at } if now >= ready_at => {
                state.signer_key = Some(new_signer);
                state.escape = Escape::None;
                Ok(())
            }
            _ => Err(AccountError::EscapeNotReady),
        }
    }

    /// Jointly-authorized abort of any pending recovery, independent of
    /// its ready time.
    pub fn cancel_escape(state: &mut AccountState) -> Result<(), AccountError> {
        if !state.escape.is_active() {
            return Err(AccountError::NoActiveEscape);
        }
        state.escape = Escape::None;
        Ok(())
    }
}
