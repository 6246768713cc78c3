//! # Nonce Guard
//!
//! Replay protection: every state-mutating request carries the account's
//! exact current nonce. The check runs before authorization, so a stale
//! nonce is rejected independent of signature validity; the advance runs
//! after every other precondition has passed, so a rejected request never
//! consumes a nonce.

use crate::domain::entities::AccountState;
use crate::errors::AccountError;

/// Stateless replay guard over `AccountState::nonce`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonceGuard;

impl NonceGuard {
    /// Checks that `presented` equals the account's counter exactly.
    pub fn check(presented: u64, state: &AccountState) -> Result<(), AccountError> {
        if presented != state.nonce {
            return Err(AccountError::NonceMismatch {
                expected: state.nonce,
                presented,
            });
        }
        Ok(())
    }

    /// Advances the counter by exactly one.
    pub fn advance(state: &mut AccountState) {
        state.nonce += 1;
    }

    /// Combined check-then-advance, for operations with no later failure
    /// points.
    pub fn check_and_advance(presented: u64, state: &mut AccountState) -> Result<(), AccountError> {
        Self::check(presented, state)?;
        Self::advance(state);
        Ok(())
    }
}
