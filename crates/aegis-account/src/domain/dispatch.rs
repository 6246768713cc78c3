//! # Batch Validation
//!
//! Pure checks applied to a call batch before anything executes. A call
//! targeting the account itself would re-enter the privileged entry points
//! with the batch's (already spent) authorization, so a single self-call
//! anywhere rejects the whole batch.

use crate::domain::value_objects::{Address, Call};
use crate::errors::AccountError;

/// Rejects the batch if any call targets the account's own address.
pub fn assert_no_self_call(calls: &[Call], self_address: &Address) -> Result<(), AccountError> {
    if calls.iter().any(|call| call.target == *self_address) {
        return Err(AccountError::SelfCallForbidden);
    }
    Ok(())
}
