//! # Call Dispatcher
//!
//! Executes an authorized batch against the call gateway: exactly the
//! supplied order, no reordering, no deduplication, no partial commit.
//! The first failing call rolls back everything staged so far; committing
//! on success is the service's job, after the nonce has advanced, so
//! account state and external effects move as one unit.

use crate::domain::dispatch;
use crate::domain::value_objects::{Address, Call, CallOutput};
use crate::errors::AccountError;
use crate::ports::outbound::CallGateway;

/// Stateless batch executor.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallDispatcher;

impl CallDispatcher {
    /// Runs `calls` in order against `gateway`.
    ///
    /// Preconditions: the batch is already authorized. A batch containing
    /// any self-targeting call is rejected wholesale before anything
    /// executes.
    pub fn execute<G: CallGateway>(
        gateway: &mut G,
        self_address: &Address,
        calls: &[Call],
    ) -> Result<Vec<CallOutput>, AccountError> {
        dispatch::assert_no_self_call(calls, self_address)?;

        let mut outputs = Vec::with_capacity(calls.len());
        for (index, call) in calls.iter().enumerate() {
            match gateway.execute_call(call) {
                Ok(output) => outputs.push(output),
                Err(err) => {
                    gateway.rollback();
                    return Err(AccountError::CallFailed {
                        index,
                        reason: err.to_string(),
                    });
                }
            }
        }
        Ok(outputs)
    }
}
