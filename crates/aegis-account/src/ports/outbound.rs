//! # Driven Ports (Outbound)
//!
//! Dependencies the account core consumes but does not implement:
//! the signature-verification primitive and the gateway that delivers
//! outbound calls to their destinations.

use crate::domain::value_objects::{Call, CallOutput};
use crate::errors::GatewayError;

// The verifier boundary is defined next to the authorization logic that
// consumes it; re-exported here as the outbound surface.
pub use crate::domain::authorization::SignatureVerifier;

/// Delivers batched calls to external contracts with transactional
/// semantics.
///
/// The dispatcher stages effects call by call; the service commits them
/// only after the whole request (batch, nonce advance) has succeeded, and
/// rolls back otherwise. Implementations must make `rollback` discard
/// every effect staged since the last `commit`.
pub trait CallGateway {
    /// Executes one call, staging its effects.
    fn execute_call(&mut self, call: &Call) -> Result<CallOutput, GatewayError>;

    /// Makes all staged effects durable.
    fn commit(&mut self);

    /// Discards all staged effects.
    fn rollback(&mut self);
}
