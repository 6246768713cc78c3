//! # Ed25519 Verifier Adapter
//!
//! Implements the `SignatureVerifier` boundary over `aegis-crypto`.

use crate::ports::outbound::SignatureVerifier;
use aegis_crypto::{Ed25519PublicKey, Ed25519Signature};

/// Stateless Ed25519 signature verifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Verifier;

impl SignatureVerifier for Ed25519Verifier {
    fn verify(
        &self,
        key: &Ed25519PublicKey,
        message: &[u8],
        signature: &Ed25519Signature,
    ) -> bool {
        key.verify(message, signature).is_ok()
    }
}
