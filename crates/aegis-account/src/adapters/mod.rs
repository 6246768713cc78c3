//! # Adapters
//!
//! Concrete implementations of the outbound ports: the Ed25519 verifier
//! over `aegis-crypto` and an in-memory transactional call gateway for
//! tests and embedding without a real execution environment.

pub mod call_gateway;
pub mod ed25519_verifier;

pub use call_gateway::InMemoryCallGateway;
pub use ed25519_verifier::Ed25519Verifier;
