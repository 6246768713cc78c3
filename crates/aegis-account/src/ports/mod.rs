//! # Ports
//!
//! Hexagonal boundaries of the account core: the inbound API exposed to
//! the execution environment and the outbound dependencies it consumes.

pub mod inbound;
pub mod outbound;

pub use inbound::AccountApi;
pub use outbound::{CallGateway, SignatureVerifier};
