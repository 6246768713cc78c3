//! # Aegis Account - Authorization & Recovery Core
//!
//! Policy engine of a smart-contract-style account: decides, for every
//! requested state change, whether the presented credentials are
//! sufficient, enforces strict replay ordering, dispatches batched
//! outbound calls atomically, and runs a dual-control social-recovery
//! protocol. Either the signer or the guardian can recover the account
//! from loss of the other key, but the guardian can never unilaterally
//! seize control.
//!
//! ## Roles
//!
//! | Role | Authority |
//! |------|-----------|
//! | Signer | day-to-day operations; may always override a signer recovery |
//! | Guardian | co-signs sensitive changes; initiates signer recovery |
//! | Guardian backup | stands in for the guardian for signer recovery only |
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Signer always set after initialization | `domain/invariants.rs` - `check_signer_set_invariant()` |
//! | INVARIANT-2 | Backup implies guardian | `domain/invariants.rs` - `check_backup_invariant()` |
//! | INVARIANT-3 | At most one escape pending | `domain/entities.rs` - `Escape` is a single tagged variant |
//! | INVARIANT-4 | Rejection is a total rollback | `service.rs` - validate-then-mutate pipeline |
//!
//! ## Execution model
//!
//! Strictly sequential: requests against one account are totally ordered
//! by the nonce and applied one at a time, so the core performs no
//! locking. Time enters only as an externally supplied timestamp.
//!
//! ## Usage Example
//!
//! ```
//! use aegis_account::prelude::*;
//! use aegis_crypto::Ed25519KeyPair;
//!
//! let signer = Ed25519KeyPair::from_seed([1u8; 32]);
//! let guardian = Ed25519KeyPair::from_seed([2u8; 32]);
//!
//! let mut account = AccountService::new(
//!     Address::new([0xAA; 32]),
//!     Ed25519Verifier,
//!     InMemoryCallGateway::new(),
//! );
//! account
//!     .initialize(signer.public_key(), Some(guardian.public_key()))
//!     .unwrap();
//!
//! assert_eq!(account.get_signer(), Some(signer.public_key()));
//! assert_eq!(account.get_nonce(), 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod adapters;
pub mod dispatcher;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

/// Common imports for embedders and tests.
pub mod prelude {
    pub use crate::adapters::{Ed25519Verifier, InMemoryCallGateway};
    pub use crate::dispatcher::CallDispatcher;
    pub use crate::domain::{
        AccountState, Address, AuthorizationEngine, Call, CallOutput, Escape, EscapeStateMachine,
        Hash, NonceGuard, Operation, SignatureEntry, SignatureSet, ESCAPE_SECURITY_PERIOD,
    };
    pub use crate::errors::{AccountError, GatewayError};
    pub use crate::events::{AccountEvent, ExecutionReceipt};
    pub use crate::ports::{AccountApi, CallGateway, SignatureVerifier};
    pub use crate::service::AccountService;
}
