//! # Domain Layer
//!
//! Pure, deterministic account logic: no I/O, no clocks, no logging.
//! Time enters only as an argument; effects leave only as return values
//! applied by the service layer.

pub mod authorization;
pub mod dispatch;
pub mod entities;
pub mod escape;
pub mod invariants;
pub mod nonce;
pub mod services;
pub mod value_objects;

pub use authorization::{AuthorizationEngine, Operation, RequiredRoles, SignatureVerifier};
pub use entities::{AccountState, Escape, SignatureEntry, SignatureSet};
pub use escape::{EscapeStateMachine, ESCAPE_SECURITY_PERIOD};
pub use nonce::NonceGuard;
pub use value_objects::{Address, Call, CallOutput, Hash, Selector, Timestamp};
