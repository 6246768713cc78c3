//! # Value Objects
//!
//! Immutable domain primitives for the account core.
//! These types represent concepts that are defined by their value, not identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute timestamp in seconds, supplied by the execution environment.
///
/// The core never reads wall-clock time; every time-dependent operation
/// receives its `now` from the caller.
pub type Timestamp = u64;

// =============================================================================
// ADDRESS (32 bytes)
// =============================================================================

/// A 32-byte account/contract address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Address(pub [u8; 32]);

impl Address {
    /// The zero address.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates an address from a 32-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates an address from a slice. Returns None if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() == 32 {
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(slice);
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns true if this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short form: 0x + first 4 bytes
        write!(f, "0x{}…", hex::encode(&self.0[..4]))
    }
}

// =============================================================================
// HASH (32 bytes)
// =============================================================================

/// A 32-byte hash (request hashes, arbitrary message hashes).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    /// The zero hash.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates a hash from a 32-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

// =============================================================================
// CALLS
// =============================================================================

/// Entry point selector of an outbound call.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selector(pub String);

impl Selector {
    /// Creates a selector from a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the selector name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single outbound call: `(target_address, selector, argument_list)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    /// Destination contract address.
    pub target: Address,
    /// Entry point to invoke at the destination.
    pub selector: Selector,
    /// Positional arguments.
    pub calldata: Vec<u64>,
}

impl Call {
    /// Creates a call.
    #[must_use]
    pub fn new(target: Address, selector: impl Into<String>, calldata: Vec<u64>) -> Self {
        Self {
            target,
            selector: Selector::new(selector),
            calldata,
        }
    }
}

/// Result data returned by one executed call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallOutput {
    /// Values returned by the callee.
    pub data: Vec<u64>,
}

impl CallOutput {
    /// An empty output.
    #[must_use]
    pub fn empty() -> Self {
        Self { data: Vec::new() }
    }
}
