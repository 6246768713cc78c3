//! # Domain Services
//!
//! Pure request-hash computation. Every state-mutating entry point binds
//! its signatures to a SHA-256 hash over the account address, the nonce,
//! an operation tag, and the operation's payload, so a signature can never
//! be replayed for a different account, nonce, or operation.
//!
//! Deterministic and side-effect free.

use crate::domain::value_objects::{Address, Call, Hash};
use aegis_crypto::Ed25519PublicKey;
use sha2::{Digest, Sha256};

/// Domain separation prefix for all request hashes.
const DOMAIN_TAG: &[u8] = b"aegis-account-v1";

/// Operation tags. One byte per entry point; never reused.
mod tags {
    pub const EXECUTE: u8 = 0x01;
    pub const CHANGE_SIGNER: u8 = 0x02;
    pub const CHANGE_GUARDIAN: u8 = 0x03;
    pub const CHANGE_GUARDIAN_BACKUP: u8 = 0x04;
    pub const TRIGGER_ESCAPE_GUARDIAN: u8 = 0x05;
    pub const TRIGGER_ESCAPE_SIGNER: u8 = 0x06;
    pub const ESCAPE_GUARDIAN: u8 = 0x07;
    pub const ESCAPE_SIGNER: u8 = 0x08;
    pub const CANCEL_ESCAPE: u8 = 0x09;
}

fn hasher(account: &Address, nonce: u64, tag: u8) -> Sha256 {
    let mut h = Sha256::new();
    h.update(DOMAIN_TAG);
    h.update(account.as_bytes());
    h.update(nonce.to_be_bytes());
    h.update([tag]);
    h
}

fn finish(h: Sha256) -> Hash {
    Hash::new(h.finalize().into())
}

fn update_key(h: &mut Sha256, key: &Ed25519PublicKey) {
    h.update(key.as_bytes());
}

fn update_opt_key(h: &mut Sha256, key: Option<&Ed25519PublicKey>) {
    match key {
        Some(key) => {
            h.update([1u8]);
            h.update(key.as_bytes());
        }
        None => h.update([0u8]),
    }
}

fn update_call(h: &mut Sha256, call: &Call) {
    h.update(call.target.as_bytes());
    let name = call.selector.name().as_bytes();
    h.update((name.len() as u32).to_be_bytes());
    h.update(name);
    h.update((call.calldata.len() as u32).to_be_bytes());
    for word in &call.calldata {
        h.update(word.to_be_bytes());
    }
}

/// Hash signed for `execute(nonce, calls)`.
#[must_use]
pub fn execute_hash(account: &Address, nonce: u64, calls: &[Call]) -> Hash {
    let mut h = hasher(account, nonce, tags::EXECUTE);
    h.update((calls.len() as u32).to_be_bytes());
    for call in calls {
        update_call(&mut h, call);
    }
    finish(h)
}

/// Hash signed for `change_signer`.
#[must_use]
pub fn change_signer_hash(account: &Address, nonce: u64, new_signer: &Ed25519PublicKey) -> Hash {
    let mut h = hasher(account, nonce, tags::CHANGE_SIGNER);
    update_key(&mut h, new_signer);
    finish(h)
}

/// Hash signed for `change_guardian`.
#[must_use]
pub fn change_guardian_hash(
    account: &Address,
    nonce: u64,
    new_guardian: Option<&Ed25519PublicKey>,
) -> Hash {
    let mut h = hasher(account, nonce, tags::CHANGE_GUARDIAN);
    update_opt_key(&mut h, new_guardian);
    finish(h)
}

/// Hash signed for `change_guardian_backup`.
#[must_use]
pub fn change_guardian_backup_hash(
    account: &Address,
    nonce: u64,
    new_backup: Option<&Ed25519PublicKey>,
) -> Hash {
    let mut h = hasher(account, nonce, tags::CHANGE_GUARDIAN_BACKUP);
    update_opt_key(&mut h, new_backup);
    finish(h)
}

/// Hash signed for `trigger_escape_guardian`.
#[must_use]
pub fn trigger_escape_guardian_hash(account: &Address, nonce: u64) -> Hash {
    finish(hasher(account, nonce, tags::TRIGGER_ESCAPE_GUARDIAN))
}

/// Hash signed for `trigger_escape_signer`.
#[must_use]
pub fn trigger_escape_signer_hash(account: &Address, nonce: u64) -> Hash {
    finish(hasher(account, nonce, tags::TRIGGER_ESCAPE_SIGNER))
}

/// Hash signed for `escape_guardian`.
#[must_use]
pub fn escape_guardian_hash(account: &Address, nonce: u64, new_guardian: &Ed25519PublicKey) -> Hash {
    let mut h = hasher(account, nonce, tags::ESCAPE_GUARDIAN);
    update_key(&mut h, new_guardian);
    finish(h)
}

/// Hash signed for `escape_signer`.
#[must_use]
pub fn escape_signer_hash(account: &Address, nonce: u64, new_signer: &Ed25519PublicKey) -> Hash {
    let mut h = hasher(account, nonce, tags::ESCAPE_SIGNER);
    update_key(&mut h, new_signer);
    finish(h)
}

/// Hash signed for `cancel_escape`.
#[must_use]
pub fn cancel_escape_hash(account: &Address, nonce: u64) -> Hash {
    finish(hasher(account, nonce, tags::CANCEL_ESCAPE))
}
