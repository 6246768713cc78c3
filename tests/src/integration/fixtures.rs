//! Accounts, keys and signing helpers shared by the integration modules.
//!
//! Key roles use fixed seeds so every test sees the same cast: signer,
//! guardian, guardian backup, their replacements, and two wrong keys that
//! must never authorize anything.

use aegis_account::prelude::*;
use aegis_crypto::Ed25519KeyPair;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Installs the env-filter subscriber once for the whole suite.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Timestamp at which scenarios begin.
pub const DEFAULT_TIMESTAMP: u64 = 1_640_000_000;

/// Account address used by every fixture.
pub const ACCOUNT_ADDRESS: Address = Address::new([0xAA; 32]);

/// Address of the deployed counter dapp.
pub const DAPP_ADDRESS: Address = Address::new([0xBB; 32]);

pub fn signer() -> Ed25519KeyPair {
    Ed25519KeyPair::from_seed([1u8; 32])
}

pub fn guardian() -> Ed25519KeyPair {
    Ed25519KeyPair::from_seed([2u8; 32])
}

pub fn guardian_backup() -> Ed25519KeyPair {
    Ed25519KeyPair::from_seed([3u8; 32])
}

pub fn new_signer() -> Ed25519KeyPair {
    Ed25519KeyPair::from_seed([4u8; 32])
}

pub fn new_guardian() -> Ed25519KeyPair {
    Ed25519KeyPair::from_seed([5u8; 32])
}

pub fn new_guardian_backup() -> Ed25519KeyPair {
    Ed25519KeyPair::from_seed([6u8; 32])
}

pub fn wrong_signer() -> Ed25519KeyPair {
    Ed25519KeyPair::from_seed([7u8; 32])
}

pub fn wrong_guardian() -> Ed25519KeyPair {
    Ed25519KeyPair::from_seed([8u8; 32])
}

/// The account under test plus the counter dapp it talks to.
pub type TestAccount = AccountService<Ed25519Verifier, InMemoryCallGateway>;

fn account_with(guardian_key: Option<&Ed25519KeyPair>) -> TestAccount {
    init_tracing();

    let mut gateway = InMemoryCallGateway::new();
    gateway.register_counter_dapp(DAPP_ADDRESS);

    let mut account = AccountService::new(ACCOUNT_ADDRESS, Ed25519Verifier, gateway);
    account
        .initialize(signer().public_key(), guardian_key.map(|g| g.public_key()))
        .expect("fresh account initializes");
    account
}

/// Account initialized with signer + guardian.
pub fn account() -> TestAccount {
    account_with(Some(&guardian()))
}

/// Account initialized with signer only.
pub fn account_no_guardian() -> TestAccount {
    account_with(None)
}

/// A role signature over a request hash.
pub fn entry(kp: &Ed25519KeyPair, hash: &Hash) -> SignatureEntry {
    SignatureEntry::new(kp.public_key(), kp.sign(hash.as_bytes()))
}

/// Both roles sign.
pub fn both(hash: &Hash, s: &Ed25519KeyPair, g: &Ed25519KeyPair) -> SignatureSet {
    SignatureSet::signer_and_guardian(entry(s, hash), entry(g, hash))
}

/// Only the signer role signs.
pub fn signer_only(hash: &Hash, s: &Ed25519KeyPair) -> SignatureSet {
    SignatureSet::signer_only(entry(s, hash))
}

/// Only the guardian role signs.
pub fn guardian_only(hash: &Hash, g: &Ed25519KeyPair) -> SignatureSet {
    SignatureSet::guardian_only(entry(g, hash))
}
