//! # Authorization Engine
//!
//! Pure policy logic deciding, per operation, which role signatures are
//! required and whether the presented credentials satisfy them.
//!
//! ## Check order
//!
//! When both roles are required the signer slot is verified first, then the
//! guardian slot; the first mismatch determines the rejection reason.
//! Callers rely on distinguishing `InvalidSignerSignature` from
//! `InvalidGuardianSignature`, so this order is part of the contract.

use crate::domain::entities::{AccountState, SignatureEntry, SignatureSet};
use crate::domain::value_objects::Hash;
use crate::errors::AccountError;
use aegis_crypto::{Ed25519PublicKey, Ed25519Signature};

// =============================================================================
// SIGNATURE VERIFIER BOUNDARY
// =============================================================================

/// Boundary to the external signature-verification primitive.
///
/// Pure: verifies a signature over a message against a public key, no state.
pub trait SignatureVerifier {
    /// Returns true if `signature` is a valid signature of `message` under `key`.
    fn verify(
        &self,
        key: &Ed25519PublicKey,
        message: &[u8],
        signature: &Ed25519Signature,
    ) -> bool;
}

// =============================================================================
// OPERATIONS AND POLICY
// =============================================================================

/// Privileged operations subject to the authorization policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Run a batch of outbound calls.
    ExecuteBatch,
    /// Replace the signer key.
    ChangeSigner,
    /// Replace (or clear) the guardian key.
    ChangeGuardian,
    /// Replace (or clear) the guardian backup key.
    ChangeGuardianBackup,
    /// Signer starts recovery of a lost guardian.
    TriggerGuardianEscape,
    /// Guardian starts recovery of a lost signer.
    TriggerSignerEscape,
    /// Signer completes a matured guardian recovery.
    CompleteGuardianEscape,
    /// Guardian completes a matured signer recovery.
    CompleteSignerEscape,
    /// Signer and guardian jointly abort a pending recovery.
    CancelEscape,
}

/// The signer set an operation requires, resolved against the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequiredRoles {
    /// Only the signer key must sign.
    SignerOnly,
    /// Signer and guardian must both sign (checked in that order).
    SignerAndGuardian,
    /// Guardian or guardian backup must sign; the signer must not be needed.
    GuardianOrBackup,
}

/// Stateless authorization engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizationEngine;

impl AuthorizationEngine {
    /// Resolves the required signer set for `operation` against `state`.
    ///
    /// Operations that only make sense with a guardian configured are
    /// rejected with `GuardianRequired` when none is set.
    pub fn required_roles(
        operation: Operation,
        state: &AccountState,
    ) -> Result<RequiredRoles, AccountError> {
        let guardian_set = state.guardian_key.is_some();

        match operation {
            Operation::ExecuteBatch | Operation::ChangeSigner | Operation::ChangeGuardian => {
                if guardian_set {
                    Ok(RequiredRoles::SignerAndGuardian)
                } else {
                    Ok(RequiredRoles::SignerOnly)
                }
            }
            Operation::ChangeGuardianBackup | Operation::CancelEscape => {
                if guardian_set {
                    Ok(RequiredRoles::SignerAndGuardian)
                } else {
                    Err(AccountError::GuardianRequired)
                }
            }
            Operation::TriggerGuardianEscape | Operation::CompleteGuardianEscape => {
                if guardian_set {
                    Ok(RequiredRoles::SignerOnly)
                } else {
                    Err(AccountError::GuardianRequired)
                }
            }
            Operation::TriggerSignerEscape | Operation::CompleteSignerEscape => {
                if guardian_set {
                    Ok(RequiredRoles::GuardianOrBackup)
                } else {
                    Err(AccountError::GuardianRequired)
                }
            }
        }
    }

    /// Decides whether `signatures` authorize `operation` over `request_hash`.
    ///
    /// Leaves `state` untouched; the caller applies effects only after this
    /// (and every other precondition) has passed.
    pub fn authorize<V: SignatureVerifier>(
        verifier: &V,
        operation: Operation,
        request_hash: &Hash,
        signatures: &SignatureSet,
        state: &AccountState,
    ) -> Result<(), AccountError> {
        match Self::required_roles(operation, state)? {
            RequiredRoles::SignerOnly => {
                verify_signer(verifier, request_hash, signatures.signer.as_ref(), state)
            }
            RequiredRoles::SignerAndGuardian => {
                // Signer first: the first mismatch decides the reason.
                verify_signer(verifier, request_hash, signatures.signer.as_ref(), state)?;
                verify_guardian(
                    verifier,
                    request_hash,
                    signatures.guardian.as_ref(),
                    state,
                    false,
                )
            }
            RequiredRoles::GuardianOrBackup => verify_guardian(
                verifier,
                request_hash,
                signatures.guardian.as_ref(),
                state,
                true,
            ),
        }
    }
}

// =============================================================================
// ROLE VERIFICATION
// =============================================================================

fn verify_signer<V: SignatureVerifier>(
    verifier: &V,
    request_hash: &Hash,
    entry: Option<&SignatureEntry>,
    state: &AccountState,
) -> Result<(), AccountError> {
    let signer_key = state
        .signer_key
        .as_ref()
        .ok_or(AccountError::InvalidSignerSignature)?;

    // An empty slot fails verification rather than being "not required".
    let entry = entry.ok_or(AccountError::InvalidSignerSignature)?;

    if entry.key != *signer_key
        || !verifier.verify(&entry.key, request_hash.as_bytes(), &entry.signature)
    {
        return Err(AccountError::InvalidSignerSignature);
    }
    Ok(())
}

fn verify_guardian<V: SignatureVerifier>(
    verifier: &V,
    request_hash: &Hash,
    entry: Option<&SignatureEntry>,
    state: &AccountState,
    allow_backup: bool,
) -> Result<(), AccountError> {
    let guardian_key = state
        .guardian_key
        .as_ref()
        .ok_or(AccountError::InvalidGuardianSignature)?;

    let entry = entry.ok_or(AccountError::InvalidGuardianSignature)?;

    let key_matches = entry.key == *guardian_key
        || (allow_backup && state.guardian_backup_key.as_ref() == Some(&entry.key));

    if !key_matches || !verifier.verify(&entry.key, request_hash.as_bytes(), &entry.signature) {
        return Err(AccountError::InvalidGuardianSignature);
    }
    Ok(())
}
