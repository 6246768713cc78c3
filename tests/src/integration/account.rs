//! Initialization, batch execution and key rotation through the full
//! service pipeline.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::*;
    use aegis_account::domain::services as hashes;
    use aegis_account::prelude::*;

    #[test]
    fn test_initializer() {
        let account = account();
        assert_eq!(account.get_signer(), Some(signer().public_key()));
        assert_eq!(account.get_guardian(), Some(guardian().public_key()));
        assert_eq!(account.get_guardian_backup(), None);
        assert_eq!(account.get_nonce(), 0);

        // should throw when calling initialize twice
        let mut account = account;
        assert_eq!(
            account.initialize(signer().public_key(), Some(guardian().public_key())),
            Err(AccountError::AlreadyInitialized)
        );
    }

    #[test]
    fn test_call_dapp_with_guardian() {
        let mut account = account();
        let calls = vec![Call::new(DAPP_ADDRESS, "set_number", vec![47])];

        // should revert with the wrong nonce
        let hash = hashes::execute_hash(&ACCOUNT_ADDRESS, 3, &calls);
        assert_eq!(
            account.execute(3, calls.clone(), both(&hash, &signer(), &guardian())),
            Err(AccountError::NonceMismatch {
                expected: 0,
                presented: 3
            })
        );

        // should revert with the wrong signer
        let hash = hashes::execute_hash(&ACCOUNT_ADDRESS, 0, &calls);
        assert_eq!(
            account.execute(0, calls.clone(), both(&hash, &wrong_signer(), &guardian())),
            Err(AccountError::InvalidSignerSignature)
        );

        // should revert with the wrong guardian
        assert_eq!(
            account.execute(0, calls.clone(), both(&hash, &signer(), &wrong_guardian())),
            Err(AccountError::InvalidGuardianSignature)
        );

        // should fail with only 1 signer
        assert_eq!(
            account.execute(0, calls.clone(), signer_only(&hash, &signer())),
            Err(AccountError::InvalidGuardianSignature)
        );

        // should call the dapp
        assert_eq!(account.gateway().committed_slot(DAPP_ADDRESS, 0), 0);
        let receipt = account
            .execute(0, calls, both(&hash, &signer(), &guardian()))
            .unwrap();
        assert_eq!(
            receipt.event,
            AccountEvent::TransactionExecuted {
                account: ACCOUNT_ADDRESS
            }
        );
        assert_eq!(account.gateway().committed_slot(DAPP_ADDRESS, 0), 47);
        assert_eq!(account.get_nonce(), 1);
    }

    #[test]
    fn test_call_dapp_no_guardian() {
        let mut account = account_no_guardian();

        // should call the dapp with the signer alone
        let calls = vec![Call::new(DAPP_ADDRESS, "set_number", vec![47])];
        let hash = hashes::execute_hash(&ACCOUNT_ADDRESS, 0, &calls);
        account
            .execute(0, calls, signer_only(&hash, &signer()))
            .unwrap();
        assert_eq!(account.gateway().committed_slot(DAPP_ADDRESS, 0), 47);

        // should change the signer
        let hash = hashes::change_signer_hash(&ACCOUNT_ADDRESS, 1, &new_signer().public_key());
        account
            .change_signer(1, new_signer().public_key(), signer_only(&hash, &signer()))
            .unwrap();
        assert_eq!(account.get_signer(), Some(new_signer().public_key()));

        // should reject operations that require the guardian to be set
        let hash = hashes::trigger_escape_guardian_hash(&ACCOUNT_ADDRESS, 2);
        assert_eq!(
            account.trigger_escape_guardian(
                2,
                DEFAULT_TIMESTAMP,
                signer_only(&hash, &new_signer())
            ),
            Err(AccountError::GuardianRequired)
        );

        // should add a guardian
        assert_eq!(account.get_guardian(), None);
        let hash =
            hashes::change_guardian_hash(&ACCOUNT_ADDRESS, 2, Some(&new_guardian().public_key()));
        account
            .change_guardian(
                2,
                Some(new_guardian().public_key()),
                signer_only(&hash, &new_signer()),
            )
            .unwrap();
        assert_eq!(account.get_guardian(), Some(new_guardian().public_key()));
    }

    #[test]
    fn test_change_signer() {
        let mut account = account();
        let new_key = new_signer().public_key();
        let hash = hashes::change_signer_hash(&ACCOUNT_ADDRESS, 0, &new_key);

        // should revert with the wrong signer
        assert_eq!(
            account.change_signer(0, new_key, both(&hash, &wrong_signer(), &guardian())),
            Err(AccountError::InvalidSignerSignature)
        );

        // should revert with the wrong guardian
        assert_eq!(
            account.change_signer(0, new_key, both(&hash, &signer(), &wrong_guardian())),
            Err(AccountError::InvalidGuardianSignature)
        );

        // should work with the correct signers
        let event = account
            .change_signer(0, new_key, both(&hash, &signer(), &guardian()))
            .unwrap();
        assert_eq!(event, AccountEvent::SignerChanged { new_signer: new_key });
        assert_eq!(account.get_signer(), Some(new_key));
    }

    #[test]
    fn test_change_guardian() {
        let mut account = account();
        let new_key = new_guardian().public_key();
        let hash = hashes::change_guardian_hash(&ACCOUNT_ADDRESS, 0, Some(&new_key));

        assert_eq!(
            account.change_guardian(
                0,
                Some(new_key),
                both(&hash, &wrong_signer(), &guardian())
            ),
            Err(AccountError::InvalidSignerSignature)
        );
        assert_eq!(
            account.change_guardian(
                0,
                Some(new_key),
                both(&hash, &signer(), &wrong_guardian())
            ),
            Err(AccountError::InvalidGuardianSignature)
        );

        let event = account
            .change_guardian(0, Some(new_key), both(&hash, &signer(), &guardian()))
            .unwrap();
        assert_eq!(
            event,
            AccountEvent::GuardianChanged {
                new_guardian: Some(new_key)
            }
        );
        assert_eq!(account.get_guardian(), Some(new_key));
    }

    #[test]
    fn test_change_guardian_backup() {
        let mut account = account();
        let new_key = new_guardian_backup().public_key();
        let hash = hashes::change_guardian_backup_hash(&ACCOUNT_ADDRESS, 0, Some(&new_key));

        assert_eq!(
            account.change_guardian_backup(
                0,
                Some(new_key),
                both(&hash, &wrong_signer(), &guardian())
            ),
            Err(AccountError::InvalidSignerSignature)
        );
        assert_eq!(
            account.change_guardian_backup(
                0,
                Some(new_key),
                both(&hash, &signer(), &wrong_guardian())
            ),
            Err(AccountError::InvalidGuardianSignature)
        );

        let event = account
            .change_guardian_backup(0, Some(new_key), both(&hash, &signer(), &guardian()))
            .unwrap();
        assert_eq!(
            event,
            AccountEvent::GuardianBackupChanged {
                new_backup: Some(new_key)
            }
        );
        assert_eq!(account.get_guardian_backup(), Some(new_key));
    }

    #[test]
    fn test_change_guardian_backup_when_no_guardian() {
        let mut account = account_no_guardian();
        let new_key = new_guardian_backup().public_key();
        let hash = hashes::change_guardian_backup_hash(&ACCOUNT_ADDRESS, 0, Some(&new_key));

        // rejected even with a valid signer signature
        assert_eq!(
            account.change_guardian_backup(0, Some(new_key), signer_only(&hash, &signer())),
            Err(AccountError::GuardianRequired)
        );
    }

    #[test]
    fn test_is_valid_signature() {
        let account = account();
        let hash = Hash::new([0x1C; 32]);

        assert!(account.is_valid_signature(&hash, &both(&hash, &signer(), &guardian())));
        assert!(!account.is_valid_signature(&hash, &signer_only(&hash, &signer())));
        assert!(!account.is_valid_signature(&hash, &both(&hash, &wrong_signer(), &guardian())));

        // read-only: the nonce is untouched
        assert_eq!(account.get_nonce(), 0);
    }

    #[test]
    fn test_rejections_consume_no_nonce() {
        let mut account = account();
        let calls = vec![Call::new(DAPP_ADDRESS, "set_number", vec![47])];
        let hash = hashes::execute_hash(&ACCOUNT_ADDRESS, 0, &calls);

        let _ = account.execute(0, calls.clone(), signer_only(&hash, &signer()));
        assert_eq!(account.get_nonce(), 0);

        // the same nonce then succeeds with full credentials
        account
            .execute(0, calls, both(&hash, &signer(), &guardian()))
            .unwrap();
        assert_eq!(account.get_nonce(), 1);
    }
}
