//! Batch semantics: strict ordering, wholesale self-call rejection, and
//! all-or-nothing commitment.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::*;
    use aegis_account::domain::services as hashes;
    use aegis_account::prelude::*;

    fn execute(
        account: &mut TestAccount,
        nonce: u64,
        calls: Vec<Call>,
    ) -> Result<ExecutionReceipt, AccountError> {
        let hash = hashes::execute_hash(&ACCOUNT_ADDRESS, nonce, &calls);
        account.execute(nonce, calls, both(&hash, &signer(), &guardian()))
    }

    #[test]
    fn test_self_call_rejected_regardless_of_position() {
        let mut account = account();

        // self-call last
        let calls = vec![
            Call::new(DAPP_ADDRESS, "set_number", vec![47]),
            Call::new(ACCOUNT_ADDRESS, "trigger_escape_guardian", vec![]),
        ];
        assert_eq!(
            execute(&mut account, 0, calls),
            Err(AccountError::SelfCallForbidden)
        );

        // self-call first
        let calls = vec![
            Call::new(ACCOUNT_ADDRESS, "trigger_escape_guardian", vec![]),
            Call::new(DAPP_ADDRESS, "set_number", vec![47]),
        ];
        assert_eq!(
            execute(&mut account, 0, calls),
            Err(AccountError::SelfCallForbidden)
        );

        // nothing executed, nothing consumed
        assert_eq!(account.gateway().committed_slot(DAPP_ADDRESS, 0), 0);
        assert_eq!(account.get_nonce(), 0);
        assert_eq!(account.get_escape(), Escape::None);
    }

    #[test]
    fn test_batch_executes_in_order() {
        let mut account = account();

        let calls = vec![
            Call::new(DAPP_ADDRESS, "set_number", vec![47]),
            Call::new(DAPP_ADDRESS, "increase_number", vec![10]),
        ];
        let receipt = execute(&mut account, 0, calls).unwrap();

        assert_eq!(receipt.outputs.len(), 2);
        assert_eq!(receipt.outputs[1].data, vec![57]);
        assert_eq!(account.gateway().committed_slot(DAPP_ADDRESS, 0), 57);
    }

    #[test]
    fn test_failing_call_aborts_whole_batch() {
        let mut account = account();

        // second call reverts after the first succeeded
        let calls = vec![
            Call::new(DAPP_ADDRESS, "set_number", vec![47]),
            Call::new(DAPP_ADDRESS, "set_number", vec![]),
        ];
        let err = execute(&mut account, 0, calls).unwrap_err();
        assert!(matches!(err, AccountError::CallFailed { index: 1, .. }));

        // no partial commit, no nonce consumed
        assert_eq!(account.gateway().committed_slot(DAPP_ADDRESS, 0), 0);
        assert_eq!(account.get_nonce(), 0);
    }

    #[test]
    fn test_unknown_target_aborts_batch() {
        let mut account = account();
        let nowhere = Address::new([0xCC; 32]);

        let calls = vec![
            Call::new(DAPP_ADDRESS, "set_number", vec![47]),
            Call::new(nowhere, "set_number", vec![1]),
        ];
        assert!(matches!(
            execute(&mut account, 0, calls),
            Err(AccountError::CallFailed { index: 1, .. })
        ));
        assert_eq!(account.gateway().committed_slot(DAPP_ADDRESS, 0), 0);
    }

    #[test]
    fn test_empty_batch_still_consumes_a_nonce() {
        let mut account = account();

        let receipt = execute(&mut account, 0, vec![]).unwrap();
        assert!(receipt.outputs.is_empty());
        assert_eq!(account.get_nonce(), 1);
    }

    #[test]
    fn test_sequential_batches_advance_nonce_by_one() {
        let mut account = account();

        execute(
            &mut account,
            0,
            vec![Call::new(DAPP_ADDRESS, "set_number", vec![1])],
        )
        .unwrap();
        execute(
            &mut account,
            1,
            vec![Call::new(DAPP_ADDRESS, "increase_number", vec![2])],
        )
        .unwrap();

        assert_eq!(account.get_nonce(), 2);
        assert_eq!(account.gateway().committed_slot(DAPP_ADDRESS, 0), 3);

        // replaying an old nonce fails
        assert!(matches!(
            execute(
                &mut account,
                1,
                vec![Call::new(DAPP_ADDRESS, "set_number", vec![9])]
            ),
            Err(AccountError::NonceMismatch { .. })
        ));
        assert_eq!(account.gateway().committed_slot(DAPP_ADDRESS, 0), 3);
    }
}
