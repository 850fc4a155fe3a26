// Invariant tests for the store: the balance of every account always
// equals its opening balance plus the sum of recorded entry amounts

#[cfg(test)]
mod tests {
    use crate::*;
    use mintbank_types::*;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    const OPENING_MAJOR: i64 = 10_000;

    fn store_with_sender() -> MemoryStore {
        let mut users = seed::demo_users();

        let mut accounts = BTreeMap::new();
        accounts.insert(
            AccountId::new("main"),
            Account::with_opening_balance("NGN", Amount::from_major(OPENING_MAJOR)),
        );
        users.insert(
            UserId::new("alice"),
            User {
                id: UserId::new("alice"),
                name: "Alice Example".to_string(),
                email: "alice@example.com".to_string(),
                accounts,
                preferences: Preferences::default(),
            },
        );

        MemoryStore::with_users(users)
    }

    fn recorded_sum(account: &Account) -> i64 {
        account.transactions.iter().map(|t| t.amount.minor()).sum()
    }

    proptest! {
        // Mixes valid transfers with rejected ones (non-positive amounts,
        // overdrafts); rejected attempts must leave no trace
        #[test]
        fn balance_matches_recorded_history(
            amounts in proptest::collection::vec(-500i64..2_000, 1..40)
        ) {
            let mut store = store_with_sender();
            let alice = UserId::new("alice");
            let main = AccountId::new("main");

            let mut accepted = 0usize;
            for major in amounts {
                if store
                    .transfer(&alice, &main, "acct9876", Amount::from_major(major), "prop")
                    .is_ok()
                {
                    accepted += 1;
                }
            }

            let sender = store.accounts(&alice).unwrap();
            let sender_main = &sender[&main];
            prop_assert_eq!(sender_main.transactions.len(), accepted);
            prop_assert_eq!(
                sender_main.balance.minor() - Amount::from_major(OPENING_MAJOR).minor(),
                recorded_sum(sender_main)
            );

            // The settlement account mirrors every accepted transfer
            let settlement = store.accounts(&UserId::new(seed::SETTLEMENT_USER)).unwrap();
            let settlement_main = &settlement[&AccountId::new(seed::SETTLEMENT_ACCOUNT)];
            prop_assert_eq!(settlement_main.transactions.len(), accepted);
            prop_assert_eq!(
                settlement_main.balance.minor()
                    - Amount::from_major(10_000_000_000).minor(),
                recorded_sum(settlement_main)
            );

            // Funds are conserved across the two accounts
            prop_assert_eq!(
                sender_main.balance.minor() + settlement_main.balance.minor(),
                Amount::from_major(OPENING_MAJOR).minor()
                    + Amount::from_major(10_000_000_000).minor()
            );
        }

        #[test]
        fn failed_transfers_leave_state_untouched(
            major in 1i64..1_000_000
        ) {
            let mut store = store_with_sender();
            let alice = UserId::new("alice");
            let main = AccountId::new("main");
            let before = store.snapshot();

            // Anything above the opening balance must be rejected
            let amount = Amount::from_major(OPENING_MAJOR + major);
            let result = store.transfer(&alice, &main, "acct9876", amount, "prop");
            prop_assert!(result.is_err());

            let after = store.accounts(&alice).unwrap();
            let restored: &Account = &before.users[&alice].accounts[&main];
            prop_assert_eq!(after[&main].balance, restored.balance);
            prop_assert_eq!(after[&main].transactions.len(), restored.transactions.len());
        }
    }

    #[test]
    fn test_seed_shape() {
        let users = seed::demo_users();
        assert_eq!(users.len(), 1);

        let user1 = &users[&UserId::new(seed::SETTLEMENT_USER)];
        assert_eq!(user1.name, "John Doe");
        let main = &user1.accounts[&AccountId::new(seed::SETTLEMENT_ACCOUNT)];
        assert_eq!(main.currency, "NGN");
        assert_eq!(main.balance, Amount::from_major(10_000_000_000));
        assert!(main.transactions.is_empty());
    }
}
