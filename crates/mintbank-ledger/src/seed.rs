use std::collections::BTreeMap;

use mintbank_types::{Account, AccountId, Amount, Preferences, User, UserId};

/// Fixed account every transfer settles into
pub const SETTLEMENT_USER: &str = "user1";
pub const SETTLEMENT_ACCOUNT: &str = "main";

/// Development seed: one user holding a single NGN account
pub fn demo_users() -> BTreeMap<UserId, User> {
    let mut accounts = BTreeMap::new();
    accounts.insert(
        AccountId::new(SETTLEMENT_ACCOUNT),
        Account::with_opening_balance("NGN", Amount::from_major(10_000_000_000)),
    );

    let mut users = BTreeMap::new();
    users.insert(
        UserId::new(SETTLEMENT_USER),
        User {
            id: UserId::new(SETTLEMENT_USER),
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            accounts,
            preferences: Preferences {
                dark_mode: false,
                notifications: true,
            },
        },
    );
    users
}
