// Wire-format tests for the shared types

#[cfg(test)]
mod tests {
    use crate::*;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn sample_transaction() -> Transaction {
        Transaction {
            id: "txn_20250101120000_0001".to_string(),
            amount: Amount::from_f64(-250.75).unwrap(),
            description: "Transfer to 5678 - rent".to_string(),
            category: "transfer".to_string(),
            date: Utc::now(),
            status: TransactionStatus::Completed,
        }
    }

    #[test]
    fn test_transaction_wire_shape() {
        let txn = sample_transaction();
        let value = serde_json::to_value(&txn).unwrap();

        assert_eq!(value["status"], "completed");
        assert_eq!(value["amount"], -250.75);
        assert_eq!(value["category"], "transfer");
        // ISO-8601 date string
        assert!(value["date"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_transaction_roundtrip() {
        let txn = sample_transaction();
        let json = serde_json::to_string(&txn).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, back);
    }

    #[test]
    fn test_profile_excludes_accounts() {
        let mut accounts = BTreeMap::new();
        accounts.insert(
            AccountId::new("main"),
            Account::with_opening_balance("NGN", Amount::from_major(1000)),
        );
        let user = User {
            id: UserId::new("user1"),
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            accounts,
            preferences: Preferences::default(),
        };

        let value = serde_json::to_value(user.profile()).unwrap();
        assert!(value.get("accounts").is_none());
        assert_eq!(value["id"], "user1");
        assert_eq!(value["name"], "John Doe");
        assert_eq!(value["preferences"]["dark_mode"], false);
    }

    #[test]
    fn test_account_wire_shape() {
        let account = Account::with_opening_balance("NGN", Amount::from_major(10_000_000_000));
        let value = serde_json::to_value(&account).unwrap();

        assert_eq!(value["currency"], "NGN");
        assert_eq!(value["balance"].as_f64().unwrap(), 10_000_000_000.0);
        assert!(value["transactions"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_preferences_patch_ignores_unknown_keys() {
        let patch: PreferencesPatch =
            serde_json::from_str(r#"{"dark_mode": true, "theme_color": "red"}"#).unwrap();

        let mut prefs = Preferences::default();
        prefs.apply(&patch);

        assert!(prefs.dark_mode);
        assert!(prefs.notifications);
    }

    #[test]
    fn test_preferences_partial_apply() {
        let mut prefs = Preferences {
            dark_mode: true,
            notifications: true,
        };
        prefs.apply(&PreferencesPatch {
            dark_mode: None,
            notifications: Some(false),
        });

        assert!(prefs.dark_mode);
        assert!(!prefs.notifications);
    }

    #[test]
    fn test_id_operations() {
        let u1 = UserId::new("user1");
        let u2 = UserId::from("user1");
        assert_eq!(u1, u2);
        assert_eq!(u1.as_str(), "user1");

        let a1 = AccountId::new("main");
        let a2 = AccountId::new("savings");
        assert_ne!(a1, a2);
        assert_eq!(a1.to_string(), "main");
    }
}
