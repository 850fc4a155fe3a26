use serde::{Deserialize, Serialize};

use crate::{Amount, Transaction};

/// A named balance-holding sub-ledger belonging to a user
/// Transactions are kept most-recent-first; the balance accumulates the
/// opening balance plus every recorded transaction amount
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub currency: String,
    pub balance: Amount,
    pub transactions: Vec<Transaction>,
}

impl Account {
    /// Create an empty account with a zero balance
    pub fn new(currency: impl Into<String>) -> Self {
        Account {
            currency: currency.into(),
            balance: Amount::ZERO,
            transactions: Vec::new(),
        }
    }

    /// Create an account seeded with an opening balance and no history
    pub fn with_opening_balance(currency: impl Into<String>, balance: Amount) -> Self {
        Account {
            currency: currency.into(),
            balance,
            transactions: Vec::new(),
        }
    }
}
