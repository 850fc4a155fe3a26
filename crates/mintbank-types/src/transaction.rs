use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Amount;

/// Transaction lifecycle state. The mock settles everything instantly,
/// so completed is the only state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
}

/// An immutable signed ledger entry affecting an account's balance
/// Negative amounts are debits, positive amounts are credits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub amount: Amount,
    pub description: String,
    pub category: String,
    pub date: DateTime<Utc>,
    pub status: TransactionStatus,
}
