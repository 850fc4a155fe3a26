use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use mintbank_types::{
    Account, AccountId, Amount, Preferences, PreferencesPatch, Result, Transaction, User, UserId,
    UserProfile,
};

/// Store trait covering every operation the HTTP surface needs
/// Provides an abstraction that can be implemented for in-memory or
/// persistent storage
pub trait BankStore {
    /// Look up a user, returning the client-facing profile without accounts
    fn user(&self, user: &UserId) -> Result<UserProfile>;

    /// Full account map for a user
    fn accounts(&self, user: &UserId) -> Result<BTreeMap<AccountId, Account>>;

    /// First `limit` transactions of an account, in stored order
    /// (most-recent-first)
    fn transactions(
        &self,
        user: &UserId,
        account: &AccountId,
        limit: usize,
    ) -> Result<Vec<Transaction>>;

    /// Move funds out of a user's account and settle them; returns the
    /// debit entry and the sender's balance after settlement
    fn transfer(
        &mut self,
        user: &UserId,
        account: &AccountId,
        recipient: &str,
        amount: Amount,
        description: &str,
    ) -> Result<TransferReceipt>;

    /// Current preference set for a user
    fn preferences(&self, user: &UserId) -> Result<Preferences>;

    /// Apply a partial preference update and return the resulting set
    fn update_preferences(&mut self, user: &UserId, patch: &PreferencesPatch)
        -> Result<Preferences>;

    /// Get a snapshot of the full user map (for checkpoint/restore)
    fn snapshot(&self) -> StoreSnapshot;

    /// Restore from a snapshot
    fn restore(&mut self, snapshot: &StoreSnapshot);
}

/// Outcome of a successful transfer
#[derive(Debug, Clone, Serialize)]
pub struct TransferReceipt {
    pub transaction: Transaction,
    pub new_balance: Amount,
}

/// Snapshot of store state for checkpoint/restore
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub users: BTreeMap<UserId, User>,
}
