use chrono::Utc;
use std::collections::BTreeMap;
use tracing::{debug, info};

use mintbank_types::{
    Account, AccountId, Amount, BankError, Preferences, PreferencesPatch, Result, Transaction,
    TransactionStatus, User, UserId, UserProfile,
};

use crate::ledger::{BankStore, StoreSnapshot, TransferReceipt};
use crate::seed;

/// In-memory bank store
/// Not internally synchronized; concurrent callers must serialize access
/// through one lock
#[derive(Debug, Clone)]
pub struct MemoryStore {
    users: BTreeMap<UserId, User>,
    txn_seq: u64,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        MemoryStore {
            users: BTreeMap::new(),
            txn_seq: 0,
        }
    }

    /// Initialize with a pre-built user map
    pub fn with_users(users: BTreeMap<UserId, User>) -> Self {
        MemoryStore { users, txn_seq: 0 }
    }

    /// Store populated with the development seed data
    pub fn seeded() -> Self {
        Self::with_users(seed::demo_users())
    }

    fn user_ref(&self, user: &UserId) -> Result<&User> {
        self.users
            .get(user)
            .ok_or_else(|| BankError::UserNotFound(user.to_string()))
    }

    fn account_ref(&self, user: &UserId, account: &AccountId) -> Result<&Account> {
        self.user_ref(user)?
            .accounts
            .get(account)
            .ok_or_else(|| BankError::AccountNotFound(account.to_string()))
    }

    /// Next entry id: wall-clock second plus a monotonic sequence
    /// Unique within this store even across rapid calls
    fn next_transaction_id(&mut self) -> String {
        self.txn_seq += 1;
        format!(
            "txn_{}_{:04}",
            Utc::now().format("%Y%m%d%H%M%S"),
            self.txn_seq
        )
    }

    /// Record a signed entry against an account: prepend it to the history
    /// and fold the amount into the balance
    fn record(
        &mut self,
        user: &UserId,
        account: &AccountId,
        amount: Amount,
        description: String,
        category: &str,
    ) -> Result<Transaction> {
        let balance = self.account_ref(user, account)?.balance;
        let new_balance = balance.checked_add(amount)?;

        let entry = Transaction {
            id: self.next_transaction_id(),
            amount,
            description,
            category: category.to_string(),
            date: Utc::now(),
            status: TransactionStatus::Completed,
        };

        let target = self
            .users
            .get_mut(user)
            .ok_or_else(|| BankError::UserNotFound(user.to_string()))?
            .accounts
            .get_mut(account)
            .ok_or_else(|| BankError::AccountNotFound(account.to_string()))?;

        target.balance = new_balance;
        target.transactions.insert(0, entry.clone());

        debug!(%user, %account, amount = %amount, id = %entry.id, "ledger entry recorded");
        Ok(entry)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BankStore for MemoryStore {
    fn user(&self, user: &UserId) -> Result<UserProfile> {
        Ok(self.user_ref(user)?.profile())
    }

    fn accounts(&self, user: &UserId) -> Result<BTreeMap<AccountId, Account>> {
        Ok(self.user_ref(user)?.accounts.clone())
    }

    fn transactions(
        &self,
        user: &UserId,
        account: &AccountId,
        limit: usize,
    ) -> Result<Vec<Transaction>> {
        let account = self.account_ref(user, account)?;
        Ok(account.transactions.iter().take(limit).cloned().collect())
    }

    fn transfer(
        &mut self,
        user: &UserId,
        account: &AccountId,
        recipient: &str,
        amount: Amount,
        description: &str,
    ) -> Result<TransferReceipt> {
        // Validate everything up front so a failed transfer mutates nothing
        let available = self.account_ref(user, account)?.balance;
        if !amount.is_positive() {
            return Err(BankError::InvalidAmount(
                "transfer amount must be positive".to_string(),
            ));
        }
        if available < amount {
            return Err(BankError::InsufficientFunds {
                account: account.to_string(),
                requested: amount,
                available,
            });
        }

        let settlement_user = UserId::from(seed::SETTLEMENT_USER);
        let settlement_account = AccountId::from(seed::SETTLEMENT_ACCOUNT);
        self.account_ref(&settlement_user, &settlement_account)?;

        let debit = self.record(
            user,
            account,
            -amount,
            format!("Transfer to {} - {}", char_suffix(recipient, 4), description),
            "transfer",
        )?;

        // The mock settles every transfer into the fixed demo account
        // regardless of the stated recipient
        self.record(
            &settlement_user,
            &settlement_account,
            amount,
            format!(
                "Transfer from {}*** - {}",
                char_prefix(user.as_str(), 4),
                description
            ),
            "deposit",
        )?;

        // Read back after settlement: a self-transfer nets out to the
        // original balance
        let new_balance = self.account_ref(user, account)?.balance;
        info!(%user, %account, recipient, amount = %amount, "transfer completed");

        Ok(TransferReceipt {
            transaction: debit,
            new_balance,
        })
    }

    fn preferences(&self, user: &UserId) -> Result<Preferences> {
        Ok(self.user_ref(user)?.preferences)
    }

    fn update_preferences(
        &mut self,
        user: &UserId,
        patch: &PreferencesPatch,
    ) -> Result<Preferences> {
        let target = self
            .users
            .get_mut(user)
            .ok_or_else(|| BankError::UserNotFound(user.to_string()))?;

        target.preferences.apply(patch);
        info!(%user, "preferences updated");
        Ok(target.preferences)
    }

    fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            users: self.users.clone(),
        }
    }

    fn restore(&mut self, snapshot: &StoreSnapshot) {
        self.users = snapshot.users.clone();
    }
}

/// Last `n` characters of an id, or the whole id when shorter
fn char_suffix(s: &str, n: usize) -> &str {
    let len = s.chars().count();
    if len <= n {
        return s;
    }
    match s.char_indices().nth(len - n) {
        Some((i, _)) => &s[i..],
        None => s,
    }
}

/// First `n` characters of an id, or the whole id when shorter
fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}
