mod account;
mod amount;
mod error;
mod ids;
mod preferences;
mod transaction;
mod user;

pub use account::Account;
pub use amount::Amount;
pub use error::{BankError, Result};
pub use ids::{AccountId, UserId};
pub use preferences::{Preferences, PreferencesPatch};
pub use transaction::{Transaction, TransactionStatus};
pub use user::{User, UserProfile};

#[cfg(test)]
mod tests;
