use thiserror::Error;

use crate::Amount;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Insufficient funds: account={account}, requested={requested}, available={available}")]
    InsufficientFunds {
        account: String,
        requested: Amount,
        available: Amount,
    },
}

pub type Result<T> = std::result::Result<T, BankError>;
