use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{Account, AccountId, Preferences, UserId};

/// A registered user and everything the store tracks for them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub accounts: BTreeMap<AccountId, Account>,
    pub preferences: Preferences,
}

/// User record with the account data stripped, as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub preferences: Preferences,
}

impl User {
    /// Client-facing view of this user without account data
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            preferences: self.preferences,
        }
    }
}
