use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use mintbank_ledger::BankStore;
use mintbank_market::MarketFeed;
use mintbank_types::{
    Account, AccountId, Amount, Preferences, PreferencesPatch, Transaction, UserId, UserProfile,
};

use crate::errors::ApiError;
use crate::state::AppState;

const DEFAULT_ACCOUNT: &str = "main";
const DEFAULT_LIMIT: usize = 10;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// User record without account data
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserProfile>, ApiError> {
    let store = state.store.lock().unwrap();
    let profile = store.user(&UserId::from(user_id))?;
    Ok(Json(profile))
}

/// Full account map for a user
pub async fn get_accounts(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<BTreeMap<AccountId, Account>>, ApiError> {
    let store = state.store.lock().unwrap();
    let accounts = store.accounts(&UserId::from(user_id))?;
    Ok(Json(accounts))
}

#[derive(Deserialize)]
pub struct TransactionsQuery {
    pub account: Option<String>,
    pub limit: Option<usize>,
}

/// Most recent transactions of one account
pub async fn get_transactions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<TransactionsQuery>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let account = AccountId::new(query.account.as_deref().unwrap_or(DEFAULT_ACCOUNT));
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let store = state.store.lock().unwrap();
    let transactions = store.transactions(&UserId::from(user_id), &account, limit)?;
    Ok(Json(transactions))
}

#[derive(Deserialize)]
pub struct TransferRequest {
    #[serde(default = "default_account")]
    pub account: String,
    pub recipient: String,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
}

fn default_account() -> String {
    DEFAULT_ACCOUNT.to_string()
}

#[derive(Serialize)]
pub struct TransferResponse {
    pub message: String,
    pub transaction: Transaction,
    pub new_balance: Amount,
}

/// Move funds out of a user's account
pub async fn transfer(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<TransferRequest>,
) -> Result<Json<TransferResponse>, ApiError> {
    let amount = Amount::from_f64(req.amount)?;

    let mut store = state.store.lock().unwrap();
    let receipt = store.transfer(
        &UserId::from(user_id),
        &AccountId::new(req.account),
        &req.recipient,
        amount,
        &req.description,
    )?;

    Ok(Json(TransferResponse {
        message: "Transfer successful".to_string(),
        transaction: receipt.transaction,
        new_balance: receipt.new_balance,
    }))
}

/// Current preference set for a user
pub async fn get_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Preferences>, ApiError> {
    let store = state.store.lock().unwrap();
    let preferences = store.preferences(&UserId::from(user_id))?;
    Ok(Json(preferences))
}

#[derive(Serialize)]
pub struct PreferencesUpdateResponse {
    pub message: String,
    pub preferences: Preferences,
}

/// Apply a partial preference update
pub async fn put_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(patch): Json<PreferencesPatch>,
) -> Result<Json<PreferencesUpdateResponse>, ApiError> {
    let mut store = state.store.lock().unwrap();
    let preferences = store.update_preferences(&UserId::from(user_id), &patch)?;

    Ok(Json(PreferencesUpdateResponse {
        message: "Preferences updated".to_string(),
        preferences,
    }))
}

/// Fresh randomized market snapshot
pub async fn get_market_data(State(state): State<AppState>) -> impl IntoResponse {
    let market = state.market.lock().unwrap();
    Json(market.snapshot())
}
