use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use mintbank_types::BankError;

/// Maps store errors onto the wire contract: a 4xx status and a
/// single-field `{"error": message}` body
pub struct ApiError(BankError);

impl From<BankError> for ApiError {
    fn from(err: BankError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            BankError::UserNotFound(_) => (StatusCode::NOT_FOUND, "User not found"),
            BankError::AccountNotFound(_) => (StatusCode::NOT_FOUND, "Account not found"),
            BankError::InvalidAmount(_) => (StatusCode::BAD_REQUEST, "Amount must be positive"),
            BankError::InsufficientFunds { .. } => (StatusCode::BAD_REQUEST, "Insufficient funds"),
        };
        tracing::debug!(error = %self.0, "request rejected");
        (status, Json(json!({ "error": message }))).into_response()
    }
}
