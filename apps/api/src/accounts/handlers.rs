use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::accounts::deletion::delete_account;
use crate::accounts::login::{check_login_eligibility, find_account_by_email};
use crate::errors::AppError;
use crate::models::profile::AccountRow;
use crate::state::AppState;
use crate::validation::{optional_text, require_text, require_uuid};

#[derive(Debug, Deserialize)]
pub struct ValidateLoginRequest {
    pub email: Option<String>,
    pub user_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ValidateLoginResponse {
    pub success: bool,
    pub user: AccountRow,
}

#[derive(Debug, Deserialize)]
pub struct DeleteAccountRequest {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteAccountResponse {
    pub success: bool,
    pub message: String,
}

/// POST /functions/v1/validate-login
pub async fn handle_validate_login(
    State(state): State<AppState>,
    payload: Result<Json<ValidateLoginRequest>, JsonRejection>,
) -> Result<Json<ValidateLoginResponse>, AppError> {
    let Json(req) = payload?;
    let email = require_text("email", req.email.as_deref())?;
    let user_type = optional_text(req.user_type);

    let account = find_account_by_email(&state.db, &email)
        .await?
        .ok_or_else(|| AppError::NotFound("No account found for this email".to_string()))?;
    check_login_eligibility(&account, user_type.as_deref())?;

    Ok(Json(ValidateLoginResponse {
        success: true,
        user: account,
    }))
}

/// POST /functions/v1/delete-account
pub async fn handle_delete_account(
    State(state): State<AppState>,
    payload: Result<Json<DeleteAccountRequest>, JsonRejection>,
) -> Result<Json<DeleteAccountResponse>, AppError> {
    let Json(req) = payload?;
    let user_id = require_uuid("user_id", req.user_id.as_deref())?;

    delete_account(&state.db, user_id).await?;

    Ok(Json(DeleteAccountResponse {
        success: true,
        message: "Account deleted".to_string(),
    }))
}
