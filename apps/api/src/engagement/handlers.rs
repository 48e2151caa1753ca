use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engagement::toggle::{add_comment, toggle, ToggleKind};
use crate::errors::AppError;
use crate::models::engagement::CommentRow;
use crate::state::AppState;
use crate::validation::{require_text, require_uuid};

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub user_id: Option<String>,
    pub post_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub user_id: Option<String>,
    pub post_id: Option<String>,
    pub comment_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub success: bool,
    pub data: CommentRow,
    pub total_comments: i64,
}

async fn handle_toggle(
    state: AppState,
    kind: ToggleKind,
    payload: Result<Json<ToggleRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(req) = payload?;
    let user_id = require_uuid("user_id", req.user_id.as_deref())?;
    let post_id = require_uuid("post_id", req.post_id.as_deref())?;

    let outcome = toggle(state.engagement.as_ref(), kind, user_id, post_id).await?;
    Ok(Json(outcome.to_json()))
}

/// POST /functions/v1/toggle-like
pub async fn handle_toggle_like(
    State(state): State<AppState>,
    payload: Result<Json<ToggleRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    handle_toggle(state, ToggleKind::Like, payload).await
}

/// POST /functions/v1/toggle-share
pub async fn handle_toggle_share(
    State(state): State<AppState>,
    payload: Result<Json<ToggleRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    handle_toggle(state, ToggleKind::Share, payload).await
}

/// POST /functions/v1/toggle-favorite
pub async fn handle_toggle_favorite(
    State(state): State<AppState>,
    payload: Result<Json<ToggleRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    handle_toggle(state, ToggleKind::Favorite, payload).await
}

/// POST /functions/v1/add-comment
pub async fn handle_add_comment(
    State(state): State<AppState>,
    payload: Result<Json<CommentRequest>, JsonRejection>,
) -> Result<Json<CommentResponse>, AppError> {
    let Json(req) = payload?;
    let user_id = require_uuid("user_id", req.user_id.as_deref())?;
    let post_id = require_uuid("post_id", req.post_id.as_deref())?;
    let text = require_text("comment_text", req.comment_text.as_deref())?;

    let (data, total_comments) =
        add_comment(state.engagement.as_ref(), user_id, post_id, &text).await?;

    Ok(Json(CommentResponse {
        success: true,
        data,
        total_comments,
    }))
}
