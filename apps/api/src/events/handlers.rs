use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::events::interest::mark_interest;
use crate::models::event::EventInterestRow;
use crate::state::AppState;
use crate::validation::require_uuid;

#[derive(Debug, Deserialize)]
pub struct EventInterestRequest {
    pub user_id: Option<String>,
    pub event_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EventInterestResponse {
    pub success: bool,
    pub interested: bool,
    pub already_marked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<EventInterestRow>,
}

/// POST /functions/v1/mark-event-interest
pub async fn handle_mark_event_interest(
    State(state): State<AppState>,
    payload: Result<Json<EventInterestRequest>, JsonRejection>,
) -> Result<Json<EventInterestResponse>, AppError> {
    let Json(req) = payload?;
    let user_id = require_uuid("user_id", req.user_id.as_deref())?;
    let event_id = require_uuid("event_id", req.event_id.as_deref())?;

    let outcome = mark_interest(&state.db, user_id, event_id).await?;
    Ok(Json(EventInterestResponse {
        success: true,
        interested: true,
        already_marked: outcome.already_marked(),
        data: outcome.created,
    }))
}
