use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::feed::aggregator::build_company_feed;
use crate::feed::items::FeedItem;
use crate::pagination::{resolve_page_params, Pagination};
use crate::state::AppState;
use crate::validation::require_uuid;

#[derive(Debug, Deserialize)]
pub struct CompanyFeedRequest {
    pub user_id: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CompanyFeedResponse {
    pub success: bool,
    pub data: Vec<FeedItem>,
    pub pagination: Pagination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// POST /functions/v1/get-job-post-list-company
pub async fn handle_company_feed(
    State(state): State<AppState>,
    payload: Result<Json<CompanyFeedRequest>, JsonRejection>,
) -> Result<Json<CompanyFeedResponse>, AppError> {
    let Json(req) = payload?;
    let user_id = require_uuid("user_id", req.user_id.as_deref())?;
    let (page, limit) = resolve_page_params(req.page, req.limit)?;

    let feed = build_company_feed(state.feed.as_ref(), user_id, page, limit).await?;

    Ok(Json(CompanyFeedResponse {
        success: true,
        data: feed.items,
        pagination: feed.pagination,
        message: feed.message,
    }))
}
