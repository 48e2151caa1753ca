use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::kind::CatalogKind;
use crate::catalog::queries::{create_entry, delete_entry, list_entries, update_entry};
use crate::errors::AppError;
use crate::models::catalog::CatalogEntryRow;
use crate::pagination::{resolve_page_params, Pagination};
use crate::state::AppState;
use crate::validation::{optional_text, require_text, require_uuid};

#[derive(Debug, Deserialize)]
pub struct CatalogListQuery {
    pub search: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogEntryRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CatalogListResponse {
    pub success: bool,
    pub data: Vec<CatalogEntryRow>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
pub struct CatalogEntryResponse {
    pub success: bool,
    pub data: CatalogEntryRow,
}

/// GET /api/v1/catalog/:kind
pub async fn handle_list_entries(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    query: Result<Query<CatalogListQuery>, QueryRejection>,
) -> Result<Json<CatalogListResponse>, AppError> {
    let kind: CatalogKind = kind.parse()?;
    let Query(query) = query?;
    let (page, limit) = resolve_page_params(query.page, query.limit)?;
    let search = optional_text(query.search);

    let (data, pagination) = list_entries(&state.db, kind, search.as_deref(), page, limit).await?;
    Ok(Json(CatalogListResponse {
        success: true,
        data,
        pagination,
    }))
}

/// POST /api/v1/catalog/:kind
pub async fn handle_create_entry(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    payload: Result<Json<CatalogEntryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CatalogEntryResponse>), AppError> {
    let kind: CatalogKind = kind.parse()?;
    let Json(req) = payload?;
    let name = require_text("name", req.name.as_deref())?;

    let data = create_entry(&state.db, kind, &name).await?;
    Ok((
        StatusCode::CREATED,
        Json(CatalogEntryResponse {
            success: true,
            data,
        }),
    ))
}

/// PATCH /api/v1/catalog/:kind/:id
pub async fn handle_update_entry(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
    payload: Result<Json<CatalogEntryRequest>, JsonRejection>,
) -> Result<Json<CatalogEntryResponse>, AppError> {
    let kind: CatalogKind = kind.parse()?;
    let id = require_uuid("id", Some(id.as_str()))?;
    let Json(req) = payload?;
    let name = require_text("name", req.name.as_deref())?;

    let data = update_entry(&state.db, kind, id, &name).await?;
    Ok(Json(CatalogEntryResponse {
        success: true,
        data,
    }))
}

/// DELETE /api/v1/catalog/:kind/:id
pub async fn handle_delete_entry(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let kind: CatalogKind = kind.parse()?;
    let id = require_uuid("id", Some(id.as_str()))?;
    delete_entry(&state.db, kind, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
