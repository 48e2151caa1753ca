use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::post::PostRow;
use crate::posts::create::{insert_post, CreatePostRequest, NewPost};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreatePostResponse {
    pub success: bool,
    pub data: PostRow,
}

/// POST /functions/v1/create-post
pub async fn handle_create_post(
    State(state): State<AppState>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatePostResponse>), AppError> {
    let Json(req) = payload?;
    let post = NewPost::from_request(req)?;
    let data = insert_post(&state.db, &post).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatePostResponse {
            success: true,
            data,
        }),
    ))
}
