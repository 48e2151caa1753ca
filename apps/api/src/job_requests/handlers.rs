use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::job_requests::create::{insert_job_request, NewJobRequest};
use crate::job_requests::uploads::{read_form, remove_all, upload_images};
use crate::models::job_request::JobRequestRow;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreateJobRequestResponse {
    pub success: bool,
    pub data: JobRequestRow,
}

/// POST /functions/v1/create-job-request
///
/// `multipart/form-data` with a `payload` JSON part and optional `images` parts.
/// The payload is validated before anything is uploaded.
pub async fn handle_create_job_request(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<CreateJobRequestResponse>), AppError> {
    let multipart = multipart.map_err(|e| {
        AppError::Validation(format!("Expected multipart/form-data: {}", e.body_text()))
    })?;
    let form = read_form(multipart).await?;
    let mut job = NewJobRequest::from_request(form.payload)?;

    let uploaded = upload_images(&state.storage, job.user_id, form.images).await?;
    job.job_documents_images = uploaded.iter().map(|(_, url)| url.clone()).collect();

    let data = match insert_job_request(&state.db, &job).await {
        Ok(row) => row,
        Err(e) => {
            remove_all(&state.storage, &uploaded).await;
            return Err(e);
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(CreateJobRequestResponse {
            success: true,
            data,
        }),
    ))
}
