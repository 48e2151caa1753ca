use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job_request::{JobRequestRow, JobRequestStatus};
use crate::validation::{clean_list, optional_text, require_text, require_uuid};

/// JSON carried in the `payload` part of the create-job-request form.
#[derive(Debug, Default, Deserialize)]
pub struct CreateJobRequest {
    pub user_id: Option<String>,
    pub job_title: Option<String>,
    pub job_short_description: Option<String>,
    pub job_full_description: Option<String>,
    pub job_category_names: Option<Vec<String>>,
    pub job_category_type_ids: Option<Vec<String>>,
    pub job_urgency: Option<String>,
    pub job_budget: Option<f64>,
    pub job_start_date: Option<NaiveDate>,
    pub job_complete_date: Option<NaiveDate>,
    pub job_location: Option<String>,
    pub job_latitude: Option<f64>,
    pub job_longitude: Option<f64>,
    pub job_special_requirements: Option<String>,
    pub job_tags_ids: Option<Vec<String>>,
    pub job_tags_names: Option<Vec<String>>,
}

#[derive(Debug, PartialEq)]
pub struct NewJobRequest {
    pub user_id: Uuid,
    pub job_title: String,
    pub job_short_description: Option<String>,
    pub job_full_description: Option<String>,
    pub job_category_names: Vec<String>,
    pub job_category_type_ids: Vec<String>,
    pub job_urgency: Option<String>,
    pub job_budget: Option<f64>,
    pub job_start_date: Option<NaiveDate>,
    pub job_complete_date: Option<NaiveDate>,
    pub job_location: Option<String>,
    pub job_latitude: Option<f64>,
    pub job_longitude: Option<f64>,
    pub job_special_requirements: Option<String>,
    pub job_tags_ids: Vec<String>,
    pub job_tags_names: Vec<String>,
    /// Public URLs of uploaded images, filled in after upload.
    pub job_documents_images: Vec<String>,
}

impl NewJobRequest {
    pub fn from_request(req: CreateJobRequest) -> Result<Self, AppError> {
        let user_id = require_uuid("user_id", req.user_id.as_deref())?;
        let job_title = require_text("job_title", req.job_title.as_deref())?;

        if req.job_budget.is_some_and(|b| !b.is_finite() || b < 0.0) {
            return Err(AppError::Validation(
                "job_budget must be a non-negative number".to_string(),
            ));
        }
        if let (Some(start), Some(end)) = (req.job_start_date, req.job_complete_date) {
            if end < start {
                return Err(AppError::Validation(
                    "job_complete_date cannot be before job_start_date".to_string(),
                ));
            }
        }
        if req.job_latitude.is_some_and(|lat| !(-90.0..=90.0).contains(&lat)) {
            return Err(AppError::Validation(
                "job_latitude must be between -90 and 90".to_string(),
            ));
        }
        if req.job_longitude.is_some_and(|lng| !(-180.0..=180.0).contains(&lng)) {
            return Err(AppError::Validation(
                "job_longitude must be between -180 and 180".to_string(),
            ));
        }

        Ok(NewJobRequest {
            user_id,
            job_title,
            job_short_description: optional_text(req.job_short_description),
            job_full_description: optional_text(req.job_full_description),
            job_category_names: clean_list(req.job_category_names),
            job_category_type_ids: clean_list(req.job_category_type_ids),
            job_urgency: optional_text(req.job_urgency),
            job_budget: req.job_budget,
            job_start_date: req.job_start_date,
            job_complete_date: req.job_complete_date,
            job_location: optional_text(req.job_location),
            job_latitude: req.job_latitude,
            job_longitude: req.job_longitude,
            job_special_requirements: optional_text(req.job_special_requirements),
            job_tags_ids: clean_list(req.job_tags_ids),
            job_tags_names: clean_list(req.job_tags_names),
            job_documents_images: Vec::new(),
        })
    }
}

/// Inserts a new job request. New requests always start `Pending` and wait for review.
pub async fn insert_job_request(
    pool: &PgPool,
    job: &NewJobRequest,
) -> Result<JobRequestRow, AppError> {
    let row = sqlx::query_as::<_, JobRequestRow>(
        r#"
        INSERT INTO job_requests
            (user_id, job_title, job_short_description, job_full_description,
             job_category_names, job_category_type_ids, job_urgency, job_budget,
             job_start_date, job_complete_date, job_location, job_latitude,
             job_longitude, job_special_requirements, job_tags_ids, job_tags_names,
             job_documents_images, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
        RETURNING *
        "#,
    )
    .bind(job.user_id)
    .bind(&job.job_title)
    .bind(&job.job_short_description)
    .bind(&job.job_full_description)
    .bind(&job.job_category_names)
    .bind(&job.job_category_type_ids)
    .bind(&job.job_urgency)
    .bind(job.job_budget)
    .bind(job.job_start_date)
    .bind(job.job_complete_date)
    .bind(&job.job_location)
    .bind(job.job_latitude)
    .bind(job.job_longitude)
    .bind(&job.job_special_requirements)
    .bind(&job.job_tags_ids)
    .bind(&job.job_tags_names)
    .bind(&job.job_documents_images)
    .bind(JobRequestStatus::Pending.as_str())
    .fetch_one(pool)
    .await?;

    info!(
        "Created job request {} for user {} with {} images",
        row.id,
        row.user_id,
        job.job_documents_images.len()
    );
    Ok(row)
}
