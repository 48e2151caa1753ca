use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum JobRequestStatus {
    Pending,
    Approved,
    /// Written by moderation outside this service; only read back here.
    #[allow(dead_code)]
    Rejected,
}

impl JobRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobRequestStatus::Pending => "Pending",
            JobRequestStatus::Approved => "Approved",
            JobRequestStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct JobRequestRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_title: String,
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
    pub job_documents_images: Option<Vec<String>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobRequestRow {
    pub fn is_approved(&self) -> bool {
        self.status == JobRequestStatus::Approved.as_str()
    }
}
