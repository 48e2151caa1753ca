//! Company feed pipeline: tags → candidates → match → enrich → merge/sort/paginate.

use anyhow::Context;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::feed::enrichment::load_enrichment;
use crate::feed::items::{merge_and_sort, FeedItem};
use crate::feed::matching::{filter_job_requests, filter_posts};
use crate::feed::source::FeedSource;
use crate::feed::tags::resolve_tag_ids;
use crate::pagination::{paginate, Pagination};

#[derive(Debug)]
pub struct CompanyFeed {
    pub items: Vec<FeedItem>,
    pub pagination: Pagination,
    /// Set when the company has no tags configured.
    pub message: Option<String>,
}

pub const NO_TAGS_MESSAGE: &str = "No tags configured for this company profile";

pub async fn build_company_feed(
    source: &dyn FeedSource,
    user_id: Uuid,
    page: u32,
    limit: u32,
) -> Result<CompanyFeed, AppError> {
    let company = source
        .company_profile(user_id)
        .await
        .context("failed to fetch company profile")?
        .ok_or_else(|| AppError::NotFound("Company profile not found".to_string()))?;

    let company_tags = resolve_tag_ids(company.tags_ids.as_deref());
    if company_tags.is_empty() {
        info!("Company {user_id} has no tags configured, returning empty feed");
        return Ok(CompanyFeed {
            items: Vec::new(),
            pagination: Pagination::new(page, limit, 0),
            message: Some(NO_TAGS_MESSAGE.to_string()),
        });
    }

    let (posts, jobs) = tokio::join!(source.posts(), source.approved_job_requests());
    let posts = posts.unwrap_or_else(|e| {
        warn!("Fetching posts failed, continuing without posts: {e:#}");
        Vec::new()
    });
    let jobs = jobs.unwrap_or_else(|e| {
        warn!("Fetching job requests failed, continuing without job requests: {e:#}");
        Vec::new()
    });

    let posts = filter_posts(posts, &company_tags);
    let jobs = filter_job_requests(jobs, &company_tags);
    info!(
        "Company {user_id}: {} matching posts, {} matching job requests",
        posts.len(),
        jobs.len()
    );

    let enrichment = load_enrichment(source, &posts, &jobs).await;
    let posts = posts
        .into_iter()
        .map(|p| enrichment.enrich_post(p))
        .collect();
    let jobs = jobs
        .into_iter()
        .map(|j| enrichment.enrich_job_request(j))
        .collect();

    let (items, pagination) = paginate(merge_and_sort(posts, jobs), page, limit);

    Ok(CompanyFeed {
        items,
        pagination,
        message: None,
    })
}
