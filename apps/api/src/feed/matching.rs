use std::collections::HashSet;

use crate::models::job_request::JobRequestRow;
use crate::models::post::PostRow;

/// True when `item_tags` is present, non-empty, and shares at least one id with `company_tags`.
/// A missing tag list never matches.
pub fn shares_tag(item_tags: Option<&[String]>, company_tags: &HashSet<String>) -> bool {
    match item_tags {
        Some(tags) if !tags.is_empty() => tags.iter().any(|t| company_tags.contains(t)),
        _ => false,
    }
}

/// Keeps posts whose `tag_ids` intersect the company's tags.
pub fn filter_posts(posts: Vec<PostRow>, company_tags: &HashSet<String>) -> Vec<PostRow> {
    posts
        .into_iter()
        .filter(|p| shares_tag(p.tag_ids.as_deref(), company_tags))
        .collect()
}

/// Keeps approved job requests whose `job_tags_ids` intersect the company's tags.
pub fn filter_job_requests(
    jobs: Vec<JobRequestRow>,
    company_tags: &HashSet<String>,
) -> Vec<JobRequestRow> {
    jobs.into_iter()
        .filter(|j| j.is_approved() && shares_tag(j.job_tags_ids.as_deref(), company_tags))
        .collect()
}
