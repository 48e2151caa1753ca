use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::job_request::JobRequestRow;
use crate::models::post::PostRow;
use crate::models::profile::ProfileRow;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnrichedPost {
    #[serde(flatten)]
    pub post: PostRow,
    pub total_likes: i64,
    pub total_comments: i64,
    pub total_shares: i64,
    pub user: Option<ProfileRow>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnrichedJobRequest {
    #[serde(flatten)]
    pub job_request: JobRequestRow,
    pub user: Option<ProfileRow>,
}

/// One entry of the company feed. Serializes flat, with a `type` discriminator
/// of `"post"` or `"job_request"` next to the row's own fields.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedItem {
    Post(EnrichedPost),
    JobRequest(EnrichedJobRequest),
}

impl FeedItem {
    pub fn id(&self) -> Uuid {
        match self {
            FeedItem::Post(p) => p.post.id,
            FeedItem::JobRequest(j) => j.job_request.id,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            FeedItem::Post(p) => p.post.created_at,
            FeedItem::JobRequest(j) => j.job_request.created_at,
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FeedItem::Post(_) => 0,
            FeedItem::JobRequest(_) => 1,
        }
    }
}

/// Newest first; equal timestamps put posts before job requests, then order by id.
fn feed_order(a: &FeedItem, b: &FeedItem) -> Ordering {
    b.created_at()
        .cmp(&a.created_at())
        .then_with(|| a.kind_rank().cmp(&b.kind_rank()))
        .then_with(|| a.id().cmp(&b.id()))
}

/// Concatenates posts then job requests and sorts the combined list.
pub fn merge_and_sort(posts: Vec<EnrichedPost>, jobs: Vec<EnrichedJobRequest>) -> Vec<FeedItem> {
    let mut items: Vec<FeedItem> = posts
        .into_iter()
        .map(FeedItem::Post)
        .chain(jobs.into_iter().map(FeedItem::JobRequest))
        .collect();
    items.sort_by(feed_order);
    items
}
