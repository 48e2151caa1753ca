use std::collections::{HashMap, HashSet};

use tracing::warn;
use uuid::Uuid;

use crate::feed::items::{EnrichedJobRequest, EnrichedPost};
use crate::feed::source::FeedSource;
use crate::models::engagement::EngagementKind;
use crate::models::job_request::JobRequestRow;
use crate::models::post::PostRow;
use crate::models::profile::ProfileRow;

/// Lookup maps built once per request for exactly the matched items.
#[derive(Debug, Default)]
pub struct Enrichment {
    pub profiles: HashMap<Uuid, ProfileRow>,
    pub likes: HashMap<Uuid, i64>,
    pub comments: HashMap<Uuid, i64>,
    pub shares: HashMap<Uuid, i64>,
}

impl Enrichment {
    pub fn enrich_post(&self, post: PostRow) -> EnrichedPost {
        let count = |map: &HashMap<Uuid, i64>| map.get(&post.id).copied().unwrap_or(0);
        EnrichedPost {
            total_likes: count(&self.likes),
            total_comments: count(&self.comments),
            total_shares: count(&self.shares),
            user: self.profiles.get(&post.user_id).cloned(),
            post,
        }
    }

    pub fn enrich_job_request(&self, job_request: JobRequestRow) -> EnrichedJobRequest {
        EnrichedJobRequest {
            user: self.profiles.get(&job_request.user_id).cloned(),
            job_request,
        }
    }
}

/// Distinct values in first-seen order.
fn distinct(ids: impl IntoIterator<Item = Uuid>) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

/// Distinct author ids across both matched sets.
pub fn author_ids(posts: &[PostRow], jobs: &[JobRequestRow]) -> Vec<Uuid> {
    distinct(
        posts
            .iter()
            .map(|p| p.user_id)
            .chain(jobs.iter().map(|j| j.user_id)),
    )
}

async fn load_profiles(source: &dyn FeedSource, user_ids: &[Uuid]) -> HashMap<Uuid, ProfileRow> {
    if user_ids.is_empty() {
        return HashMap::new();
    }
    match source.profiles(user_ids).await {
        Ok(rows) => rows.into_iter().map(|p| (p.user_id, p)).collect(),
        Err(e) => {
            warn!("Author profile lookup failed, authors will be null: {e:#}");
            HashMap::new()
        }
    }
}

async fn load_counts(
    source: &dyn FeedSource,
    kind: EngagementKind,
    post_ids: &[Uuid],
) -> HashMap<Uuid, i64> {
    if post_ids.is_empty() {
        return HashMap::new();
    }
    match source.engagement_counts(kind, post_ids).await {
        Ok(counts) => counts,
        Err(e) => {
            warn!("Counting {} failed, defaulting to 0: {e:#}", kind.table());
            HashMap::new()
        }
    }
}

/// Fetches author profiles and like/comment/share counts concurrently.
/// Lookup failures degrade to empty maps rather than failing the feed.
pub async fn load_enrichment(
    source: &dyn FeedSource,
    posts: &[PostRow],
    jobs: &[JobRequestRow],
) -> Enrichment {
    let user_ids = author_ids(posts, jobs);
    let post_ids = distinct(posts.iter().map(|p| p.id));

    let (profiles, likes, comments, shares) = tokio::join!(
        load_profiles(source, &user_ids),
        load_counts(source, EngagementKind::Like, &post_ids),
        load_counts(source, EngagementKind::Comment, &post_ids),
        load_counts(source, EngagementKind::Share, &post_ids),
    );

    Enrichment {
        profiles,
        likes,
        comments,
        shares,
    }
}
