// Company tag-matching feed: posts and approved job requests that share at
// least one tag with the requesting company, enriched and paginated.

pub mod aggregator;
pub mod enrichment;
pub mod handlers;
pub mod items;
pub mod matching;
pub mod source;
pub mod tags;
