use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 20;

/// Pagination metadata returned alongside every paged list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        Self {
            page,
            limit,
            total,
            total_pages: total.div_ceil(u64::from(limit)),
        }
    }

    /// Row offset of the first item on this page (`page` is 1-indexed).
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

/// Resolves optional `page`/`limit` inputs. Values below 1 are rejected rather than clamped.
pub fn resolve_page_params(page: Option<i64>, limit: Option<i64>) -> Result<(u32, u32), AppError> {
    let page = page.unwrap_or(DEFAULT_PAGE);
    let limit = limit.unwrap_or(DEFAULT_LIMIT);

    let page = u32::try_from(page)
        .ok()
        .filter(|p| *p >= 1)
        .ok_or_else(|| AppError::Validation("page must be a positive integer".to_string()))?;
    let limit = u32::try_from(limit)
        .ok()
        .filter(|l| *l >= 1)
        .ok_or_else(|| AppError::Validation("limit must be a positive integer".to_string()))?;

    Ok((page, limit))
}

/// Slices an already-sorted in-memory collection into one page.
pub fn paginate<T>(items: Vec<T>, page: u32, limit: u32) -> (Vec<T>, Pagination) {
    let pagination = Pagination::new(page, limit, items.len() as u64);
    let offset = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
    let slice = items
        .into_iter()
        .skip(offset)
        .take(limit as usize)
        .collect();
    (slice, pagination)
}
