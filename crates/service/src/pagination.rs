//! Pagination utilities for service layer
//!
//! Provides `Pagination` (normalized page/limit), the `Page<T>` envelope
//! returned by list operations and a helper running a counted, paged select.

use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, QuerySelect, Select};
use serde::Serialize;

use crate::errors::ServiceError;

pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;
/// Keeps `OFFSET` well inside Postgres' bigint range.
pub const MAX_PAGE: u64 = 10_000_000;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u64,
    /// items per page
    pub limit: u64,
}

impl Pagination {
    /// Apply defaults: page 1, limit 10; page is clamped to 1..=MAX_PAGE and limit to 1..=100.
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(1).min(MAX_PAGE);
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        Self { page, limit }
    }

    pub fn offset(&self) -> u64 { self.page.saturating_sub(1).saturating_mul(self.limit) }
}

impl Default for Pagination {
    fn default() -> Self { Self::new(None, None) }
}

/// One page of a list endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: u64, p: Pagination) -> Self {
        Self { data, total, page: p.page, limit: p.limit }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page { data: self.data.into_iter().map(f).collect(), total: self.total, page: self.page, limit: self.limit }
    }
}

/// Count `select` then fetch the requested window of it.
pub async fn fetch_page<E, C>(db: &C, select: Select<E>, p: Pagination) -> Result<Page<E::Model>, ServiceError>
where
    E: EntityTrait,
    E::Model: Sync,
    C: ConnectionTrait,
{
    let total = select.clone().count(db).await?;
    let rows = select.offset(p.offset()).limit(p.limit).all(db).await?;
    Ok(Page::new(rows, total, p))
}

/// Slice an in-memory list the same way `fetch_page` slices a query.
pub fn page_of<T: Clone>(items: &[T], p: Pagination) -> Page<T> {
    let data = items.iter().skip(p.offset() as usize).take(p.limit as usize).cloned().collect();
    Page::new(data, items.len() as u64, p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let p = Pagination::new(None, None);
        assert_eq!(p, Pagination { page: 1, limit: 10 });
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn zero_page_is_first_page() {
        assert_eq!(Pagination::new(Some(0), Some(5)).page, 1);
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(Pagination::new(Some(1), Some(0)).limit, 1);
        assert_eq!(Pagination::new(Some(1), Some(1000)).limit, 100);
    }

    #[test]
    fn offset_follows_page() {
        assert_eq!(Pagination::new(Some(3), Some(20)).offset(), 40);
    }

    #[test]
    fn huge_page_is_clamped() {
        let p = Pagination::new(Some(u64::MAX), Some(MAX_LIMIT));
        assert_eq!(p.page, MAX_PAGE);
        assert_eq!(p.offset(), (MAX_PAGE - 1) * MAX_LIMIT);
        assert!(page_of(&[1, 2, 3], p).data.is_empty());
    }

    #[test]
    fn offset_saturates_for_hand_built_values() {
        let p = Pagination { page: u64::MAX, limit: u64::MAX };
        assert_eq!(p.offset(), u64::MAX);
    }

    #[test]
    fn in_memory_pages() {
        let items: Vec<u32> = (1..=25).collect();
        let page = page_of(&items, Pagination::new(Some(3), Some(10)));
        assert_eq!(page.data, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.total, 25);
        let empty = page_of(&items, Pagination::new(Some(9), Some(10)));
        assert!(empty.data.is_empty());
    }
}
