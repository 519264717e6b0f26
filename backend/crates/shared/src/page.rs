//! Pagination Window
//!
//! List endpoints accept `limit`/`offset` query parameters. This module
//! normalizes them: limit defaults to 20 and is clamped to 1..=100,
//! offset defaults to 0.

use serde::Deserialize;

/// Default page size when no limit is given
pub const DEFAULT_LIMIT: i64 = 20;

/// Hard ceiling for a single page
pub const MAX_LIMIT: i64 = 100;

/// Raw query-string shape (`?limit=50&offset=20`)
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Normalized pagination window, safe to pass to SQL LIMIT/OFFSET
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub limit: i64,
    pub offset: i64,
}

impl PageParams {
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        let limit = match limit {
            Some(l) if l >= 1 => l.min(MAX_LIMIT),
            _ => DEFAULT_LIMIT,
        };
        let offset = offset.unwrap_or(0).max(0);
        Self { limit, offset }
    }
}

impl From<PageQuery> for PageParams {
    fn from(q: PageQuery) -> Self {
        Self::new(q.limit, q.offset)
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = PageParams::new(None, None);
        assert_eq!(page.limit, 20);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn test_limit_clamped_to_max() {
        let page = PageParams::new(Some(500), None);
        assert_eq!(page.limit, 100);
    }

    #[test]
    fn test_limit_zero_or_negative_falls_back() {
        assert_eq!(PageParams::new(Some(0), None).limit, 20);
        assert_eq!(PageParams::new(Some(-3), None).limit, 20);
    }

    #[test]
    fn test_offset_never_negative() {
        assert_eq!(PageParams::new(None, Some(-10)).offset, 0);
        assert_eq!(PageParams::new(None, Some(40)).offset, 40);
    }

    #[test]
    fn test_from_query() {
        let q = PageQuery {
            limit: Some(50),
            offset: Some(20),
        };
        let page: PageParams = q.into();
        assert_eq!(page.limit, 50);
        assert_eq!(page.offset, 20);
    }
}
