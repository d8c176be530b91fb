//! Outfit search, sort and pagination.
//!
//! All functions operate on in-memory sequences produced by a store, which
//! are newest-first. The combined pipeline is always filter → sort →
//! paginate; see [`run_query`].

use std::cmp::Reverse;

use crate::outfit::Outfit;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default page size for `/outfits/search`.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Default number of outfits for `/outfits/recent`.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Maximum page size accepted from clients.
pub const MAX_LIMIT: usize = 100;

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Supported sort orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Descending by timestamp.
    Newest,
    /// Ascending by timestamp.
    Oldest,
    /// Ascending by caption, case-insensitive.
    Alphabetical,
}

impl SortKey {
    /// Parse a sort key. Unrecognised keys yield `None`, which [`sort`]
    /// treats as "leave the order alone".
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "newest" => Some(SortKey::Newest),
            "oldest" => Some(SortKey::Oldest),
            "alphabetical" => Some(SortKey::Alphabetical),
            _ => None,
        }
    }
}

/// Filter outfits by tags (all must match) and theme.
///
/// Tag and theme comparisons ignore case. An empty tag list and an absent
/// or empty theme both match everything. Input order is preserved.
pub fn search(all: Vec<Outfit>, tags: &[String], theme: Option<&str>) -> Vec<Outfit> {
    let theme = theme.map(str::trim).filter(|t| !t.is_empty());

    all.into_iter()
        .filter(|outfit| tags.iter().all(|t| outfit.has_tag(t)))
        .filter(|outfit| match theme {
            None => true,
            Some(wanted) => outfit
                .theme
                .is_some_and(|t| t.as_str().eq_ignore_ascii_case(wanted)),
        })
        .collect()
}

/// Sort outfits by the given key. `None` returns the input unchanged.
///
/// All sorts are stable, so ties keep their input order.
pub fn sort(mut outfits: Vec<Outfit>, key: Option<SortKey>) -> Vec<Outfit> {
    match key {
        Some(SortKey::Newest) => outfits.sort_by_key(|o| Reverse(o.timestamp)),
        Some(SortKey::Oldest) => outfits.sort_by_key(|o| o.timestamp),
        Some(SortKey::Alphabetical) => outfits.sort_by_cached_key(|o| o.caption.to_lowercase()),
        None => {}
    }
    outfits
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// One page of a larger result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of items across all pages.
    pub total: usize,
    pub total_pages: usize,
}

/// Slice out page `page` (1-based) of size `limit`.
///
/// `page` and `limit` below 1 are treated as 1. Pages past the end are
/// empty rather than an error.
pub fn paginate<T>(items: Vec<T>, page: usize, limit: usize) -> Page<T> {
    let page = page.max(1);
    let limit = limit.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(limit);

    let start = (page - 1).saturating_mul(limit);
    let items = items.into_iter().skip(start).take(limit).collect();

    Page {
        items,
        total,
        total_pages,
    }
}

/// Parameters for the combined search pipeline.
#[derive(Debug, Clone, Default)]
pub struct OutfitQuery {
    pub tags: Vec<String>,
    pub theme: Option<String>,
    pub sort: Option<SortKey>,
    pub page: usize,
    pub limit: usize,
}

/// Filter, then sort, then paginate.
pub fn run_query(all: Vec<Outfit>, query: &OutfitQuery) -> Page<Outfit> {
    let filtered = search(all, &query.tags, query.theme.as_deref());
    let sorted = sort(filtered, query.sort);
    paginate(sorted, query.page, query.limit)
}

// ---------------------------------------------------------------------------
// Query-string helpers
// ---------------------------------------------------------------------------

/// Split a comma-separated tag parameter, trimming whitespace and dropping
/// empty entries.
///
/// # Examples
///
/// ```
/// use blackstyles_core::query::parse_tags;
/// assert_eq!(parse_tags(" casual, blue ,,"), vec!["casual", "blue"]);
/// assert!(parse_tags("").is_empty());
/// ```
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Clamp a user-provided page number to at least 1.
pub fn clamp_page(page: Option<i64>) -> usize {
    usize::try_from(page.unwrap_or(1)).unwrap_or(1).max(1)
}

/// Clamp a user-provided limit to `1..=max`.
pub fn clamp_limit(limit: Option<i64>, default: usize, max: usize) -> usize {
    match limit {
        None => default,
        Some(l) => usize::try_from(l).unwrap_or(1).clamp(1, max),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
