use crate::request::Query;

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// An axis-aligned box in page coordinates marking one match hit.
///
/// Coordinates are whatever unit the [`PageSearchProvider`] works in —
/// typically points or pixels of the decoded page. pagescan never interprets
/// them; it only carries them from the provider to the sink.
///
/// [`PageSearchProvider`]: crate::PageSearchProvider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Region {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

// ---------------------------------------------------------------------------
// SearchResult
// ---------------------------------------------------------------------------

/// A successful scan outcome: the first page with at least one hit.
///
/// Only produced on success, so `regions` is non-empty by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The query that matched.
    pub query: Query,

    /// The page the match was found on.
    pub page_index: usize,

    /// Match boxes on that page, in the order the provider reported them.
    pub regions: Vec<Region>,
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// How a scan terminated.
///
/// There is no failure variant — a page the provider cannot search counts as
/// "no match on that page", and the scan simply advances.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A match was found; no pages past it were scanned.
    Found(SearchResult),

    /// Every reachable page was scanned without a hit.
    NotFound,

    /// The scan was stopped or superseded before finishing. Never surfaced
    /// through the sink — cancellation is a silent termination.
    Cancelled,
}
