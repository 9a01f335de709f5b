// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// The text being searched for.
///
/// Immutable once created, and compared by content: a request carrying a
/// different `Query` is a fresh search, never a continuation of the previous
/// one. The coordinator relies on this equality to decide between the
/// "text not found" and "no further occurrences" outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    text: String,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The query text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Which way the scan walks through the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward higher page indices.
    Forward,
    /// Toward lower page indices.
    Backward,
}

impl Direction {
    /// The page after `index` in this direction, or `None` when the step
    /// leaves the index space (backward past page 0).
    ///
    /// The upper document bound is the scan loop's concern — `step` only
    /// guards the underflow edge that `usize` cannot represent.
    pub fn step(self, index: usize) -> Option<usize> {
        match self {
            Self::Forward => index.checked_add(1),
            Self::Backward => index.checked_sub(1),
        }
    }
}

// ---------------------------------------------------------------------------
// SearchRequest
// ---------------------------------------------------------------------------

/// One invocation of "find next" / "find previous".
///
/// A fresh request scans from `display_page`. A continuation sets
/// `resume_page` via [`resume_from`](SearchRequest::resume_from) to the page
/// immediately past the previous match in the chosen direction — callers
/// compute it as `direction.step(found_page)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: Query,
    pub direction: Direction,
    /// The page currently shown to the user; the scan starts here unless
    /// `resume_page` is set.
    pub display_page: usize,
    /// Where to resume a continued search. `None` means "start from
    /// `display_page`".
    pub resume_page: Option<usize>,
}

impl SearchRequest {
    /// A fresh search starting at the displayed page.
    pub fn new(query: Query, direction: Direction, display_page: usize) -> Self {
        Self {
            query,
            direction,
            display_page,
            resume_page: None,
        }
    }

    /// Continue a previous search from `page`.
    ///
    /// `page` is the first page to scan, not the page of the previous match —
    /// apply [`Direction::step`] to the match page before calling this.
    pub fn resume_from(mut self, page: usize) -> Self {
        self.resume_page = Some(page);
        self
    }

    /// The page the scan begins at.
    pub(crate) fn start_index(&self) -> usize {
        self.resume_page.unwrap_or(self.display_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_step_increments() {
        assert_eq!(Direction::Forward.step(3), Some(4));
    }

    #[test]
    fn backward_step_stops_at_zero() {
        assert_eq!(Direction::Backward.step(1), Some(0));
        assert_eq!(Direction::Backward.step(0), None);
    }

    #[test]
    fn resume_page_overrides_display_page() {
        let fresh = SearchRequest::new(Query::new("x"), Direction::Forward, 7);
        assert_eq!(fresh.start_index(), 7);
        assert_eq!(fresh.resume_from(4).start_index(), 4);
    }
}
