use crate::result::{Region, SearchResult};

/// The per-page search primitive, owned by the document engine.
///
/// pagescan drives this one page at a time; it never looks inside pages
/// itself. Implementations back onto whatever renders the document — a PDF
/// library, an in-memory corpus, a remote service.
///
/// # Thread Safety
///
/// `Send + Sync` are required — `search_page` runs on the scan worker thread
/// while the coordinator's owner may query `page_count` from the foreground.
///
/// # Blocking
///
/// `search_page` may block (page decode is often the dominant cost). That is
/// fine: it is only ever called off the foreground context, and cancellation
/// is polled between pages, never mid-call.
///
/// # Error Handling
///
/// There is no error channel. A page that cannot be searched — corrupt,
/// unparseable, whatever — returns an empty `Vec` and the scan advances past
/// it, the same as a clean miss.
pub trait PageSearchProvider: Send + Sync {
    /// Number of pages in the document. May be zero.
    fn page_count(&self) -> usize;

    /// Find every occurrence of `text` on `page_index`.
    ///
    /// Returns the match boxes in page order, or an empty `Vec` when the page
    /// has no match (or cannot be searched). `page_index` is always in
    /// `0..page_count()`.
    fn search_page(&self, page_index: usize, text: &str) -> Vec<Region>;
}

/// The consumer of coordinator output — progress ticks and terminal outcomes.
///
/// Typically a progress dialog plus a result view, but pagescan has no
/// opinion: anything that wants to observe a scan implements this.
///
/// # Thread Safety
///
/// None required. Every method is invoked from the foreground context (the
/// thread that owns the coordinator and calls
/// [`pump`](crate::SearchCoordinator::pump)), never from the scan worker.
/// `Rc`-based sinks are fine.
///
/// # Call Ordering
///
/// For one scan: zero or more `on_progress` ticks in scan order, at most one
/// `on_search_visible`, then at most one of `on_found` / `on_not_found`.
/// `on_cancelled` replaces the terminal outcome when the scan is stopped or
/// superseded — a cancelled scan never reports found/not-found.
pub trait ProgressSink {
    /// The scan is about to search `page_index`.
    fn on_progress(&mut self, page_index: usize);

    /// The debounce delay elapsed while the scan was still running: show a
    /// progress indicator, starting at `initial_page`.
    ///
    /// Never called for scans that finish inside the delay — fast searches
    /// stay invisible.
    fn on_search_visible(&mut self, initial_page: usize);

    /// A match was found.
    fn on_found(&mut self, result: &SearchResult);

    /// Every reachable page was scanned without a hit.
    ///
    /// `first_search` distinguishes the message to show: `true` means the
    /// query has never matched before ("text not found"), `false` means a
    /// previous scan already found it ("no further occurrences found").
    fn on_not_found(&mut self, first_search: bool);

    /// The scan was stopped or superseded: dismiss any visible indicator.
    /// No message is shown for cancellation.
    fn on_cancelled(&mut self);
}
