use std::sync::Arc;
use std::time::Duration;

use crate::coordinator::{SearchCoordinator, SEARCH_PROGRESS_DELAY};
use crate::error::PagescanError;
use crate::result::SearchResult;
use crate::traits::{PageSearchProvider, ProgressSink};

// ---------------------------------------------------------------------------
// CoordinatorBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring a [`SearchCoordinator`].
///
/// Created via [`pagescan::coordinator()`](crate::coordinator()). Configure
/// with chained builder methods, then call
/// [`build()`](CoordinatorBuilder::build).
///
/// # Example
///
/// ```rust,ignore
/// let mut coordinator = pagescan::coordinator()
///     .provider(my_document)
///     .sink(my_progress_dialog)
///     .debounce(Duration::from_millis(150))
///     .build()?;
/// ```
pub struct CoordinatorBuilder {
    provider: Option<Arc<dyn PageSearchProvider>>,
    sink: Option<Box<dyn ProgressSink>>,
    debounce: Duration,
}

impl Default for CoordinatorBuilder {
    fn default() -> Self {
        Self {
            provider: None,
            sink: None,
            debounce: SEARCH_PROGRESS_DELAY,
        }
    }
}

impl CoordinatorBuilder {
    // ── Provider ──────────────────────────────────────────────────────────

    /// Set the per-page search primitive. Required.
    ///
    /// Any type implementing [`PageSearchProvider`] is accepted — a PDF
    /// engine, an in-memory corpus, anything paginated.
    pub fn provider(mut self, p: impl PageSearchProvider + 'static) -> Self {
        self.provider = Some(Arc::new(p));
        self
    }

    // ── Sink ──────────────────────────────────────────────────────────────

    /// Set the consumer of progress ticks and outcomes.
    ///
    /// Optional — without a sink the coordinator still runs scans, it just
    /// reports to no one. Useful for warming caches or tests that only
    /// observe the provider side.
    pub fn sink(mut self, s: impl ProgressSink + 'static) -> Self {
        self.sink = Some(Box::new(s));
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// How long a scan may run before the progress indicator is shown.
    ///
    /// Defaults to [`SEARCH_PROGRESS_DELAY`] (200 ms). Scans that finish
    /// sooner never trigger any progress UI.
    pub fn debounce(mut self, delay: Duration) -> Self {
        self.debounce = delay;
        self
    }

    // ── Build ─────────────────────────────────────────────────────────────

    /// Validate the configuration and build the coordinator.
    ///
    /// # Errors
    ///
    /// [`PagescanError::NoProvider`] when no provider was set.
    pub fn build(self) -> Result<SearchCoordinator, PagescanError> {
        let provider = self.provider.ok_or(PagescanError::NoProvider)?;
        let sink = self.sink.unwrap_or_else(|| Box::new(NullSink));
        Ok(SearchCoordinator::new(provider, sink, self.debounce))
    }
}

// ---------------------------------------------------------------------------
// Default sink
// ---------------------------------------------------------------------------

/// Discards everything. Used when no sink is configured.
struct NullSink;

impl ProgressSink for NullSink {
    fn on_progress(&mut self, _page_index: usize) {}
    fn on_search_visible(&mut self, _initial_page: usize) {}
    fn on_found(&mut self, _result: &SearchResult) {}
    fn on_not_found(&mut self, _first_search: bool) {}
    fn on_cancelled(&mut self) {}
}
