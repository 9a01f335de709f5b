//! # pagescan
//!
//! Cancellable page-by-page document search coordinator — generic,
//! embeddable, zero opinions.
//!
//! pagescan owns the scan lifecycle: one in-flight scan at a time, cooperative
//! cancellation, directional resumption ("find next" continues past the last
//! match instead of restarting), and a debounced progress indicator that
//! never flickers for fast searches. It does **not** own text matching inside
//! a page or any UI — those arrive through the two contracts
//! ([`PageSearchProvider`], [`ProgressSink`]) and belong to the caller.
//!
//! The provider runs on a worker thread (page decode may be slow); the sink
//! is only ever called from the thread that owns the coordinator, so it needs
//! no thread-safety at all.
//!
//! # Quick Start
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use pagescan::{
//!     Direction, PageSearchProvider, ProgressSink, Query, Region, SearchRequest, SearchResult,
//! };
//!
//! // A three-page document with "needle" on page 2.
//! struct Doc;
//!
//! impl PageSearchProvider for Doc {
//!     fn page_count(&self) -> usize {
//!         3
//!     }
//!     fn search_page(&self, page_index: usize, text: &str) -> Vec<Region> {
//!         if page_index == 2 && text == "needle" {
//!             vec![Region::new(10.0, 20.0, 80.0, 32.0)]
//!         } else {
//!             Vec::new()
//!         }
//!     }
//! }
//!
//! // Sinks need no Send/Sync — Rc is fine.
//! struct FoundAt(Rc<Cell<Option<usize>>>);
//!
//! impl ProgressSink for FoundAt {
//!     fn on_progress(&mut self, _page_index: usize) {}
//!     fn on_search_visible(&mut self, _initial_page: usize) {}
//!     fn on_found(&mut self, result: &SearchResult) {
//!         self.0.set(Some(result.page_index));
//!     }
//!     fn on_not_found(&mut self, _first_search: bool) {}
//!     fn on_cancelled(&mut self) {}
//! }
//!
//! let found_at = Rc::new(Cell::new(None));
//! let mut coordinator = pagescan::coordinator()
//!     .provider(Doc)
//!     .sink(FoundAt(Rc::clone(&found_at)))
//!     .build()
//!     .unwrap();
//!
//! coordinator
//!     .start_search(SearchRequest::new(Query::new("needle"), Direction::Forward, 0))
//!     .unwrap();
//! let outcome = coordinator.pump_until_idle();
//!
//! assert!(matches!(outcome, Some(pagescan::Outcome::Found(_))));
//! assert_eq!(found_at.get(), Some(2));
//! ```
//!
//! # Continuation and cancellation
//!
//! "Find next" resumes one page past the previous match:
//!
//! ```rust,ignore
//! let next = SearchRequest::new(query, Direction::Forward, display_page)
//!     .resume_from(Direction::Forward.step(found_page).unwrap());
//! coordinator.start_search(next)?;
//! ```
//!
//! Calling [`SearchCoordinator::start_search`] while a scan runs cancels it
//! first — the retired scan delivers nothing, not even an outcome it had
//! already computed. [`SearchCoordinator::stop`] does the same without
//! starting a replacement.

#![forbid(unsafe_code)]

mod builder;
mod cancel;
mod click;
mod coordinator;
mod error;
mod request;
mod result;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::CoordinatorBuilder;
pub use click::ClickResult;
pub use coordinator::{SearchCoordinator, SEARCH_PROGRESS_DELAY};
pub use error::PagescanError;
pub use request::{Direction, Query, SearchRequest};
pub use result::{Outcome, Region, SearchResult};
pub use traits::{PageSearchProvider, ProgressSink};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`CoordinatorBuilder`] to configure a search coordinator.
///
/// # Example
///
/// ```rust
/// use pagescan::{PageSearchProvider, Region};
///
/// struct EmptyDoc;
///
/// impl PageSearchProvider for EmptyDoc {
///     fn page_count(&self) -> usize {
///         0
///     }
///     fn search_page(&self, _page_index: usize, _text: &str) -> Vec<Region> {
///         Vec::new()
///     }
/// }
///
/// let coordinator = pagescan::coordinator().provider(EmptyDoc).build().unwrap();
/// assert!(!coordinator.is_searching());
/// ```
pub fn coordinator() -> CoordinatorBuilder {
    CoordinatorBuilder::default()
}
