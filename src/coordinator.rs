use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use log::{debug, trace};

use crate::cancel::{ScanToken, ScanTracker};
use crate::error::PagescanError;
use crate::request::{Direction, Query, SearchRequest};
use crate::result::{Outcome, SearchResult};
use crate::traits::{PageSearchProvider, ProgressSink};

/// How long a scan may run before the progress indicator becomes visible.
/// Scans that finish inside this window never show any UI.
pub const SEARCH_PROGRESS_DELAY: Duration = Duration::from_millis(200);

// ---------------------------------------------------------------------------
// Scan events
// ---------------------------------------------------------------------------

/// What the scan worker sends back to the foreground.
///
/// Every event is stamped with the generation of the scan that produced it.
/// The worker never touches the sink — the foreground is the sole consumer
/// and drops events whose generation no longer matches the active scan.
#[derive(Debug)]
enum ScanEvent {
    /// The worker is about to search this page.
    Progress { generation: u64, page: usize },
    /// The scan terminated. Sent exactly once per worker, after all of its
    /// progress events.
    Finished { generation: u64, outcome: Outcome },
}

/// Foreground bookkeeping for the one in-flight scan.
struct ActiveScan {
    generation: u64,
    /// Whether the current query has never produced a match before.
    first_search: bool,
    /// When the progress indicator becomes visible, if the scan is still
    /// running by then.
    deadline: Instant,
    indicator_fired: bool,
    /// Most recent page the worker reported; the start index until the first
    /// tick arrives. Used as the indicator's initial value.
    last_page: usize,
}

// ---------------------------------------------------------------------------
// SearchCoordinator
// ---------------------------------------------------------------------------

/// Serializes all search activity for one document into a single cancellable
/// page-by-page scan.
///
/// Created via [`pagescan::coordinator()`](crate::coordinator()). The owner
/// drives it from one thread (the "foreground"): [`start_search`] and
/// [`stop`] control the scan, and [`pump`] (or [`pump_until_idle`]) delivers
/// worker output to the [`ProgressSink`].
///
/// At most one scan is ever in flight. Starting a new search cancels the
/// previous one synchronously — the retired worker sees the cancellation
/// before `start_search` returns, though it may still be unwinding (and may
/// finish one already-started page search) while the new scan runs.
///
/// [`start_search`]: SearchCoordinator::start_search
/// [`stop`]: SearchCoordinator::stop
/// [`pump`]: SearchCoordinator::pump
/// [`pump_until_idle`]: SearchCoordinator::pump_until_idle
pub struct SearchCoordinator {
    provider: Arc<dyn PageSearchProvider>,
    sink: Box<dyn ProgressSink>,
    debounce: Duration,
    tracker: ScanTracker,
    events_tx: Sender<ScanEvent>,
    events_rx: Receiver<ScanEvent>,
    active: Option<ActiveScan>,
    /// Query of the most recent successful scan. Drives the
    /// "text not found" vs "no further occurrences" distinction; changing
    /// the query text resets it.
    last_found: Option<Query>,
}

impl SearchCoordinator {
    pub(crate) fn new(
        provider: Arc<dyn PageSearchProvider>,
        sink: Box<dyn ProgressSink>,
        debounce: Duration,
    ) -> Self {
        let (events_tx, events_rx) = crossbeam_channel::unbounded();
        Self {
            provider,
            sink,
            debounce,
            tracker: ScanTracker::default(),
            events_tx,
            events_rx,
            active: None,
            last_found: None,
        }
    }

    // ── Control ───────────────────────────────────────────────────────────

    /// Start a scan for `request`, cancelling any scan already in flight.
    ///
    /// Returns without blocking: the page walk runs on a worker thread and
    /// its output is delivered through the sink on the next [`pump`]. An
    /// empty document is not an error — the scan degrades to an immediate
    /// not-found.
    ///
    /// # Errors
    ///
    /// Only if the worker thread cannot be spawned.
    ///
    /// [`pump`]: SearchCoordinator::pump
    pub fn start_search(&mut self, request: SearchRequest) -> Result<(), PagescanError> {
        self.stop();

        let page_count = self.provider.page_count();
        let start = request.start_index();
        let first_search = self.last_found.as_ref() != Some(&request.query);
        let token = self.tracker.begin();
        let generation = token.generation();

        debug!(
            "scan start: query={:?} direction={:?} start={} pages={}",
            request.query.text(),
            request.direction,
            start,
            page_count,
        );

        let provider = Arc::clone(&self.provider);
        let events = self.events_tx.clone();
        let SearchRequest {
            query, direction, ..
        } = request;

        thread::Builder::new()
            .name(format!("pagescan-scan-{generation}"))
            .spawn(move || scan_pages(provider, query, direction, start, page_count, token, events))
            .map_err(PagescanError::WorkerSpawn)?;

        self.active = Some(ActiveScan {
            generation,
            first_search,
            deadline: Instant::now() + self.debounce,
            indicator_fired: false,
            last_page: start,
        });
        Ok(())
    }

    /// Cancel the in-flight scan, if any. Idempotent.
    ///
    /// The retired scan delivers nothing further: events it already queued
    /// carry a stale generation and are dropped by the pump. If a scan was
    /// actually retired, the sink's `on_cancelled` dismisses any visible
    /// indicator — cancellation shows no message.
    pub fn stop(&mut self) {
        self.tracker.retire();
        if self.active.take().is_some() {
            debug!("scan stopped before completion");
            self.sink.on_cancelled();
        }
    }

    /// Whether a scan is currently in flight (its terminal outcome has not
    /// yet been pumped).
    pub fn is_searching(&self) -> bool {
        self.active.is_some()
    }

    // ── Delivery ──────────────────────────────────────────────────────────

    /// Deliver pending worker output to the sink without blocking.
    ///
    /// Call this from the foreground event loop (per frame, per timer tick,
    /// whatever cadence the UI has). Drains queued events in order, fires the
    /// debounced visibility trigger when its deadline has passed, and returns
    /// whether a scan is still in flight.
    pub fn pump(&mut self) -> bool {
        while let Ok(event) = self.events_rx.try_recv() {
            self.dispatch(event);
        }
        self.fire_indicator_if_due();
        self.active.is_some()
    }

    /// Block until the in-flight scan delivers its terminal outcome.
    ///
    /// Equivalent to pumping in a loop, but waits on the event channel
    /// instead of spinning, waking early for the visibility deadline.
    /// Returns the [`Outcome`] the scan terminated with — everything still
    /// reaches the sink as usual — or `None` when no scan was active.
    /// Intended for headless callers and tests; interactive callers normally
    /// prefer [`pump`].
    ///
    /// [`pump`]: SearchCoordinator::pump
    pub fn pump_until_idle(&mut self) -> Option<Outcome> {
        let mut terminal = None;
        loop {
            while let Ok(event) = self.events_rx.try_recv() {
                if let Some(outcome) = self.dispatch(event) {
                    terminal = Some(outcome);
                }
            }
            self.fire_indicator_if_due();
            let Some(active) = self.active.as_ref() else {
                return terminal;
            };

            let received = if active.indicator_fired {
                self.events_rx.recv().ok()
            } else {
                match self.events_rx.recv_deadline(active.deadline) {
                    Ok(event) => Some(event),
                    // Deadline reached; loop around to fire the indicator.
                    // Disconnect cannot happen — we hold a sender ourselves.
                    Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
                }
            };
            if let Some(event) = received {
                if let Some(outcome) = self.dispatch(event) {
                    terminal = Some(outcome);
                }
            }
        }
    }

    /// Returns the terminal outcome it delivered, if this event was one.
    fn dispatch(&mut self, event: ScanEvent) -> Option<Outcome> {
        let Some(current) = self.active.as_ref().map(|a| a.generation) else {
            // Idle: anything still in the queue belongs to a retired scan.
            return None;
        };
        match event {
            ScanEvent::Progress { generation, page } if generation == current => {
                if let Some(active) = self.active.as_mut() {
                    active.last_page = page;
                }
                self.sink.on_progress(page);
                None
            }
            ScanEvent::Finished {
                generation,
                outcome,
            } if generation == current => {
                let first_search = self
                    .active
                    .take()
                    .map(|a| a.first_search)
                    .unwrap_or(true);
                match outcome {
                    Outcome::Found(result) => {
                        self.last_found = Some(result.query.clone());
                        self.sink.on_found(&result);
                        Some(Outcome::Found(result))
                    }
                    Outcome::NotFound => {
                        self.sink.on_not_found(first_search);
                        Some(Outcome::NotFound)
                    }
                    // A live generation cannot be cancelled: cancellation
                    // always advances the generation first, making this
                    // event stale before it is pumped.
                    Outcome::Cancelled => None,
                }
            }
            // A superseded scan racing to finish anyway.
            _ => {
                trace!("dropping event from retired scan");
                None
            }
        }
    }

    fn fire_indicator_if_due(&mut self) {
        let initial_page = match self.active.as_mut() {
            Some(active) if !active.indicator_fired && Instant::now() >= active.deadline => {
                active.indicator_fired = true;
                active.last_page
            }
            _ => return,
        };
        trace!("progress indicator visible at page {initial_page}");
        self.sink.on_search_visible(initial_page);
    }
}

impl Drop for SearchCoordinator {
    fn drop(&mut self) {
        // Let a still-running worker wind down promptly; its sends onto the
        // dropped channel are discarded.
        self.tracker.retire();
    }
}

// ---------------------------------------------------------------------------
// Scan worker
// ---------------------------------------------------------------------------

/// The page walk. Runs on its own thread, one per scan.
///
/// Polls the token before each page, so a stop or supersede costs at most one
/// already-started provider call. Always sends exactly one `Finished` event,
/// after all of its `Progress` events; send failures (the coordinator was
/// dropped) are ignored.
fn scan_pages(
    provider: Arc<dyn PageSearchProvider>,
    query: Query,
    direction: Direction,
    start: usize,
    page_count: usize,
    token: ScanToken,
    events: Sender<ScanEvent>,
) {
    let generation = token.generation();
    let mut index = start;

    let outcome = loop {
        if index >= page_count {
            break Outcome::NotFound;
        }
        if token.is_cancelled() {
            break Outcome::Cancelled;
        }

        let _ = events.send(ScanEvent::Progress {
            generation,
            page: index,
        });

        let regions = provider.search_page(index, query.text());
        if !regions.is_empty() {
            break Outcome::Found(SearchResult {
                query,
                page_index: index,
                regions,
            });
        }

        match direction.step(index) {
            Some(next) => index = next,
            // Backward scan walked off page 0.
            None => break Outcome::NotFound,
        }
    };

    match &outcome {
        Outcome::Found(result) => debug!("scan found match on page {}", result.page_index),
        Outcome::NotFound => debug!("scan exhausted without match"),
        Outcome::Cancelled => trace!("scan cancelled at page {index}"),
    }

    let _ = events.send(ScanEvent::Finished {
        generation,
        outcome,
    });
}
