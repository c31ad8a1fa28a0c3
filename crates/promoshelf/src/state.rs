//! Observable brochure list state.
//!
//! [`ListStateController`] owns a [`ShelfState`] published through a
//! `tokio::sync::watch` channel. User actions mutate the state synchronously.
//! A background refresh task watches the filter and reloads brochures
//! whenever it changes, keeping only the result for the latest filter.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tokio_stream::wrappers::WatchStream;

use promoshelf_core::shelf::{Brochure, FilterCriteria, DEFAULT_DISTANCE_KM};
use promoshelf_core::storage::Result;

use crate::usecase::GetBrochures;

/// Snapshot of everything the brochure list screen renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShelfState {
    pub items: Vec<Brochure>,
    pub filter: FilterCriteria,
    pub panel_visible: bool,
    pub loading: bool,
    pub error: bool,
}

impl ShelfState {
    /// State shown before the first refresh completes.
    pub fn loading(filter: FilterCriteria) -> Self {
        Self {
            items: Vec::new(),
            filter,
            panel_visible: false,
            loading: true,
            error: false,
        }
    }
}

impl Default for ShelfState {
    fn default() -> Self {
        Self::loading(FilterCriteria::default())
    }
}

/// Owns the brochure list state and drives refreshes.
///
/// Every action is fire-and-forget: its effect shows up in the published
/// state, and actions that would not change the state publish nothing.
///
/// Refreshes are latest-wins. When the filter changes while a refresh is in
/// flight, that refresh is cancelled and its result is never published.
///
/// Dropping the controller stops the refresh task.
pub struct ListStateController {
    state_tx: Arc<watch::Sender<ShelfState>>,
    refresh_requested: Arc<Notify>,
    refresh_task: JoinHandle<()>,
}

impl ListStateController {
    /// Creates a controller with the default filter and starts loading.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn new(use_case: GetBrochures) -> Self {
        Self::with_filter(use_case, FilterCriteria::default())
    }

    /// Creates a controller starting from a previously saved filter.
    ///
    /// A saved distance that is not finite falls back to the default.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn with_filter(use_case: GetBrochures, filter: FilterCriteria) -> Self {
        let filter = if filter.distance_km.is_finite() {
            filter
        } else {
            tracing::warn!(distance_km = filter.distance_km, "Ignoring saved distance");
            filter.with_distance(DEFAULT_DISTANCE_KM)
        };
        let (state_tx, _) = watch::channel(ShelfState::loading(filter));
        let state_tx = Arc::new(state_tx);
        let refresh_requested = Arc::new(Notify::new());

        let pipeline = RefreshPipeline {
            use_case,
            state_tx: Arc::clone(&state_tx),
            refresh_requested: Arc::clone(&refresh_requested),
        };
        let refresh_task = tokio::spawn(pipeline.run());

        Self {
            state_tx,
            refresh_requested,
            refresh_task,
        }
    }

    /// Returns a copy of the latest state.
    pub fn state(&self) -> ShelfState {
        self.state_tx.borrow().clone()
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ShelfState> {
        self.state_tx.subscribe()
    }

    /// Returns a stream yielding the current state and then every change.
    pub fn updates(&self) -> WatchStream<ShelfState> {
        WatchStream::new(self.subscribe())
    }

    /// Shows the filter panel.
    pub fn on_filter_panel_open(&self) {
        self.set_panel_visible(true);
    }

    /// Hides the filter panel.
    pub fn on_filter_panel_dismissed(&self) {
        self.set_panel_visible(false);
    }

    /// Applies a new distance, triggering a refresh if it changed.
    ///
    /// Distances that are not finite are ignored.
    pub fn on_filter_applied(&self, distance_km: f64) {
        if !distance_km.is_finite() {
            tracing::debug!(distance_km, "Ignoring distance that is not finite");
            return;
        }
        let filter = self.state_tx.borrow().filter.with_distance(distance_km);
        self.set_filter(filter);
    }

    /// Restores the default filter, triggering a refresh if it changed.
    pub fn on_filter_reset(&self) {
        self.set_filter(FilterCriteria::default());
    }

    /// Reloads the current filter from the remote source, bypassing the cache.
    pub fn on_refresh_requested(&self) {
        self.state_tx.send_modify(|state| state.loading = true);
        self.refresh_requested.notify_one();
    }

    fn set_panel_visible(&self, visible: bool) {
        self.state_tx.send_if_modified(|state| {
            if state.panel_visible == visible {
                return false;
            }
            state.panel_visible = visible;
            true
        });
    }

    fn set_filter(&self, filter: FilterCriteria) {
        self.state_tx.send_if_modified(|state| {
            if state.filter == filter {
                return false;
            }
            tracing::debug!(distance_km = filter.distance_km, "Filter changed");
            state.filter = filter;
            true
        });
    }
}

impl Drop for ListStateController {
    fn drop(&mut self) {
        self.refresh_task.abort();
    }
}

type RefreshFuture = Pin<Box<dyn Future<Output = RefreshOutcome> + Send>>;

/// Result of one refresh, tagged with what it was started for.
struct RefreshOutcome {
    generation: u64,
    filter: FilterCriteria,
    result: Result<Vec<Brochure>>,
}

/// Background task turning filter changes into published refresh results.
struct RefreshPipeline {
    use_case: GetBrochures,
    state_tx: Arc<watch::Sender<ShelfState>>,
    refresh_requested: Arc<Notify>,
}

impl RefreshPipeline {
    async fn run(self) {
        let mut states = self.state_tx.subscribe();
        let mut generation: u64 = 0;
        let mut current_filter = states.borrow_and_update().filter;
        let mut in_flight = Some(self.start(generation, current_filter, false));

        loop {
            tokio::select! {
                biased;

                changed = states.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let filter = states.borrow_and_update().filter;
                    if filter != current_filter {
                        current_filter = filter;
                        generation += 1;
                        if in_flight.is_some() {
                            tracing::debug!(generation, "Cancelling superseded refresh");
                        }
                        // Replacing the future drops, and so cancels, the old one
                        in_flight = Some(self.start(generation, filter, false));
                    }
                }
                () = self.refresh_requested.notified() => {
                    generation += 1;
                    in_flight = Some(self.start(generation, current_filter, true));
                }
                outcome = next_outcome(&mut in_flight) => {
                    in_flight = None;
                    self.publish(outcome, generation);
                }
            }
        }
    }

    fn start(&self, generation: u64, filter: FilterCriteria, force_refresh: bool) -> RefreshFuture {
        tracing::debug!(
            generation,
            distance_km = filter.distance_km,
            force_refresh,
            "Starting brochure refresh"
        );
        let use_case = self.use_case.clone();
        Box::pin(async move {
            let result = use_case.execute(filter.distance_km, force_refresh).await;
            RefreshOutcome {
                generation,
                filter,
                result,
            }
        })
    }

    fn publish(&self, outcome: RefreshOutcome, generation: u64) {
        if outcome.generation != generation {
            tracing::debug!(
                generation = outcome.generation,
                current = generation,
                "Discarding superseded refresh"
            );
            return;
        }
        if let Err(err) = &outcome.result {
            tracing::warn!(
                error = %err,
                distance_km = outcome.filter.distance_km,
                "Brochure refresh failed"
            );
        }

        self.state_tx.send_if_modified(|state| {
            // The filter moved on after this refresh finished; a newer one follows
            if state.filter != outcome.filter {
                return false;
            }
            match outcome.result {
                Ok(items) => {
                    state.items = items;
                    state.error = false;
                }
                Err(_) => {
                    state.error = state.items.is_empty();
                }
            }
            state.loading = false;
            true
        });
    }
}

/// Resolves with the in-flight outcome, or never if nothing is in flight.
async fn next_outcome(in_flight: &mut Option<RefreshFuture>) -> RefreshOutcome {
    match in_flight {
        Some(refresh) => refresh.await,
        None => std::future::pending().await,
    }
}
