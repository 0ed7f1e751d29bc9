//! Simulation observer trait for progress reporting and data collection.

use crate::{EventRecord, RunSummary};

/// Callbacks invoked by [`Mm1Queue::simulate_with`][crate::Mm1Queue::simulate_with]
/// at key points in the event loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: departure counter
///
/// ```rust,ignore
/// struct Departures(u64);
///
/// impl SimObserver for Departures {
///     fn on_event(&mut self, event: &EventRecord) {
///         if event.kind == EventKind::Departure {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once after the reset and parameter check, before the first event.
    fn on_sim_start(&mut self, _total_time: f64) {}

    /// Called after every processed arrival or departure, once the new
    /// occupancy has been recorded.
    fn on_event(&mut self, _event: &EventRecord) {}

    /// Called once after the loop ends and the series are normalized.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call
/// `simulate_with` but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_sim_start(&mut self, total_time: f64) {
        (**self).on_sim_start(total_time)
    }

    fn on_event(&mut self, event: &EventRecord) {
        (**self).on_event(event)
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        (**self).on_sim_end(summary)
    }
}
