//! The `Mm1Queue` engine and its event loop.

use std::collections::VecDeque;

use log::{debug, trace};
use mm1_core::{ExpSource, QueueConfig, QueueError, SimClock, SimTime, VariateSource};

use crate::event::next_event;
use crate::{EventKind, EventRecord, NextDeparture, NoopObserver, QueueSample, SimObserver, SimResult};

// ── Results ───────────────────────────────────────────────────────────────────

/// Prefix of the queue-length timeline, as two aligned sequences ready for a
/// step plot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueueTimeline {
    pub times:       Vec<f64>,
    pub occupancies: Vec<u32>,
}

impl QueueTimeline {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Counters describing one finished run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// The horizon passed to `simulate`.
    pub total_time:       f64,
    /// Time of the last processed event (≥ `total_time`).
    pub final_time:       SimTime,
    pub arrivals:         u64,
    pub departures:       u64,
    /// Customers still in the system when the loop stopped.
    pub in_system:        u32,
    /// Customers still waiting (not yet in service) at the horizon; their
    /// waiting times are dropped from the results.
    pub unresolved_waits: usize,
}

impl RunSummary {
    /// Total arrivals and departures processed.
    pub fn events(&self) -> u64 {
        self.arrivals + self.departures
    }
}

/// Series collected during a run.  Append-only while the loop runs.
#[derive(Default)]
struct Series {
    arrival_times:       Vec<f64>,
    inter_arrival_times: Vec<f64>,
    service_times:       Vec<f64>,
    /// Per-customer waits in arrival order; `None` until service starts.
    waits:               Vec<Option<f64>>,
    /// `waits` with the unresolved entries removed, filled after the loop.
    waiting_times:       Vec<f64>,
    queue_lengths:       Vec<QueueSample>,
}

// ── Mm1Queue ──────────────────────────────────────────────────────────────────

/// A single-server FIFO queue with exponential inter-arrival and service
/// times, driven by a next-event loop.
///
/// `Mm1Queue<S>` owns its variate source, its clock and every collected
/// series.  Each call to [`simulate`](Self::simulate) starts from a clean
/// [`reset`](Self::reset); nothing carries over between runs.
///
/// Create via [`QueueBuilder`][crate::QueueBuilder].
pub struct Mm1Queue<S: VariateSource = ExpSource> {
    config: QueueConfig,
    source: S,
    clock:  SimClock,

    /// Customers present: waiting plus the one in service.
    occupancy:      u32,
    next_arrival:   SimTime,
    next_departure: NextDeparture,
    last_arrival:   SimTime,

    /// Indices of customers waiting for service, oldest first.
    pending: VecDeque<usize>,

    arrivals:   u64,
    departures: u64,
    series:     Series,
    summary:    Option<RunSummary>,
}

impl<S: VariateSource> Mm1Queue<S> {
    /// The config must already be validated.
    pub(crate) fn new_unchecked(config: QueueConfig, source: S) -> Self {
        let mut queue = Self {
            config,
            source,
            clock:          SimClock::new(),
            occupancy:      0,
            next_arrival:   SimTime::ZERO,
            next_departure: NextDeparture::Idle,
            last_arrival:   SimTime::ZERO,
            pending:        VecDeque::new(),
            arrivals:       0,
            departures:     0,
            series:         Series::default(),
            summary:        None,
        };
        queue.reset();
        queue
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Clear all state for a fresh run and, if a seed is configured, reseed
    /// the variate source.
    pub fn reset(&mut self) {
        self.clock.reset();
        self.occupancy = 0;
        self.next_arrival = SimTime::ZERO;
        self.next_departure = NextDeparture::Idle;
        self.last_arrival = SimTime::ZERO;
        self.pending.clear();
        self.arrivals = 0;
        self.departures = 0;
        self.series = Series::default();
        self.summary = None;
        if let Some(seed) = self.config.seed {
            self.source.seed(seed);
        }
    }

    /// Run until simulated time reaches `total_time` seconds.
    ///
    /// Fails with `InvalidParameter` if `total_time` is not a finite positive
    /// number; the engine is then left exactly as after [`reset`](Self::reset).
    pub fn simulate(&mut self, total_time: f64) -> SimResult<RunSummary> {
        self.simulate_with(total_time, &mut NoopObserver)
    }

    /// [`simulate`](Self::simulate) with observer callbacks.
    pub fn simulate_with<O: SimObserver>(
        &mut self,
        total_time: f64,
        observer:   &mut O,
    ) -> SimResult<RunSummary> {
        self.reset();
        let total_time = QueueError::check_positive("total_time", total_time)?;
        let horizon = SimTime(total_time);

        debug!(
            "simulate: X={} Y={} rho={:.3} seed={:?} horizon={}",
            self.config.mean_inter_arrival,
            self.config.mean_service,
            self.config.utilization(),
            self.config.seed,
            horizon,
        );
        observer.on_sim_start(total_time);

        // The first arrival is measured from time zero.
        self.next_arrival = SimTime::ZERO + self.source.exponential(self.config.mean_inter_arrival);

        // The bound is checked before each event, so the last event applied
        // may lie past the horizon.
        while !self.clock.reached(horizon) {
            let (kind, at) = next_event(self.next_arrival, self.next_departure);
            self.clock.advance_to(at);

            let customer = match kind {
                EventKind::Arrival   => Some(self.process_arrival()),
                EventKind::Departure => self.process_departure(),
            };
            debug_assert_eq!(self.pending.len(), self.occupancy.saturating_sub(1) as usize);

            let record = EventRecord {
                seq: self.arrivals + self.departures - 1,
                time: at,
                kind,
                occupancy: self.occupancy,
                customer,
            };
            self.series.queue_lengths.push(record.sample());
            trace!("{} {} occupancy={}", record.time, record.kind, record.occupancy);
            observer.on_event(&record);
        }

        let summary = self.finish_run(total_time);
        debug!(
            "simulate: done at {}, {} arrivals, {} departures, {} left in system",
            summary.final_time, summary.arrivals, summary.departures, summary.in_system,
        );
        observer.on_sim_end(&summary);
        Ok(summary)
    }

    /// The timeline entries with `time ≤ duration`, in chronological order.
    ///
    /// Scans from the start and stops at the first entry past `duration`.
    pub fn get_queue_timeline(&self, duration: f64) -> QueueTimeline {
        let (times, occupancies) = self
            .series
            .queue_lengths
            .iter()
            .take_while(|s| s.time.secs() <= duration)
            .map(|s| (s.time.secs(), s.occupancy))
            .unzip();
        QueueTimeline { times, occupancies }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Current simulated time (time of the last processed event).
    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    /// Customers currently in the system.
    pub fn occupancy(&self) -> u32 {
        self.occupancy
    }

    /// Arrival time of every customer, in arrival order.
    pub fn arrival_times(&self) -> &[f64] {
        &self.series.arrival_times
    }

    /// Gaps between consecutive arrivals; the synthetic gap before the
    /// first arrival is not included.
    pub fn inter_arrival_times(&self) -> &[f64] {
        &self.series.inter_arrival_times
    }

    /// Service durations in the order service started.
    pub fn service_times(&self) -> &[f64] {
        &self.series.service_times
    }

    /// Waiting time of every customer whose service started before the run
    /// ended, in arrival order.
    pub fn waiting_times(&self) -> &[f64] {
        &self.series.waiting_times
    }

    /// One entry per processed event.
    pub fn queue_lengths(&self) -> &[QueueSample] {
        &self.series.queue_lengths
    }

    /// Summary of the last successful run, `None` after a reset.
    pub fn last_summary(&self) -> Option<&RunSummary> {
        self.summary.as_ref()
    }

    // ── Event handlers ────────────────────────────────────────────────────

    /// Returns the index of the arriving customer.
    fn process_arrival(&mut self) -> usize {
        let now = self.clock.now();
        let customer = self.series.arrival_times.len();

        self.series.arrival_times.push(now.secs());
        self.series.inter_arrival_times.push(now.since(self.last_arrival));
        self.last_arrival = now;
        self.occupancy += 1;
        self.arrivals += 1;

        if self.occupancy == 1 {
            // Idle server: straight into service.
            self.start_service(now);
            self.series.waits.push(Some(0.0));
        } else {
            self.series.waits.push(None);
            self.pending.push_back(customer);
        }

        let gap = self.source.exponential(self.config.mean_inter_arrival);
        self.next_arrival = now + gap;
        customer
    }

    /// Returns the index of the customer entering service, if any.
    fn process_departure(&mut self) -> Option<usize> {
        let now = self.clock.now();
        debug_assert!(self.occupancy > 0, "departure from an empty system");

        self.occupancy -= 1;
        self.departures += 1;

        let next = self.pending.pop_front();
        if let Some(idx) = next {
            let arrived = SimTime(self.series.arrival_times[idx]);
            self.series.waits[idx] = Some(now.since(arrived));
        }

        if self.occupancy > 0 {
            self.start_service(now);
        } else {
            self.next_departure = NextDeparture::Idle;
        }
        next
    }

    fn start_service(&mut self, now: SimTime) {
        let duration = self.source.exponential(self.config.mean_service);
        self.series.service_times.push(duration);
        self.next_departure = NextDeparture::At(now + duration);
    }

    /// Drop the synthetic first gap and unresolved waits; build the summary.
    fn finish_run(&mut self, total_time: f64) -> RunSummary {
        let waits = std::mem::take(&mut self.series.waits);
        self.series.waiting_times = waits.into_iter().flatten().collect();
        if !self.series.inter_arrival_times.is_empty() {
            self.series.inter_arrival_times.remove(0);
        }

        let summary = RunSummary {
            total_time,
            final_time:       self.clock.now(),
            arrivals:         self.arrivals,
            departures:       self.departures,
            in_system:        self.occupancy,
            unresolved_waits: self.pending.len(),
        };
        self.summary = Some(summary);
        summary
    }
}
