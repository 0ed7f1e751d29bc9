//! Event types and next-event selection.
//!
//! Only two event kinds exist and at most one of each is pending, so the
//! "event list" is just two fields on the engine rather than a priority
//! queue.

use std::fmt;

use mm1_core::SimTime;

/// The two kinds of event in an M/M/1 system.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EventKind {
    Arrival,
    Departure,
}

impl EventKind {
    /// Lowercase name used in logs and output files.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Arrival   => "arrival",
            EventKind::Departure => "departure",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pending service completion, if any.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub enum NextDeparture {
    /// Server idle: no departure can happen until the next arrival.
    #[default]
    Idle,
    /// Service in progress, completing at this time.
    At(SimTime),
}

impl NextDeparture {
    pub fn is_idle(self) -> bool {
        matches!(self, NextDeparture::Idle)
    }
}

/// Pick the next event to process.
///
/// An arrival wins only when it is strictly earlier than the scheduled
/// departure; on an exact tie the departure is processed first.
#[inline]
pub fn next_event(next_arrival: SimTime, next_departure: NextDeparture) -> (EventKind, SimTime) {
    match next_departure {
        NextDeparture::Idle => (EventKind::Arrival, next_arrival),
        NextDeparture::At(dep) if next_arrival < dep => (EventKind::Arrival, next_arrival),
        NextDeparture::At(dep) => (EventKind::Departure, dep),
    }
}

/// One entry of the queue-length timeline.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct QueueSample {
    pub time:      SimTime,
    /// Which event produced this entry.
    pub kind:      EventKind,
    /// Customers in the system after the event was applied.
    pub occupancy: u32,
}

/// A processed event as reported to observers.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct EventRecord {
    /// Zero-based position of this event in the run.
    pub seq:       u64,
    pub time:      SimTime,
    pub kind:      EventKind,
    pub occupancy: u32,
    /// Index (arrival order) of the customer that arrived, or of the
    /// customer whose service started at this departure.  `None` for a
    /// departure that leaves the server idle.
    pub customer:  Option<usize>,
}

impl EventRecord {
    pub fn sample(&self) -> QueueSample {
        QueueSample { time: self.time, kind: self.kind, occupancy: self.occupancy }
    }
}
