//! Plain data row types written by output backends.

use mm1_sim::EventRecord;

/// One queue-length timeline entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRow {
    pub time:      f64,
    /// `"arrival"` or `"departure"`.
    pub kind:      &'static str,
    pub occupancy: u32,
}

impl From<&EventRecord> for EventRow {
    fn from(e: &EventRecord) -> Self {
        Self { time: e.time.secs(), kind: e.kind.as_str(), occupancy: e.occupancy }
    }
}

/// Box-plot statistics for one sample series.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub metric: String,
    pub count:  usize,
    pub mean:   f64,
    pub min:    f64,
    pub q1:     f64,
    pub median: f64,
    pub q3:     f64,
    pub max:    f64,
}
