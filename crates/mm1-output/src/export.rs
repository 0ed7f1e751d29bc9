//! Post-run export of the three sample series.

use std::fmt;

use log::debug;
use mm1_core::VariateSource;
use mm1_sim::Mm1Queue;

use crate::writer::OutputWriter;
use crate::{FiveNumber, OutputError, OutputResult, SummaryRow};

/// The per-customer series a run produces.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Metric {
    WaitingTime,
    InterArrivalTime,
    ServiceTime,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::WaitingTime, Metric::InterArrivalTime, Metric::ServiceTime];

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::WaitingTime      => "waiting_time",
            Metric::InterArrivalTime => "inter_arrival_time",
            Metric::ServiceTime      => "service_time",
        }
    }

    /// The series for this metric from a finished run.
    pub fn values<S: VariateSource>(self, queue: &Mm1Queue<S>) -> &[f64] {
        match self {
            Metric::WaitingTime      => queue.waiting_times(),
            Metric::InterArrivalTime => queue.inter_arrival_times(),
            Metric::ServiceTime      => queue.service_times(),
        }
    }

    /// Summary row for `values`; fails on an empty series.
    pub fn summarize(self, values: &[f64]) -> OutputResult<SummaryRow> {
        let s = FiveNumber::from_samples(values).ok_or(OutputError::EmptySeries(self.as_str()))?;
        Ok(SummaryRow {
            metric: self.as_str().to_owned(),
            count:  s.count,
            mean:   s.mean,
            min:    s.min,
            q1:     s.q1,
            median: s.median,
            q3:     s.q3,
            max:    s.max,
        })
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Write every sample of every metric plus one summary row per non-empty
/// series.  Returns the summary rows written.
///
/// Does not call [`OutputWriter::finish`].
pub fn write_run<W, S>(writer: &mut W, queue: &Mm1Queue<S>) -> OutputResult<Vec<SummaryRow>>
where
    W: OutputWriter,
    S: VariateSource,
{
    let mut rows = Vec::with_capacity(Metric::ALL.len());
    for metric in Metric::ALL {
        let values = metric.values(queue);
        writer.write_samples(metric.as_str(), values)?;
        if values.is_empty() {
            debug!("write_run: {metric} is empty, no summary row");
            continue;
        }
        let row = metric.summarize(values)?;
        writer.write_summary(&row)?;
        rows.push(row);
    }
    Ok(rows)
}
