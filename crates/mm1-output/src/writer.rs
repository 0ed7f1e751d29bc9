//! The `OutputWriter` trait implemented by backend writers.

use crate::{EventRow, OutputResult, SummaryRow};

/// Sink for one run's results.
///
/// Errors raised while the engine is running are stored by
/// [`TraceObserver`][crate::TraceObserver] and retrieved with `take_error`.
pub trait OutputWriter {
    /// Write one queue-length timeline row.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Write every value of one sample series, indexed from zero.
    fn write_samples(&mut self, metric: &str, values: &[f64]) -> OutputResult<()>;

    /// Write one summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; may be called more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
