//! `TraceObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use log::warn;
use mm1_sim::{EventRecord, SimObserver};

use crate::row::EventRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams every processed event to an
/// [`OutputWriter`] as a queue-length row.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `simulate_with` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TraceObserver<W: OutputWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Rows written successfully so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Unwrap the inner writer, e.g. to append samples after the run.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        match result {
            Ok(()) => self.rows += 1,
            Err(e) => {
                // Keep only the first error.
                if self.last_error.is_none() {
                    warn!("trace write failed: {e}");
                    self.last_error = Some(e);
                }
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for TraceObserver<W> {
    fn on_event(&mut self, event: &EventRecord) {
        let result = self.writer.write_event(&EventRow::from(event));
        self.store_err(result);
    }
}
