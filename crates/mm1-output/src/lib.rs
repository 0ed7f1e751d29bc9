//! `mm1-output`: result writers for the mm1 queue simulator.
//!
//! The CSV backend creates three files in the output directory:
//!
//! | File                | Columns                                          |
//! |---------------------|--------------------------------------------------|
//! | `queue_lengths.csv` | `time, kind, occupancy` (one row per event)      |
//! | `samples.csv`       | `metric, index, value`                           |
//! | `summary.csv`       | `metric, count, mean, min, q1, median, q3, max`  |
//!
//! `queue_lengths.csv` is streamed during the run by [`TraceObserver`];
//! the other two are written afterwards by [`write_run`].  Plotting is left
//! to whatever consumes these files.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mm1_output::{CsvWriter, TraceObserver, write_run};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TraceObserver::new(writer);
//! queue.simulate_with(6_000.0, &mut obs)?;
//! if let Some(e) = obs.take_error() { return Err(e.into()); }
//! let mut writer = obs.into_writer();
//! write_run(&mut writer, &queue)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod observer;
pub mod row;
pub mod summary;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use export::{Metric, write_run};
pub use observer::TraceObserver;
pub use row::{EventRow, SummaryRow};
pub use summary::FiveNumber;
pub use writer::OutputWriter;
