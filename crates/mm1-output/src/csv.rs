//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `queue_lengths.csv`
//! - `samples.csv`
//! - `summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, SummaryRow};

/// Writes one run's results to three CSV files.
pub struct CsvWriter {
    events:   Writer<File>,
    samples:  Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    ///
    /// `dir` is created if it does not exist.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut events = Writer::from_path(dir.join("queue_lengths.csv"))?;
        events.write_record(["time", "kind", "occupancy"])?;

        let mut samples = Writer::from_path(dir.join("samples.csv"))?;
        samples.write_record(["metric", "index", "value"])?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record(["metric", "count", "mean", "min", "q1", "median", "q3", "max"])?;

        Ok(Self {
            events,
            samples,
            summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.time.to_string(),
            row.kind.to_string(),
            row.occupancy.to_string(),
        ])?;
        Ok(())
    }

    fn write_samples(&mut self, metric: &str, values: &[f64]) -> OutputResult<()> {
        for (i, v) in values.iter().enumerate() {
            self.samples.write_record(&[metric.to_string(), i.to_string(), v.to_string()])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.metric.clone(),
            row.count.to_string(),
            row.mean.to_string(),
            row.min.to_string(),
            row.q1.to_string(),
            row.median.to_string(),
            row.q3.to_string(),
            row.max.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.samples.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
