//! Integration tests for mm1-output.

use mm1_sim::{Mm1Queue, QueueBuilder};

use crate::row::{EventRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// In-memory writer for checking what gets written.
#[derive(Default)]
struct MemWriter {
    events:   Vec<EventRow>,
    samples:  Vec<(String, Vec<f64>)>,
    summary:  Vec<SummaryRow>,
    finished: usize,
}

impl OutputWriter for MemWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.push(*row);
        Ok(())
    }

    fn write_samples(&mut self, metric: &str, values: &[f64]) -> OutputResult<()> {
        self.samples.push((metric.to_owned(), values.to_vec()));
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary.push(row.clone());
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.finished += 1;
        Ok(())
    }
}

fn seeded_run(total_time: f64) -> Mm1Queue {
    let mut queue = QueueBuilder::new(1.1, 1.0).seed(42).build().unwrap();
    queue.simulate(total_time).unwrap();
    queue
}

#[cfg(test)]
mod summary_tests {
    use crate::FiveNumber;

    #[test]
    fn empty_is_none() {
        assert!(FiveNumber::from_samples(&[]).is_none());
    }

    #[test]
    fn single_value() {
        let s = FiveNumber::from_samples(&[3.0]).unwrap();
        assert_eq!((s.count, s.min, s.q1, s.median, s.q3, s.max), (1, 3.0, 3.0, 3.0, 3.0, 3.0));
        assert_eq!(s.mean, 3.0);
        assert_eq!(s.iqr(), 0.0);
    }

    #[test]
    fn interpolated_quartiles() {
        // Unsorted input; sorted = [1, 2, 3, 4, 5].
        let s = FiveNumber::from_samples(&[5.0, 1.0, 4.0, 2.0, 3.0]).unwrap();
        assert_eq!(s.min, 1.0);
        assert_eq!(s.q1, 2.0);
        assert_eq!(s.median, 3.0);
        assert_eq!(s.q3, 4.0);
        assert_eq!(s.max, 5.0);
        assert_eq!(s.mean, 3.0);

        // Even count: positions 0.75, 1.5, 2.25 of [1, 2, 3, 4].
        let s = FiveNumber::from_samples(&[4.0, 3.0, 2.0, 1.0]).unwrap();
        assert_eq!(s.q1, 1.75);
        assert_eq!(s.median, 2.5);
        assert_eq!(s.q3, 3.25);
    }
}

#[cfg(test)]
mod export_tests {
    use super::*;
    use crate::{Metric, write_run};

    #[test]
    fn metric_names() {
        let names: Vec<_> = Metric::ALL.iter().map(|m| m.to_string()).collect();
        assert_eq!(names, ["waiting_time", "inter_arrival_time", "service_time"]);
    }

    #[test]
    fn summarize_empty_errors() {
        match Metric::ServiceTime.summarize(&[]) {
            Err(OutputError::EmptySeries(name)) => assert_eq!(name, "service_time"),
            other => panic!("expected EmptySeries, got {other:?}"),
        }
    }

    #[test]
    fn write_run_writes_all_series() {
        let queue = seeded_run(500.0);
        let mut w = MemWriter::default();
        let rows = write_run(&mut w, &queue).unwrap();

        assert_eq!(w.samples.len(), 3);
        assert_eq!(w.samples[0], ("waiting_time".to_owned(), queue.waiting_times().to_vec()));
        assert_eq!(w.samples[1].1, queue.inter_arrival_times());
        assert_eq!(w.samples[2].1, queue.service_times());

        assert_eq!(rows.len(), 3);
        assert_eq!(rows, w.summary);
        assert_eq!(rows[0].count, queue.waiting_times().len());
        assert!(rows.iter().all(|r| r.min <= r.q1 && r.q1 <= r.median && r.median <= r.q3 && r.q3 <= r.max));
        assert_eq!(w.finished, 0, "write_run must not finish the writer");
    }

    #[test]
    fn write_run_skips_summary_for_empty_series() {
        // The first arrival almost surely lands past a tiny horizon: one
        // customer, no real inter-arrival gap.
        let queue = seeded_run(1e-9);
        assert!(queue.inter_arrival_times().is_empty());

        let mut w = MemWriter::default();
        let rows = write_run(&mut w, &queue).unwrap();
        assert_eq!(w.samples.len(), 3);
        assert!(rows.iter().all(|r| r.metric != "inter_arrival_time"));
        assert_eq!(rows.len(), 2);
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;

    use super::*;
    use crate::TraceObserver;

    #[test]
    fn trace_rows_match_timeline() {
        let mut queue = QueueBuilder::new(1.5, 1.0).seed(100).build().unwrap();
        let mut obs = TraceObserver::new(MemWriter::default());
        let summary = queue.simulate_with(300.0, &mut obs).unwrap();

        assert!(obs.take_error().is_none());
        assert_eq!(obs.rows_written(), summary.events());
        let w = obs.into_writer();
        let expected: Vec<_> = queue
            .queue_lengths()
            .iter()
            .map(|s| (s.time.secs(), s.kind.as_str(), s.occupancy))
            .collect();
        let got: Vec<_> = w.events.iter().map(|r| (r.time, r.kind, r.occupancy)).collect();
        assert_eq!(got, expected);
    }

    struct FailingWriter;

    impl OutputWriter for FailingWriter {
        fn write_event(&mut self, _row: &EventRow) -> OutputResult<()> {
            Err(io::Error::other("disk full").into())
        }

        fn write_samples(&mut self, _m: &str, _v: &[f64]) -> OutputResult<()> {
            Ok(())
        }

        fn write_summary(&mut self, _r: &SummaryRow) -> OutputResult<()> {
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_error_kept_and_run_completes() {
        let mut queue = QueueBuilder::new(1.5, 1.0).seed(100).build().unwrap();
        let mut obs = TraceObserver::new(FailingWriter);
        let summary = queue.simulate_with(50.0, &mut obs).unwrap();

        assert!(summary.events() > 0);
        assert_eq!(obs.rows_written(), 0);
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none(), "error is taken once");
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::{TraceObserver, write_run};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("queue_lengths.csv").exists());
        assert!(dir.path().join("samples.csv").exists());
        assert!(dir.path().join("summary.csv").exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("x_1.1");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("samples.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(&dir.path().join("queue_lengths.csv")), ["time", "kind", "occupancy"]);
        assert_eq!(headers(&dir.path().join("samples.csv")), ["metric", "index", "value"]);
        assert_eq!(
            headers(&dir.path().join("summary.csv")),
            ["metric", "count", "mean", "min", "q1", "median", "q3", "max"]
        );
    }

    #[test]
    fn csv_event_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_event(&EventRow { time: 1.5, kind: "arrival", occupancy: 1 }).unwrap();
        w.write_event(&EventRow { time: 2.25, kind: "departure", occupancy: 0 }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("queue_lengths.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "1.5");
        assert_eq!(&rows[0][1], "arrival");
        assert_eq!(&rows[0][2], "1");
        assert_eq!(&rows[1][1], "departure");
        assert_eq!(&rows[1][2], "0");
    }

    #[test]
    fn csv_sample_rows_indexed_per_metric() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_samples("waiting_time", &[0.0, 2.5]).unwrap();
        w.write_samples("service_time", &[1.25]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("samples.csv")).unwrap();
        let rows: Vec<Vec<String>> = rdr
            .records()
            .map(|r| r.unwrap().iter().map(str::to_owned).collect())
            .collect();
        assert_eq!(
            rows,
            vec![
                vec!["waiting_time", "0", "0"],
                vec!["waiting_time", "1", "2.5"],
                vec!["service_time", "0", "1.25"],
            ]
        );
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn integration_csv() {
        let dir = tmp();
        let mut queue = QueueBuilder::new(1.1, 1.0).seed(42).build().unwrap();
        let mut obs = TraceObserver::new(CsvWriter::new(dir.path()).unwrap());
        let summary = queue.simulate_with(600.0, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut w = obs.into_writer();
        write_run(&mut w, &queue).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("queue_lengths.csv")).unwrap();
        assert_eq!(rdr.records().count() as u64, summary.events());

        let expected_samples = queue.waiting_times().len()
            + queue.inter_arrival_times().len()
            + queue.service_times().len();
        let mut rdr = csv::Reader::from_path(dir.path().join("samples.csv")).unwrap();
        assert_eq!(rdr.records().count(), expected_samples);

        let mut rdr = csv::Reader::from_path(dir.path().join("summary.csv")).unwrap();
        let metrics: Vec<String> = rdr.records().map(|r| r.unwrap()[0].to_owned()).collect();
        assert_eq!(metrics, ["waiting_time", "inter_arrival_time", "service_time"]);
    }
}
