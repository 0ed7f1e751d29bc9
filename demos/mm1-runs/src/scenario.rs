//! Scenario definitions: built-in defaults or a JSON file.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Component, Path};

use anyhow::{Context, Result, ensure};
use mm1_core::{QueueConfig, QueueError};
use serde::Deserialize;

const SERVICE_MEAN:    f64 = 1.0;
const TOTAL_TIME:      f64 = 6_000.0;
const TIMELINE_WINDOW: f64 = 60.0;

/// One simulation to run.
#[derive(Clone, Debug, Deserialize)]
pub struct Scenario {
    /// Output subdirectory name and report label.
    pub label: String,

    pub queue: QueueConfig,

    #[serde(default = "default_total_time")]
    pub total_time: f64,

    /// Length of the queue-length window reported after the run.
    #[serde(default = "default_timeline_window")]
    pub timeline_window: f64,
}

fn default_total_time() -> f64 {
    TOTAL_TIME
}

fn default_timeline_window() -> f64 {
    TIMELINE_WINDOW
}

impl Scenario {
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.label.is_empty(), "scenario label must not be empty");
        let mut parts = Path::new(&self.label).components();
        ensure!(
            matches!((parts.next(), parts.next()), (Some(Component::Normal(_)), None)),
            "scenario label `{}` must be a plain directory name",
            self.label,
        );
        self.queue.validate()?;
        QueueError::check_positive("total_time", self.total_time)?;
        QueueError::check_positive("timeline_window", self.timeline_window)?;
        Ok(())
    }
}

/// X = 1.1 / 1.5 / 2.0 s against a 1 s server, seeds 42 / 100 / 500.
pub fn builtin() -> Vec<Scenario> {
    [(1.1, 42), (1.5, 100), (2.0, 500)]
        .into_iter()
        .map(|(x, seed)| Scenario {
            label:           format!("x_{x}"),
            queue:           QueueConfig::new(x, SERVICE_MEAN).with_seed(seed),
            total_time:      TOTAL_TIME,
            timeline_window: TIMELINE_WINDOW,
        })
        .collect()
}

/// Read a JSON array of scenarios from a file.
pub fn load(path: &Path) -> Result<Vec<Scenario>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    from_reader(BufReader::new(file)).with_context(|| format!("loading {}", path.display()))
}

/// Parse and validate a JSON array of scenarios.
///
/// Labels name output directories, so each must be unique.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>> {
    let scenarios: Vec<Scenario> = serde_json::from_reader(reader).context("parsing scenarios")?;
    ensure!(!scenarios.is_empty(), "no scenarios given");

    let mut seen = HashSet::new();
    for s in &scenarios {
        s.validate().with_context(|| format!("scenario `{}`", s.label))?;
        ensure!(seen.insert(s.label.as_str()), "duplicate scenario label `{}`", s.label);
    }
    Ok(scenarios)
}
