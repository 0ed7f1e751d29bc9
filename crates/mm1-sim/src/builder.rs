//! Fluent builder for constructing an [`Mm1Queue`].

use mm1_core::{ExpSource, QueueConfig, VariateSource};

use crate::{Mm1Queue, SimResult};

/// Fluent builder for [`Mm1Queue<S>`].
///
/// # Required inputs
///
/// - mean inter-arrival time X and mean service time Y (or a [`QueueConfig`])
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                            |
/// |-----------------|------------------------------------|
/// | `.seed(s)`      | none, draws are not reproducible   |
/// | `.source(src)`  | `ExpSource` seeded from OS entropy |
///
/// # Example
///
/// ```rust,ignore
/// let mut queue = QueueBuilder::new(1.5, 1.0)
///     .seed(100)
///     .build()?;
/// queue.simulate(6_000.0)?;
/// ```
pub struct QueueBuilder<S: VariateSource = ExpSource> {
    config: QueueConfig,
    source: S,
}

impl QueueBuilder<ExpSource> {
    /// Create a builder from the two means.
    pub fn new(mean_inter_arrival: f64, mean_service: f64) -> Self {
        Self::from_config(QueueConfig::new(mean_inter_arrival, mean_service))
    }

    /// Create a builder from a full configuration (seed included).
    pub fn from_config(config: QueueConfig) -> Self {
        Self { config, source: ExpSource::from_entropy() }
    }
}

impl<S: VariateSource> QueueBuilder<S> {
    /// Reseed the source with `seed` at the start of every run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Replace the variate source, e.g. with a scripted one in tests.
    pub fn source<T: VariateSource>(self, source: T) -> QueueBuilder<T> {
        QueueBuilder { config: self.config, source }
    }

    /// Validate the means and return a ready-to-run [`Mm1Queue`].
    pub fn build(self) -> SimResult<Mm1Queue<S>> {
        self.config.validate()?;
        Ok(Mm1Queue::new_unchecked(self.config, self.source))
    }
}
