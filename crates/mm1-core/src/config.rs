//! Queue parameters.

use crate::{QueueError, QueueResult};

/// Parameters of one M/M/1 queue.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// `mm1_sim::QueueBuilder::from_config`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueConfig {
    /// Mean time between arrivals in seconds (X = 1/λ).
    pub mean_inter_arrival: f64,

    /// Mean service time in seconds (Y = 1/μ).
    pub mean_service: f64,

    /// Master RNG seed.  When set, every run reseeds the source so the same
    /// seed always produces identical series.  `None` draws from OS entropy.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
}

impl QueueConfig {
    pub fn new(mean_inter_arrival: f64, mean_service: f64) -> Self {
        Self { mean_inter_arrival, mean_service, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Both means must be finite and strictly positive.
    pub fn validate(&self) -> QueueResult<()> {
        QueueError::check_positive("mean_inter_arrival", self.mean_inter_arrival)?;
        QueueError::check_positive("mean_service", self.mean_service)?;
        Ok(())
    }

    /// λ, customers per second.
    #[inline]
    pub fn arrival_rate(&self) -> f64 {
        1.0 / self.mean_inter_arrival
    }

    /// μ, customers per second while busy.
    #[inline]
    pub fn service_rate(&self) -> f64 {
        1.0 / self.mean_service
    }

    /// ρ = λ/μ.  The queue is stable only when this is below 1.
    #[inline]
    pub fn utilization(&self) -> f64 {
        self.mean_service / self.mean_inter_arrival
    }
}
