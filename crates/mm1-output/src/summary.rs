//! Five-number summaries: the numbers behind a box plot.

/// Count, mean, and the five-number summary of a sample series.
///
/// Quartiles use linear interpolation between closest ranks, i.e. the
/// value at position `q · (n − 1)` of the sorted samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiveNumber {
    pub count:  usize,
    pub mean:   f64,
    pub min:    f64,
    pub q1:     f64,
    pub median: f64,
    pub q3:     f64,
    pub max:    f64,
}

impl FiveNumber {
    /// Summarize `samples`.  Returns `None` for an empty slice.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        Some(Self {
            count:  n,
            mean:   sorted.iter().sum::<f64>() / n as f64,
            min:    sorted[0],
            q1:     quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q3:     quantile_sorted(&sorted, 0.75),
            max:    sorted[n - 1],
        })
    }

    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// `sorted` must be non-empty and ascending.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
