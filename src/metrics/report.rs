use std::time::Duration;

use serde::Serialize;

use super::time_unit::TimeUnit;

/// Final statistics of a run. Latency figures are expressed in `time_unit`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub time_unit: TimeUnit,
    pub total_count: u64,
    pub success_count: u64,
    pub failed_count: u64,
    pub error_count: u64,
    #[serde(skip)]
    pub nature_duration: Duration,
    /// Wall-clock duration of the run in `time_unit`.
    pub nature_cost: u64,
    pub total_cost: u64,
    pub max: u64,
    pub min: u64,
    pub median: f64,
    pub mean: f64,
    pub std_dev: f64,
    /// Successful requests per second.
    pub throughput: u64,
}

/// Descriptive statistics over a set of latencies.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatencyStats {
    pub total: u64,
    pub min: u64,
    pub max: u64,
    pub median: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl LatencyStats {
    /// Sorts `costs` in place and derives the statistics. An empty slice
    /// yields all zeros.
    #[must_use]
    pub fn from_costs(costs: &mut [u64]) -> Self {
        if costs.is_empty() {
            return Self::default();
        }
        costs.sort_unstable();

        let total = costs
            .iter()
            .fold(0_u64, |acc, cost| acc.saturating_add(*cost));
        let mean = mean_of(total, costs.len());

        Self {
            total,
            min: costs.first().copied().unwrap_or(0),
            max: costs.last().copied().unwrap_or(0),
            median: median_of_sorted(costs),
            mean,
            std_dev: population_std_dev(costs, mean),
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "mean is reported with fractional precision"
)]
fn mean_of(total: u64, count: usize) -> f64 {
    total as f64 / count as f64
}

#[expect(
    clippy::float_arithmetic,
    reason = "median of an even set is the mean of the two middle values"
)]
fn median_of_sorted(sorted: &[u64]) -> f64 {
    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        return sorted.get(middle).copied().unwrap_or(0) as f64;
    }
    let upper = sorted.get(middle).copied().unwrap_or(0) as f64;
    let lower = middle
        .checked_sub(1)
        .and_then(|index| sorted.get(index))
        .copied()
        .unwrap_or(0) as f64;
    (lower + upper) / 2.0
}

#[expect(
    clippy::float_arithmetic,
    reason = "standard deviation is defined over real numbers"
)]
fn population_std_dev(costs: &[u64], mean: f64) -> f64 {
    if costs.is_empty() {
        return 0.0;
    }
    let sum_of_squares: f64 = costs
        .iter()
        .map(|cost| {
            let delta = *cost as f64 - mean;
            delta * delta
        })
        .sum();
    (sum_of_squares / costs.len() as f64).sqrt()
}

/// Successful requests per second over the wall-clock duration, truncated.
/// Zero when no time elapsed.
#[must_use]
pub fn throughput(success_count: u64, nature_duration: Duration) -> u64 {
    let nanos = nature_duration.as_nanos();
    if nanos == 0 {
        return 0;
    }
    let per_second = u128::from(success_count)
        .saturating_mul(1_000_000_000)
        .checked_div(nanos)
        .unwrap_or(0);
    u64::try_from(per_second).unwrap_or(u64::MAX)
}
