use tokio::time::Instant;

use crate::error::MetricsError;

use super::report::{LatencyStats, Report, throughput};
use super::summary::{Outcome, Summary};
use super::time_unit::TimeUnit;

/// Accumulates request summaries and turns them into a [`Report`] once the
/// plan is done.
#[derive(Debug)]
pub struct StatsListener {
    time_unit: TimeUnit,
    capacity: usize,
    costs: Vec<u64>,
    success_count: u64,
    failed_count: u64,
    error_count: u64,
    started_at: Option<Instant>,
    report: Option<Report>,
}

impl StatsListener {
    /// `capacity` is the number of summaries expected for the whole run.
    #[must_use]
    pub fn new(capacity: usize, time_unit: TimeUnit) -> Self {
        Self {
            time_unit,
            capacity,
            costs: Vec::with_capacity(capacity),
            success_count: 0,
            failed_count: 0,
            error_count: 0,
            started_at: None,
            report: None,
        }
    }

    /// Marks the beginning of the wall-clock interval used for throughput.
    pub fn on_start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// Counts the summary and stores its latency in the configured unit.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::CapacityExceeded`] when more summaries arrive
    /// than the listener was sized for. The outcome is still counted.
    pub fn on_request_finished(&mut self, summary: &Summary) -> Result<(), MetricsError> {
        match summary.outcome() {
            Outcome::Success => self.success_count = self.success_count.saturating_add(1),
            Outcome::Failed => self.failed_count = self.failed_count.saturating_add(1),
            Outcome::Error => self.error_count = self.error_count.saturating_add(1),
        }

        if self.costs.len() >= self.capacity {
            return Err(MetricsError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.costs.push(self.time_unit.convert(summary.elapsed()));
        Ok(())
    }

    /// Computes the report on the first call; later calls return the same
    /// report.
    pub fn on_plan_finished(&mut self) -> Report {
        if let Some(report) = self.report.as_ref() {
            return report.clone();
        }

        let nature_duration = self
            .started_at
            .map(|started| Instant::now().saturating_duration_since(started))
            .unwrap_or_default();
        let stats = LatencyStats::from_costs(&mut self.costs);
        let total_count = self
            .success_count
            .saturating_add(self.failed_count)
            .saturating_add(self.error_count);

        let report = Report {
            time_unit: self.time_unit,
            total_count,
            success_count: self.success_count,
            failed_count: self.failed_count,
            error_count: self.error_count,
            nature_duration,
            nature_cost: self.time_unit.convert(nature_duration),
            total_cost: stats.total,
            max: stats.max,
            min: stats.min,
            median: stats.median,
            mean: stats.mean,
            std_dev: stats.std_dev,
            throughput: throughput(self.success_count, nature_duration),
        };
        self.report = Some(report.clone());
        report
    }
}
