//! Per-request summaries, latency statistics, and the collector task.
mod collector;
mod listener;
mod report;
mod summary;
mod time_unit;


pub use collector::setup_stats_collector;
pub use listener::StatsListener;
pub use report::{LatencyStats, Report, throughput};
pub use summary::{Outcome, Summary};
pub use time_unit::TimeUnit;
