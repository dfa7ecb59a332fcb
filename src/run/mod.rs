//! Run configuration and the orchestrator that ties workers to the collector.
mod config;
mod plan;


pub use config::{RunConfig, assertions_from_args};
pub use plan::Plan;
