use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::app::progress::setup_progress_indicator;
use crate::assertion::AssertionChain;
use crate::error::{AppError, AppResult};
use crate::http::Worker;
use crate::metrics::{Report, StatsListener, Summary, setup_stats_collector};

use super::config::RunConfig;

const RESULT_CHANNEL_CAPACITY: usize = 128;
const PROGRESS_CHANNEL_CAPACITY: usize = 8;

/// Owns a validated configuration and assertion chain and drives one run:
/// `concurrency` workers, one collector, and an optional progress bar.
#[derive(Debug)]
pub struct Plan {
    config: RunConfig,
    assertions: Arc<AssertionChain>,
}

impl Plan {
    #[must_use]
    pub fn new(config: RunConfig, assertions: AssertionChain) -> Self {
        Self {
            config,
            assertions: Arc::new(assertions),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &RunConfig {
        &self.config
    }

    #[must_use]
    pub fn assertions(&self) -> &AssertionChain {
        &self.assertions
    }

    /// Runs to completion. Returns only after every worker, including its
    /// offloaded response checks, and the collector have finished.
    ///
    /// # Errors
    ///
    /// Returns an error when a worker cannot be set up, a worker fails, or a
    /// task panics.
    pub async fn start(&self) -> AppResult<Report> {
        let expected = self.config.total_requests();
        let (summary_tx, summary_rx) = mpsc::channel::<Summary>(RESULT_CHANNEL_CAPACITY);

        let mut workers = Vec::with_capacity(self.config.concurrency);
        for id in 0..self.config.concurrency {
            workers.push(Worker::new(
                id,
                &self.config,
                Arc::clone(&self.assertions),
                summary_tx.clone(),
            )?);
        }
        drop(summary_tx);

        let (progress_tx, progress_handle) = if self.config.disable_bar {
            (None, None)
        } else {
            let (progress_tx, progress_rx) = mpsc::channel::<u64>(PROGRESS_CHANNEL_CAPACITY);
            let handle = setup_progress_indicator(expected, progress_rx, self.config.no_color);
            (Some(progress_tx), Some(handle))
        };

        let mut listener = StatsListener::new(expected, self.config.time_unit);
        listener.on_start();
        let collector = setup_stats_collector(listener, expected, summary_rx, progress_tx);

        let worker_handles: Vec<JoinHandle<AppResult<()>>> = workers
            .into_iter()
            .map(|worker| tokio::spawn(worker.run()))
            .collect();
        debug!(
            "Started {} workers for {} requests",
            worker_handles.len(),
            expected
        );

        let mut first_error: Option<AppError> = None;
        for handle in worker_handles {
            let outcome = match handle.await {
                Ok(result) => result,
                Err(err) => Err(AppError::from(err)),
            };
            if let Err(err) = outcome {
                error!("Worker failed: {}", err);
                first_error.get_or_insert(err);
            }
        }

        let report = collector.await?;
        if let Some(handle) = progress_handle
            && let Err(err) = handle.await
        {
            error!("Progress indicator failed: {}", err);
        }

        first_error.map_or(Ok(report), Err)
    }
}
