use tokio::{sync::mpsc, task::JoinHandle};

use super::{Report, StatsListener, Summary};

/// Spawns the single consumer of the result channel. It reads exactly
/// `expected` summaries (or until every sender is gone), feeds each one to
/// the listener, ticks the progress channel, and resolves to the final
/// report.
#[must_use]
pub fn setup_stats_collector(
    mut listener: StatsListener,
    expected: usize,
    mut summary_rx: mpsc::Receiver<Summary>,
    progress_tx: Option<mpsc::Sender<u64>>,
) -> JoinHandle<Report> {
    tokio::spawn(async move {
        let mut progress_tx = progress_tx;
        let mut observed: usize = 0;

        while observed < expected {
            let Some(summary) = summary_rx.recv().await else {
                tracing::warn!(
                    "Result channel closed after {} of {} summaries",
                    observed,
                    expected
                );
                break;
            };
            observed = observed.saturating_add(1);

            if let Some(tx) = progress_tx.as_ref()
                && tx.send(1).await.is_err()
            {
                tracing::debug!("Progress receiver dropped; no further ticks");
                progress_tx = None;
            }

            if let Some(reason) = summary.failure_reason() {
                tracing::debug!("Request {:?}: {}", summary.outcome(), reason);
            }

            if let Err(err) = listener.on_request_finished(&summary) {
                tracing::error!("Failed to record summary: {}", err);
            }
        }

        drop(progress_tx);
        listener.on_plan_finished()
    })
}
