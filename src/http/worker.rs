use std::sync::Arc;

use reqwest::{Client, Request};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, error, warn};

use crate::assertion::{AssertionChain, AssertionFailure};
use crate::error::AppResult;
use crate::metrics::Summary;
use crate::run::RunConfig;

use super::client::build_client;
use super::request::{build_request_template, clone_request};
use super::response::capture_response;

/// Sends `loop_count` requests one after another over its own client.
/// Reading the body and running assertions for cycle N overlaps with the
/// dispatch of cycle N+1; `run` returns only after every offloaded check
/// has emitted its summary.
///
/// A full result channel blocks only the offloaded checks, so up to `loop`
/// of them may be pending while the send loop keeps dispatching.
pub struct Worker {
    id: usize,
    loop_count: usize,
    print_error: bool,
    client: Client,
    template: Request,
    assertions: Arc<AssertionChain>,
    summary_tx: mpsc::Sender<Summary>,
}

impl Worker {
    /// Builds the worker's client and request template.
    ///
    /// # Errors
    ///
    /// Returns an error when the client or request cannot be built.
    pub fn new(
        id: usize,
        config: &RunConfig,
        assertions: Arc<AssertionChain>,
        summary_tx: mpsc::Sender<Summary>,
    ) -> AppResult<Self> {
        let client = build_client(config)?;
        let template = build_request_template(&client, config)?;
        Ok(Self {
            id,
            loop_count: config.loop_count,
            print_error: config.print_error,
            client,
            template,
            assertions,
            summary_tx,
        })
    }

    /// # Errors
    ///
    /// Returns an error when a request cannot be cloned from the template.
    pub async fn run(self) -> AppResult<()> {
        let mut offloaded = JoinSet::new();
        let mut sent: usize = 0;

        while sent < self.loop_count {
            let request = clone_request(&self.template)?;
            let start = Instant::now();
            let result = self.client.execute(request).await;
            let end = Instant::now();
            sent = sent.saturating_add(1);

            match result {
                Ok(response) => {
                    let check = ResponseCheck {
                        start,
                        end,
                        print_error: self.print_error,
                        assertions: Arc::clone(&self.assertions),
                        summary_tx: self.summary_tx.clone(),
                    };
                    offloaded.spawn(check.run(response));
                }
                Err(err) => {
                    if self.print_error {
                        warn!("Request failed: {}", err);
                    }
                    let summary = Summary::transport_error(start, end, err.to_string());
                    if self.summary_tx.send(summary).await.is_err() {
                        debug!("Worker {}: result channel closed, stopping", self.id);
                        break;
                    }
                }
            }
        }

        while let Some(joined) = offloaded.join_next().await {
            if let Err(err) = joined {
                error!("Worker {}: response check failed: {}", self.id, err);
            }
        }
        debug!("Worker {} finished after {} requests", self.id, sent);
        Ok(())
    }
}

struct ResponseCheck {
    start: Instant,
    end: Instant,
    print_error: bool,
    assertions: Arc<AssertionChain>,
    summary_tx: mpsc::Sender<Summary>,
}

impl ResponseCheck {
    async fn run(self, response: reqwest::Response) {
        let status = response.status().as_u16();
        let summary = match capture_response(response).await {
            Err(err) => {
                if self.print_error {
                    warn!("Failed to read response body: {}", err);
                }
                Summary::failed(self.start, self.end, status, None, err.to_string())
            }
            Ok(captured) => match self.assertions.evaluate(&captured) {
                Ok(()) => Summary::passed(self.start, self.end, status),
                Err(AssertionFailure { name, cause }) => {
                    if self.print_error {
                        warn!("Assertion failed, caused by: {}, {}", name, cause);
                    }
                    Summary::failed(self.start, self.end, status, Some(name.to_owned()), cause)
                }
            },
        };

        if self.summary_tx.send(summary).await.is_err() {
            debug!("Result channel closed; dropping summary");
        }
    }
}
