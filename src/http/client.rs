use std::time::Duration;

use reqwest::Client;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError};
use crate::run::RunConfig;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(60);
const TCP_KEEPALIVE: Duration = Duration::from_secs(120);
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the HTTP/1.1 client owned by a single worker. With keep-alive
/// off, no connection is ever returned to the pool.
///
/// # Errors
///
/// Returns an error when the client cannot be built.
pub fn build_client(config: &RunConfig) -> AppResult<Client> {
    let timeout = if config.timeout.is_zero() {
        DEFAULT_REQUEST_TIMEOUT
    } else {
        config.timeout
    };

    let mut client_builder = Client::builder()
        .http1_only()
        .user_agent(DEFAULT_USER_AGENT)
        .timeout(timeout)
        .connect_timeout(CONNECT_TIMEOUT);

    if config.keep_alive {
        client_builder = client_builder
            .tcp_keepalive(TCP_KEEPALIVE)
            .pool_idle_timeout(POOL_IDLE_TIMEOUT)
            .pool_max_idle_per_host(config.concurrency);
    } else {
        client_builder = client_builder
            .tcp_keepalive(None)
            .pool_max_idle_per_host(0)
            .pool_idle_timeout(Some(Duration::from_secs(0)));
    }

    client_builder
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}
