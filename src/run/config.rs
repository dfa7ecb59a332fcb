use std::time::Duration;

use http::HeaderMap;
use url::Url;

use crate::args::{HttpMethod, TesterArgs};
use crate::assertion::AssertionChain;
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::build_header_map;
use crate::metrics::TimeUnit;

/// Fully validated settings shared read-only by every worker.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub url: Url,
    pub method: HttpMethod,
    /// Raw `Key: Value` lines as given, kept for the configuration echo.
    pub header_lines: Vec<String>,
    pub headers: HeaderMap,
    pub body: String,
    pub loop_count: usize,
    pub concurrency: usize,
    pub timeout: Duration,
    pub keep_alive: bool,
    pub time_unit: TimeUnit,
    pub disable_bar: bool,
    pub print_error: bool,
    pub no_color: bool,
    total_requests: usize,
}

impl RunConfig {
    /// # Errors
    ///
    /// Returns an error when the URL is missing or invalid, a header cannot
    /// be encoded, or `concurrency x loop` overflows.
    pub fn from_args(args: &TesterArgs) -> AppResult<Self> {
        let url = parse_target_url(args.url.as_deref())?;
        let headers = build_header_map(&args.headers)?;
        let loop_count = args.loop_count.get();
        let concurrency = args.concurrency.get();
        let total_requests = concurrency.checked_mul(loop_count).ok_or_else(|| {
            AppError::validation(ValidationError::TotalRequestsOverflow {
                concurrency,
                loop_count,
            })
        })?;

        Ok(Self {
            url,
            method: args.method,
            header_lines: args.headers.clone(),
            headers,
            body: args.body.clone(),
            loop_count,
            concurrency,
            timeout: args.timeout,
            keep_alive: args.keep_alive,
            time_unit: TimeUnit::from_label_or_default(&args.time_unit),
            disable_bar: args.disable_bar,
            print_error: args.print_error,
            no_color: args.no_color,
            total_requests,
        })
    }

    /// `concurrency x loop`: the exact number of summaries a run produces.
    #[must_use]
    pub const fn total_requests(&self) -> usize {
        self.total_requests
    }
}

/// Builds and validates the assertion chain from the `assert-*` options.
///
/// # Errors
///
/// Returns an error when any configured assertion is invalid.
pub fn assertions_from_args(args: &TesterArgs) -> AppResult<AssertionChain> {
    Ok(AssertionChain::from_options(
        args.assert_status_codes.as_deref(),
        args.assert_json_expression.as_deref(),
        args.assert_regex_expression.as_deref(),
    )?)
}

fn parse_target_url(raw: Option<&str>) -> AppResult<Url> {
    let raw = raw
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;
    let url = Url::parse(raw).map_err(|err| {
        AppError::validation(ValidationError::InvalidUrl {
            url: raw.to_owned(),
            source: err,
        })
    })?;
    if url.host_str().is_none() {
        return Err(AppError::validation(ValidationError::UrlMissingHost));
    }
    Ok(url)
}
