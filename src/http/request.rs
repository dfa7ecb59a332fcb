use http::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Request};

use crate::error::{AppError, AppResult, HttpError};
use crate::run::RunConfig;

/// Splits a `Key: Value` line. Blank lines and blank keys yield `None`;
/// a line without a colon becomes a header with an empty value.
#[must_use]
pub fn parse_header_line(line: &str) -> Option<(String, String)> {
    if line.trim().is_empty() {
        return None;
    }
    let (key, value) = line.split_once(':').unwrap_or((line, ""));
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_owned(), value.trim().to_owned()))
}

/// Turns raw header lines into a header map once, before any request is
/// sent. Repeated keys are appended.
///
/// # Errors
///
/// Returns an error when a header name or value is not valid HTTP.
pub fn build_header_map(lines: &[String]) -> Result<HeaderMap, HttpError> {
    let mut headers = HeaderMap::new();
    for (key, value) in lines.iter().filter_map(|line| parse_header_line(line)) {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|err| {
            HttpError::InvalidHeaderName {
                name: key.clone(),
                source: err,
            }
        })?;
        let value = HeaderValue::from_str(&value).map_err(|err| {
            HttpError::InvalidHeaderValue {
                name: key.clone(),
                source: err,
            }
        })?;
        headers.append(name, value);
    }
    Ok(headers)
}

/// Builds the request every cycle of a worker clones.
///
/// # Errors
///
/// Returns an error when reqwest rejects the request parts.
pub(crate) fn build_request_template(client: &Client, config: &RunConfig) -> AppResult<Request> {
    let mut request_builder = client
        .request(config.method.to_method(), config.url.clone())
        .headers(config.headers.clone());
    if !config.keep_alive {
        request_builder = request_builder.header(http::header::CONNECTION, "close");
    }
    if !config.body.is_empty() {
        request_builder = request_builder.body(config.body.clone());
    }
    request_builder
        .build()
        .map_err(|err| AppError::http(HttpError::BuildRequestFailed { source: err }))
}

/// Clones the template for one cycle.
///
/// # Errors
///
/// Returns an error when the body cannot be cloned.
pub(crate) fn clone_request(template: &Request) -> AppResult<Request> {
    template
        .try_clone()
        .ok_or_else(|| AppError::http(HttpError::CloneRequestFailed))
}
