//! HTTP client setup, request templates, and the per-worker send loop.
mod client;
mod request;
mod response;
mod worker;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::build_client;
pub use request::{build_header_map, parse_header_line};
pub use response::HttpResponse;
pub use worker::Worker;
