//! Core library for the `volley` CLI.
//!
//! A run is described by [`run::RunConfig`] and an [`assertion::AssertionChain`],
//! executed by [`run::Plan`] with one [`http::Worker`] per unit of concurrency,
//! and summarized by [`metrics::StatsListener`] into a [`metrics::Report`].
//! The primary user-facing interface is the `volley` command-line application.
pub mod app;
pub mod args;
pub mod assertion;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod run;
