use clap::{ArgAction, Parser};
use std::time::Duration;

use super::defaults::DEFAULT_TIME_UNIT;
use super::parsers::{parse_bool_env, parse_duration_arg, parse_positive_usize};
use super::types::{HttpMethod, OutputFormat, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent HTTP load tester: a fixed pool of workers sends a fixed number of requests each, checks every response against optional assertions, and reports latency and throughput.",
    next_help_heading = "Advanced Options"
)]
pub struct TesterArgs {
    /// Target URL for the load test
    #[arg(long, short, help_heading = "Common Options")]
    pub url: Option<String>,

    /// HTTP method to use
    #[arg(
        long,
        short = 'X',
        default_value = "get",
        ignore_case = true,
        help_heading = "Common Options"
    )]
    pub method: HttpMethod,

    /// HTTP headers in 'Key: Value' format (repeatable)
    #[arg(long = "header", short = 'H', help_heading = "Common Options")]
    pub headers: Vec<String>,

    /// Request body
    #[arg(long, short, default_value = "", help_heading = "Common Options")]
    pub body: String,

    /// How many requests each worker sends, one after another
    #[arg(
        long = "loop",
        short = 'l',
        default_value = "1",
        value_parser = parse_positive_usize,
        help_heading = "Common Options"
    )]
    pub loop_count: PositiveUsize,

    /// How many workers run concurrently
    #[arg(
        long,
        short,
        default_value = "1",
        value_parser = parse_positive_usize,
        help_heading = "Common Options"
    )]
    pub concurrency: PositiveUsize,

    /// Per-request timeout (supports ms/s/m/h; 0 uses the 10s default)
    #[arg(
        long,
        short,
        default_value = "10s",
        value_parser = parse_duration_arg,
        help_heading = "Common Options"
    )]
    pub timeout: Duration,

    /// Reuse connections between requests of the same worker
    #[arg(
        long = "keep-alive",
        default_value = "true",
        default_missing_value = "true",
        num_args = 0..=1,
        action = ArgAction::Set,
        value_parser = parse_bool_env
    )]
    pub keep_alive: bool,

    /// Time unit for the report: 'ns', 'mms' (micro-second), 'ms' or 's'
    #[arg(long = "time-unit", default_value = DEFAULT_TIME_UNIT)]
    pub time_unit: String,

    /// Disable the progress bar
    #[arg(long = "disable-bar")]
    pub disable_bar: bool,

    /// Log every transport error and failed assertion
    #[arg(long = "print-error", short = 'e')]
    pub print_error: bool,

    /// Assertion: expected status codes, space-separated (e.g. '200 302')
    #[arg(long = "assert-status-codes", help_heading = "Assertions")]
    pub assert_status_codes: Option<String>,

    /// Assertion: JSONPath expression checked against the response body (e.g. '$.expensive == 10')
    #[arg(long = "assert-json-expression", help_heading = "Assertions")]
    pub assert_json_expression: Option<String>,

    /// Assertion: regex that must match somewhere in the response body
    #[arg(long = "assert-regex-expression", help_heading = "Assertions")]
    pub assert_regex_expression: Option<String>,

    /// Report output format
    #[arg(long = "output-format", default_value = "text", value_enum)]
    pub output_format: OutputFormat,

    /// Path to config file (TOML or JSON)
    #[arg(long)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
