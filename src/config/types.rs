use std::time::Duration;

use serde::Deserialize;

use crate::args::parsers::parse_duration_value;
use crate::args::{HttpMethod, OutputFormat};
use crate::error::ValidationError;

/// Values accepted from `volley.toml` / `volley.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub method: Option<HttpMethod>,
    pub headers: Option<Vec<String>>,
    pub body: Option<String>,
    #[serde(rename = "loop")]
    pub loop_count: Option<usize>,
    pub concurrency: Option<usize>,
    pub timeout: Option<DurationValue>,
    pub keep_alive: Option<bool>,
    pub time_unit: Option<String>,
    pub disable_bar: Option<bool>,
    pub print_error: Option<bool>,
    pub assert_status_codes: Option<StatusCodesValue>,
    pub assert_json_expression: Option<String>,
    pub assert_regex_expression: Option<String>,
    pub output_format: Option<OutputFormat>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration_value(text),
        }
    }
}

/// Status codes may be written as a list (`[200, 302]`) or as the CLI string (`"200 302"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StatusCodesValue {
    List(Vec<u16>),
    Text(String),
}

impl StatusCodesValue {
    pub(crate) fn to_cli_string(&self) -> String {
        match self {
            StatusCodesValue::List(codes) => codes
                .iter()
                .map(u16::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            StatusCodesValue::Text(text) => text.clone(),
        }
    }
}
