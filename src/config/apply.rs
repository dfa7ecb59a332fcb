use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{PositiveUsize, TesterArgs};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Values given explicitly
/// on the command line win over the file.
///
/// # Errors
///
/// Returns an error when config values are invalid.
pub fn apply_config(
    args: &mut TesterArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_cli(matches, "method")
        && let Some(method) = config.method
    {
        args.method = method;
    }

    if !is_cli(matches, "headers")
        && let Some(headers) = config.headers.as_ref()
    {
        args.headers = headers.clone();
    }

    if !is_cli(matches, "body")
        && let Some(body) = config.body.clone()
    {
        args.body = body;
    }

    if !is_cli(matches, "loop_count")
        && let Some(loop_count) = config.loop_count
    {
        args.loop_count = ensure_positive_usize(loop_count, "loop")?;
    }

    if !is_cli(matches, "concurrency")
        && let Some(concurrency) = config.concurrency
    {
        args.concurrency = ensure_positive_usize(concurrency, "concurrency")?;
    }

    if !is_cli(matches, "timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.timeout = timeout.to_duration().map_err(|source| {
            AppError::config(ConfigError::InvalidField {
                field: "timeout",
                source,
            })
        })?;
    }

    if !is_cli(matches, "keep_alive")
        && let Some(keep_alive) = config.keep_alive
    {
        args.keep_alive = keep_alive;
    }

    if !is_cli(matches, "time_unit")
        && let Some(time_unit) = config.time_unit.clone()
    {
        args.time_unit = time_unit;
    }

    if !is_cli(matches, "disable_bar")
        && let Some(disable_bar) = config.disable_bar
    {
        args.disable_bar = disable_bar;
    }

    if !is_cli(matches, "print_error")
        && let Some(print_error) = config.print_error
    {
        args.print_error = print_error;
    }

    if !is_cli(matches, "assert_status_codes")
        && let Some(codes) = config.assert_status_codes.as_ref()
    {
        args.assert_status_codes = Some(codes.to_cli_string());
    }

    if !is_cli(matches, "assert_json_expression")
        && let Some(expression) = config.assert_json_expression.clone()
    {
        args.assert_json_expression = Some(expression);
    }

    if !is_cli(matches, "assert_regex_expression")
        && let Some(expression) = config.assert_regex_expression.clone()
    {
        args.assert_regex_expression = Some(expression);
    }

    if !is_cli(matches, "output_format")
        && let Some(output_format) = config.output_format
    {
        args.output_format = output_format;
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_usize(value: usize, field: &str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}
