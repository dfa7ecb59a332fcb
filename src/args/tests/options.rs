use super::*;

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = parse_test_args(["volley", "-u", "http://localhost"])?;

    if args.loop_count.get() != 1 {
        return Err(AppError::validation("Expected default loop of 1"));
    }
    if args.concurrency.get() != 1 {
        return Err(AppError::validation("Expected default concurrency of 1"));
    }
    if args.timeout != Duration::from_secs(10) {
        return Err(AppError::validation("Expected default timeout of 10s"));
    }
    if !args.keep_alive {
        return Err(AppError::validation("Expected keep-alive to default on"));
    }
    if args.method != HttpMethod::Get {
        return Err(AppError::validation("Expected GET by default"));
    }
    if args.time_unit != "ms" {
        return Err(AppError::validation(format!(
            "Unexpected time unit: {}",
            args.time_unit
        )));
    }
    if args.disable_bar || args.print_error {
        return Err(AppError::validation("Expected bar enabled and errors quiet"));
    }
    if args.output_format != OutputFormat::Text {
        return Err(AppError::validation("Expected text output by default"));
    }
    Ok(())
}

#[test]
fn parse_args_core_options() -> AppResult<()> {
    let args = parse_test_args([
        "volley",
        "--url",
        "http://localhost:1234/users",
        "--loop",
        "10",
        "-c",
        "100",
        "--timeout",
        "500ms",
        "--keep-alive",
        "false",
        "--method",
        "POST",
        "-H",
        "Content-Type: application/json",
        "-H",
        "X-Empty:",
        "--body",
        "{\"name\":\"x\"}",
        "--time-unit",
        "mms",
        "--disable-bar",
        "-e",
    ])?;

    if args.loop_count.get() != 10 || args.concurrency.get() != 100 {
        return Err(AppError::validation("Unexpected loop/concurrency"));
    }
    if args.timeout != Duration::from_millis(500) {
        return Err(AppError::validation("Unexpected timeout"));
    }
    if args.keep_alive {
        return Err(AppError::validation("Expected keep-alive off"));
    }
    if args.method != HttpMethod::Post {
        return Err(AppError::validation("Expected POST"));
    }
    if args.headers != vec!["Content-Type: application/json", "X-Empty:"] {
        return Err(AppError::validation(format!(
            "Unexpected headers: {:?}",
            args.headers
        )));
    }
    if args.body != "{\"name\":\"x\"}" {
        return Err(AppError::validation("Unexpected body"));
    }
    if args.time_unit != "mms" || !args.disable_bar || !args.print_error {
        return Err(AppError::validation("Unexpected flags"));
    }
    Ok(())
}

#[test]
fn parse_args_keep_alive_without_value() -> AppResult<()> {
    let args = parse_test_args(["volley", "-u", "http://localhost", "--keep-alive"])?;
    if !args.keep_alive {
        return Err(AppError::validation("Expected bare --keep-alive to enable"));
    }
    Ok(())
}

#[test]
fn parse_args_assertions() -> AppResult<()> {
    let args = parse_test_args([
        "volley",
        "-u",
        "http://localhost",
        "--assert-status-codes",
        "200 302",
        "--assert-json-expression",
        "$.expensive == 10",
        "--assert-regex-expression",
        "Moby.*Dick",
    ])?;
    if args.assert_status_codes.as_deref() != Some("200 302") {
        return Err(AppError::validation("Unexpected status codes"));
    }
    if args.assert_json_expression.as_deref() != Some("$.expensive == 10") {
        return Err(AppError::validation("Unexpected json expression"));
    }
    if args.assert_regex_expression.as_deref() != Some("Moby.*Dick") {
        return Err(AppError::validation("Unexpected regex expression"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_concurrency() -> AppResult<()> {
    if parse_test_args(["volley", "-u", "http://localhost", "-c", "0"]).is_ok() {
        return Err(AppError::validation("Expected concurrency 0 to be rejected"));
    }
    if parse_test_args(["volley", "-u", "http://localhost", "--loop", "0"]).is_ok() {
        return Err(AppError::validation("Expected loop 0 to be rejected"));
    }
    Ok(())
}

#[test]
fn parse_args_output_json() -> AppResult<()> {
    let args = parse_test_args([
        "volley",
        "-u",
        "http://localhost",
        "--output-format",
        "json",
    ])?;
    if args.output_format != OutputFormat::Json {
        return Err(AppError::validation("Expected json output"));
    }
    Ok(())
}
