use crate::assertion::AssertionChain;
use crate::error::AppResult;
use crate::metrics::Report;
use crate::run::RunConfig;

pub(crate) fn configuration_lines(config: &RunConfig, assertions: &AssertionChain) -> Vec<String> {
    let names = assertions.names();
    vec![
        "-- Configuration --".to_owned(),
        format!(
            "Concurrency: {}\tLoop: {}\tTimeout: {} ms\tKeepAlive: {}\tTimeUnit: {}\tMethod: {}\tURL: {}",
            config.concurrency,
            config.loop_count,
            config.timeout.as_millis(),
            config.keep_alive,
            config.time_unit,
            config.method.as_str(),
            config.url
        ),
        format!("Headers: [{}]", config.header_lines.join(", ")),
        format!("Body: {}", config.body),
        if names.is_empty() {
            "Assertions: none".to_owned()
        } else {
            format!("Assertions: {}", names.join(", "))
        },
        String::new(),
    ]
}

pub(crate) fn report_lines(report: &Report) -> Vec<String> {
    let unit = report.time_unit;
    vec![
        "-- Conclusion --".to_owned(),
        format!("total count: {}", report.total_count),
        format!("success count: {}", report.success_count),
        format!("failed count: {}", report.failed_count),
        format!("error count: {}", report.error_count),
        format!("nature duration: {} {}", report.nature_cost, unit),
        format!("total cost: {} {}", report.total_cost, unit),
        format!("max: {} {}", report.max, unit),
        format!("min: {} {}", report.min, unit),
        format!("median: {} {}", report.median.trunc(), unit),
        format!("mean: {} {}", report.mean.trunc(), unit),
        format!("standard deviation: {:.6}", report.std_dev),
        format!("throughput: {} requests/second", report.throughput),
    ]
}

pub(crate) fn print_configuration(config: &RunConfig, assertions: &AssertionChain) {
    for line in configuration_lines(config, assertions) {
        println!("{}", line);
    }
}

pub(crate) fn print_report(report: &Report) {
    for line in report_lines(report) {
        println!("{}", line);
    }
}

/// # Errors
///
/// Returns an error when the report cannot be serialized.
pub(crate) fn print_report_json(report: &Report) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
