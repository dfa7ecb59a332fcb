use tracing::info;

use crate::args::{OutputFormat, TesterArgs};
use crate::error::AppResult;
use crate::metrics::Report;
use crate::run::{Plan, RunConfig, assertions_from_args};

use super::summary::{print_configuration, print_report, print_report_json};

/// Validates the arguments, executes one plan and prints its outcome in the
/// requested format.
///
/// # Errors
///
/// Returns an error when the arguments do not describe a valid run, a worker
/// fails, or the report cannot be printed.
pub async fn run_local(args: &TesterArgs) -> AppResult<Report> {
    let config = RunConfig::from_args(args)?;
    let assertions = assertions_from_args(args)?;
    let plan = Plan::new(config, assertions);

    info!(
        "Starting {} {} with {} workers x {} requests",
        plan.config().method.as_str(),
        plan.config().url,
        plan.config().concurrency,
        plan.config().loop_count
    );
    let report = plan.start().await?;
    info!(
        "Finished {} requests ({} ok, {} failed, {} errors)",
        report.total_count, report.success_count, report.failed_count, report.error_count
    );

    match args.output_format {
        OutputFormat::Text => {
            print_configuration(plan.config(), plan.assertions());
            print_report(&report);
        }
        OutputFormat::Json => print_report_json(&report)?,
    }

    Ok(report)
}
