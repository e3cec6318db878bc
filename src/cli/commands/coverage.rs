//! Coverage command implementation.

use camino::Utf8Path;
use tracing::debug;

use crate::config::Config;
use crate::report::{ReportFormat, render_coverage};
use crate::xref::DocumentSet;
use reqtrace_utils::error::ReqTraceError;
use reqtrace_utils::exit_codes::ExitCode;

use super::common::{emit, internal};

pub fn execute_coverage_command(
    config: &Config,
    format: ReportFormat,
    output: Option<&Utf8Path>,
) -> Result<ExitCode, ReqTraceError> {
    let docs = DocumentSet::load(&config.spec, &config.tasks)?;
    let report = docs.coverage();
    debug!(
        total = report.total_requirements,
        covered = report.covered_requirements,
        percent = report.coverage_percent,
        "computed coverage"
    );

    let rendered = render_coverage(&report, format).map_err(internal)?;
    emit(&rendered, output)?;

    Ok(ExitCode::SUCCESS)
}
