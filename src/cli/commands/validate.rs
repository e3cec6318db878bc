//! Validate command implementation.
//!
//! Exit status contract: 0 when there are no issues (or only warnings
//! outside strict mode), 1 when any ERROR-severity issue exists, 2 when an
//! input file cannot be read (raised before this handler renders anything).

use tracing::debug;

use crate::config::Config;
use crate::report::{ReportFormat, render_issues};
use crate::xref::DocumentSet;
use reqtrace_utils::error::ReqTraceError;
use reqtrace_utils::exit_codes::ExitCode;
use reqtrace_utils::types::Severity;

use super::common::{emit, internal};

pub fn execute_validate_command(
    config: &Config,
    format: ReportFormat,
) -> Result<ExitCode, ReqTraceError> {
    let docs = DocumentSet::load(&config.spec, &config.tasks)?;
    let issues = docs.validate(config.strict);
    debug!(count = issues.len(), strict = config.strict, "validation finished");

    let rendered = render_issues(&issues, format).map_err(internal)?;
    emit(&rendered, None)?;

    let has_errors = issues.iter().any(|i| i.severity == Severity::Error);
    Ok(if has_errors {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
