//! Tasks command implementation.

use crate::config::Config;
use crate::report::{ReportFormat, render_tasks};
use crate::xref::DocumentSet;
use reqtrace_utils::error::ReqTraceError;
use reqtrace_utils::exit_codes::ExitCode;

use super::common::{emit, internal};

pub fn execute_tasks_command(
    config: &Config,
    id: &str,
    format: ReportFormat,
) -> Result<ExitCode, ReqTraceError> {
    let docs = DocumentSet::load(&config.spec, &config.tasks)?;
    let tasks = docs.tasks_for(id);

    if tasks.is_empty() && !matches!(format, ReportFormat::Json) {
        println!("no tasks reference {id}");
        return Ok(ExitCode::SUCCESS);
    }

    let rendered = render_tasks(&tasks, format).map_err(internal)?;
    emit(&rendered, None)?;

    Ok(ExitCode::SUCCESS)
}
