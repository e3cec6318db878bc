//! Locate command implementation.

use crate::config::Config;
use crate::report::{LocateFormat, render_location};
use crate::xref::DocumentSet;
use reqtrace_utils::error::ReqTraceError;
use reqtrace_utils::exit_codes::ExitCode;

use super::common::{emit, internal};

pub fn execute_locate_command(
    config: &Config,
    id: &str,
    format: LocateFormat,
) -> Result<ExitCode, ReqTraceError> {
    let requirements = DocumentSet::load_spec_only(&config.spec)?;

    let Some(requirement) = requirements.iter().find(|r| r.id == id) else {
        eprintln!("✗ requirement {id} is not declared in {}", config.spec);
        return Ok(ExitCode::FAILURE);
    };

    let rendered = render_location(id, &requirement.location, format).map_err(internal)?;
    emit(&rendered, None)?;

    Ok(ExitCode::SUCCESS)
}
