//! Helpers shared by the command handlers.

use camino::Utf8Path;

use reqtrace_utils::atomic_write::write_atomic;
use reqtrace_utils::error::ReqTraceError;

/// Send rendered output to stdout or a file, with a guaranteed trailing
/// newline either way.
pub(super) fn emit(rendered: &str, output: Option<&Utf8Path>) -> Result<(), ReqTraceError> {
    let mut text = rendered.to_string();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    match output {
        Some(path) => write_atomic(path, &text).map_err(internal)?,
        None => print!("{text}"),
    }
    Ok(())
}

/// Wrap a rendering/serialization failure as an internal error (exit 1).
pub(super) fn internal(err: anyhow::Error) -> ReqTraceError {
    ReqTraceError::Io(std::io::Error::other(err.to_string()))
}
