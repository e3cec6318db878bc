//! Configuration model and discovery.
//!
//! Effective values are resolved with precedence: CLI flags > config file >
//! built-in defaults. The config file is `.reqtrace/config.toml`, discovered
//! by searching upward from the working directory; `--config` short-circuits
//! discovery. Operand paths are always explicit parameters — nothing in the
//! library layer reads process state to decide which files to operate on,
//! and the CLI resolves defaults exactly once, here.

use camino::{Utf8Path, Utf8PathBuf};
use reqtrace_reconcile::DEFAULT_SIMILARITY_THRESHOLD;
use reqtrace_utils::error::{ConfigError, ReqTraceError};
use serde::Deserialize;
use std::fs;

/// Effective configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub spec: Utf8PathBuf,
    pub tasks: Utf8PathBuf,
    pub similarity_threshold: f64,
    pub strict: bool,
}

/// Values supplied on the command line, overriding everything else.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<Utf8PathBuf>,
    pub spec: Option<Utf8PathBuf>,
    pub tasks: Option<Utf8PathBuf>,
    pub similarity_threshold: Option<f64>,
    pub strict: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    defaults: Defaults,
}

#[derive(Debug, Deserialize, Default)]
struct Defaults {
    spec: Option<Utf8PathBuf>,
    tasks: Option<Utf8PathBuf>,
    similarity_threshold: Option<f64>,
    strict: Option<bool>,
}

impl Config {
    /// Resolve the effective configuration for this invocation.
    pub fn resolve(overrides: &CliOverrides) -> Result<Self, ReqTraceError> {
        let (file, base_dir) = match &overrides.config_path {
            Some(path) => (Some(load_config_file(path)?), config_base_dir(path)),
            None => match discover_config_file()? {
                Some((file, path)) => {
                    let base = config_base_dir(&path);
                    (Some(file), base)
                }
                None => (None, Utf8PathBuf::from(".")),
            },
        };
        let defaults = file.map(|f| f.defaults).unwrap_or_default();

        let spec = overrides
            .spec
            .clone()
            .or_else(|| defaults.spec.as_ref().map(|p| base_dir.join(p)))
            .unwrap_or_else(|| Utf8PathBuf::from("spec.md"));
        let tasks = overrides
            .tasks
            .clone()
            .or_else(|| defaults.tasks.as_ref().map(|p| base_dir.join(p)))
            .unwrap_or_else(|| Utf8PathBuf::from("tasks.md"));

        let similarity_threshold = overrides
            .similarity_threshold
            .or(defaults.similarity_threshold)
            .unwrap_or(DEFAULT_SIMILARITY_THRESHOLD);
        if !similarity_threshold.is_finite() || !(0.0..=1.0).contains(&similarity_threshold) {
            return Err(ConfigError::InvalidValue {
                key: "similarity_threshold".to_string(),
                value: similarity_threshold.to_string(),
            }
            .into());
        }

        let strict = overrides.strict.or(defaults.strict).unwrap_or(false);

        Ok(Self {
            spec,
            tasks,
            similarity_threshold,
            strict,
        })
    }
}

/// Paths in the config file are relative to the directory that holds the
/// `.reqtrace` directory (or the config file itself when passed explicitly).
fn config_base_dir(config_path: &Utf8Path) -> Utf8PathBuf {
    let dir = config_path
        .parent()
        .unwrap_or_else(|| Utf8Path::new("."));
    if dir.file_name() == Some(".reqtrace") {
        dir.parent().unwrap_or_else(|| Utf8Path::new(".")).to_owned()
    } else {
        dir.to_owned()
    }
}

fn load_config_file(path: &Utf8Path) -> Result<ConfigFile, ReqTraceError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::InvalidFile {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    toml::from_str(&text).map_err(|e| {
        ConfigError::InvalidFile {
            path: path.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Walk upward from the working directory looking for
/// `.reqtrace/config.toml`. Absence is not an error.
fn discover_config_file() -> Result<Option<(ConfigFile, Utf8PathBuf)>, ReqTraceError> {
    let cwd = std::env::current_dir().map_err(ReqTraceError::Io)?;
    let Ok(mut dir) = Utf8PathBuf::from_path_buf(cwd) else {
        return Ok(None);
    };
    loop {
        let candidate = dir.join(".reqtrace").join("config.toml");
        if candidate.is_file() {
            let file = load_config_file(&candidate)?;
            return Ok(Some((file, candidate)));
        }
        if !dir.pop() {
            return Ok(None);
        }
    }
}
