//! CLI entry point and dispatch.
//!
//! `run()` handles ALL output including errors and returns
//! `Result<(), ExitCode>`; `main.rs` only maps the code to
//! `std::process::exit` and never prints.

use clap::Parser;

use super::args::{Cli, Commands};
use super::commands;
use crate::config::{CliOverrides, Config};
use reqtrace_utils::error::ReqTraceError;
use reqtrace_utils::exit_codes::ExitCode;
use reqtrace_utils::logging;

/// Parse arguments, resolve configuration, and dispatch to a command
/// handler. Handlers return the exit code for successful dispatch; errors
/// are printed here and mapped through `ReqTraceError::to_exit_code`.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();

    // A second init (e.g. in-process tests) is harmless.
    let _ = logging::init_tracing(cli.verbose);

    let result = dispatch(cli);

    match result {
        Ok(code) if code.is_success() => Ok(()),
        Ok(code) => Err(code),
        Err(err) => {
            eprintln!("✗ {err}");
            Err(err.to_exit_code())
        }
    }
}

fn dispatch(cli: Cli) -> Result<ExitCode, ReqTraceError> {
    match cli.command {
        Commands::Coverage {
            spec,
            tasks,
            format,
            output,
        } => {
            let config = Config::resolve(&CliOverrides {
                config_path: cli.config,
                spec,
                tasks,
                ..CliOverrides::default()
            })?;
            commands::execute_coverage_command(&config, format, output.as_deref())
        }
        Commands::Locate { id, spec, format } => {
            let config = Config::resolve(&CliOverrides {
                config_path: cli.config,
                spec,
                ..CliOverrides::default()
            })?;
            commands::execute_locate_command(&config, &id, format)
        }
        Commands::Tasks {
            id,
            spec,
            tasks,
            format,
        } => {
            let config = Config::resolve(&CliOverrides {
                config_path: cli.config,
                spec,
                tasks,
                ..CliOverrides::default()
            })?;
            commands::execute_tasks_command(&config, &id, format)
        }
        Commands::Validate {
            spec,
            tasks,
            strict,
            format,
        } => {
            let config = Config::resolve(&CliOverrides {
                config_path: cli.config,
                spec,
                tasks,
                strict: if strict { Some(true) } else { None },
                ..CliOverrides::default()
            })?;
            commands::execute_validate_command(&config, format)
        }
        Commands::Reconcile {
            old,
            new,
            write_to,
            threshold,
            dry_run,
        } => {
            let config = Config::resolve(&CliOverrides {
                config_path: cli.config,
                similarity_threshold: threshold,
                ..CliOverrides::default()
            })?;
            commands::execute_reconcile_command(
                &config,
                &old,
                &new,
                write_to.as_deref(),
                dry_run,
            )
        }
    }
}
