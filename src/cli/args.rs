//! CLI argument definitions and parsing structures.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

use crate::report::{LocateFormat, ReportFormat};

/// reqtrace - requirement-to-task traceability
#[derive(Parser)]
#[command(name = "reqtrace")]
#[command(about = "Trace requirements to the tasks that implement them")]
#[command(long_about = r#"
reqtrace links FR-NNN requirement declarations in a specification document to
the checklist tasks that claim to satisfy them, computes coverage, validates
the reference graph, and preserves references when a task list is
regenerated.

EXAMPLES:
  # Coverage report for the sibling spec/tasks pair
  reqtrace coverage --spec specs/auth/spec.md --tasks specs/auth/tasks.md

  # Machine-readable coverage for CI
  reqtrace coverage --format json

  # Jump target for an editor
  reqtrace locate FR-002 --format bare

  # Tasks that implement one requirement
  reqtrace tasks FR-001

  # Gate a pipeline on the reference graph (exit 1 on any error)
  reqtrace validate --strict

  # Reattach references after the task list was regenerated
  reqtrace reconcile --old tasks.md.orig --new tasks.md

CONFIGURATION:
  Defaults are read from .reqtrace/config.toml, discovered upward from the
  working directory. Precedence: CLI flags > config file > built-ins.

ANNOTATIONS:
  - [ ] Implement parser [FR-001]
  - [x] Wire config [FR-001, FR-003]
  - [ ] Align with core API [../core/spec.md#FR-010]
"#)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute requirement coverage from the task list
    Coverage {
        /// Specification document (default: config or ./spec.md)
        #[arg(long)]
        spec: Option<Utf8PathBuf>,

        /// Task document (default: config or ./tasks.md)
        #[arg(long)]
        tasks: Option<Utf8PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
        format: ReportFormat,

        /// Write the report to a file instead of stdout
        #[arg(long)]
        output: Option<Utf8PathBuf>,
    },

    /// Print where a requirement is declared
    Locate {
        /// Requirement identifier (e.g. FR-002)
        id: String,

        /// Specification document (default: config or ./spec.md)
        #[arg(long)]
        spec: Option<Utf8PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = LocateFormat::Structured)]
        format: LocateFormat,
    },

    /// List the tasks referencing a requirement
    Tasks {
        /// Requirement identifier (e.g. FR-001)
        id: String,

        /// Specification document (default: config or ./spec.md)
        #[arg(long)]
        spec: Option<Utf8PathBuf>,

        /// Task document (default: config or ./tasks.md)
        #[arg(long)]
        tasks: Option<Utf8PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
        format: ReportFormat,
    },

    /// Check the reference graph for orphans and uncovered requirements
    Validate {
        /// Specification document (default: config or ./spec.md)
        #[arg(long)]
        spec: Option<Utf8PathBuf>,

        /// Task document (default: config or ./tasks.md)
        #[arg(long)]
        tasks: Option<Utf8PathBuf>,

        /// Treat uncovered requirements as errors
        #[arg(long)]
        strict: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
        format: ReportFormat,
    },

    /// Reattach references from an old task list to a regenerated one
    Reconcile {
        /// The previous task document, with reference annotations
        #[arg(long)]
        old: Utf8PathBuf,

        /// The regenerated, reference-free task document
        #[arg(long)]
        new: Utf8PathBuf,

        /// Write the annotated document here instead of over --new
        #[arg(long)]
        write_to: Option<Utf8PathBuf>,

        /// Minimum similarity for a non-exact match, in [0.0, 1.0]
        /// (default: 0.7, or config similarity_threshold)
        #[arg(long)]
        threshold: Option<f64>,

        /// Print the annotated document instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
}
