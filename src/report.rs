//! Report rendering for the CLI surface.
//!
//! JSON output is canonical (JCS) so repeated runs over unchanged inputs are
//! byte-identical. Table output is for humans; markdown is for pasting into
//! issues and PR descriptions.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use reqtrace_utils::canonical::emit_jcs;
use reqtrace_utils::types::{CoverageReport, SourceLocation, Task, TaskStatus, ValidationIssue};

/// Output format for report-shaped commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Table,
    Json,
    Markdown,
}

/// Output format for `locate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LocateFormat {
    Structured,
    Json,
    /// Plain `file:line` for editor integration.
    Bare,
}

pub fn render_coverage(report: &CoverageReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => emit_jcs(report),
        ReportFormat::Table => {
            let mut out = String::new();
            out.push_str(&format!(
                "Requirements: {} total, {} covered\n",
                report.total_requirements, report.covered_requirements
            ));
            out.push_str(&format!("Coverage:     {}%\n", report.coverage_percent));
            if !report.uncovered.is_empty() {
                out.push_str("Uncovered:\n");
                for id in &report.uncovered {
                    out.push_str(&format!("  ✗ {id}\n"));
                }
            }
            Ok(out)
        }
        ReportFormat::Markdown => {
            let mut out = String::new();
            out.push_str("| Metric | Value |\n|---|---|\n");
            out.push_str(&format!("| Total requirements | {} |\n", report.total_requirements));
            out.push_str(&format!(
                "| Covered requirements | {} |\n",
                report.covered_requirements
            ));
            out.push_str(&format!("| Coverage | {}% |\n", report.coverage_percent));
            out.push_str(&format!(
                "| Uncovered | {} |\n",
                if report.uncovered.is_empty() {
                    "—".to_string()
                } else {
                    report.uncovered.join(", ")
                }
            ));
            Ok(out)
        }
    }
}

pub fn render_issues(issues: &[ValidationIssue], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => emit_jcs(&issues),
        ReportFormat::Table => {
            if issues.is_empty() {
                return Ok("✓ no issues found\n".to_string());
            }
            let mut out = String::new();
            for issue in issues {
                out.push_str(&format!("{issue}\n"));
            }
            Ok(out)
        }
        ReportFormat::Markdown => {
            let mut out = String::new();
            out.push_str("| Severity | Rule | Location | Message |\n|---|---|---|---|\n");
            for issue in issues {
                out.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    issue.severity, issue.rule, issue.location, issue.message
                ));
            }
            Ok(out)
        }
    }
}

pub fn render_tasks(tasks: &[&Task], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => {
            #[derive(Serialize)]
            struct TaskRow<'a> {
                description: &'a str,
                status: TaskStatus,
                location: &'a SourceLocation,
            }
            let rows: Vec<TaskRow<'_>> = tasks
                .iter()
                .map(|t| TaskRow {
                    description: &t.description,
                    status: t.status,
                    location: &t.location,
                })
                .collect();
            emit_jcs(&rows)
        }
        ReportFormat::Table | ReportFormat::Markdown => {
            let mut out = String::new();
            for task in tasks {
                let marker = match task.status {
                    TaskStatus::Done => "✓",
                    TaskStatus::Pending => "·",
                };
                out.push_str(&format!(
                    "{marker} {}  {}\n",
                    task.location, task.description
                ));
            }
            Ok(out)
        }
    }
}

pub fn render_location(
    id: &str,
    location: &SourceLocation,
    format: LocateFormat,
) -> Result<String> {
    match format {
        LocateFormat::Bare => Ok(format!("{location}\n")),
        LocateFormat::Structured => Ok(format!(
            "{id} declared at {} line {}\n",
            location.file, location.line
        )),
        LocateFormat::Json => {
            #[derive(Serialize)]
            struct Located<'a> {
                id: &'a str,
                file: &'a str,
                line: usize,
            }
            emit_jcs(&Located {
                id,
                file: location.file.as_str(),
                line: location.line,
            })
        }
    }
}
