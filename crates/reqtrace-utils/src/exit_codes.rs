//! Exit code constants for the reqtrace CLI.
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | `SUCCESS` | No issues, or only warnings outside strict mode |
//! | 1 | `FAILURE` | At least one ERROR-severity issue, or internal failure |
//! | 2 | `INPUT` | Input file missing/unreadable, or invalid arguments |

/// Typed exit code for `std::process::exit`.
///
/// The numeric values are part of the CLI contract consumed by CI pipelines
/// and will not change within a release line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Operation completed with no reportable errors.
    pub const SUCCESS: ExitCode = ExitCode(0);

    /// At least one ERROR-severity issue was found, or the operation failed.
    pub const FAILURE: ExitCode = ExitCode(1);

    /// Input files not found or unreadable, or invalid CLI/config values.
    pub const INPUT: ExitCode = ExitCode(2);

    /// Numeric value for `std::process::exit()`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// True when the code signals success.
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_values_match_the_cli_contract() {
        assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
        assert_eq!(ExitCode::FAILURE.as_i32(), 1);
        assert_eq!(ExitCode::INPUT.as_i32(), 2);
    }

    #[test]
    fn is_success_only_for_zero() {
        assert!(ExitCode::SUCCESS.is_success());
        assert!(!ExitCode::FAILURE.is_success());
        assert!(!ExitCode::INPUT.is_success());
    }
}
