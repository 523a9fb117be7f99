// Domain model for a single check run: what was launched, what came back,
// and how the result is rendered as report text.

use std::fmt;

/// Which of the two checks produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Static,
    Dynamic,
}

/// Captured result of a subprocess that was successfully spawned.
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Reasons a subprocess could not be run at all.
#[derive(Debug)]
pub enum LaunchFailure {
    /// The executable is not on the search path.
    NotFound { program: String },
    /// Anything else: permission denied, bad path, I/O failure while waiting.
    Other { reason: String },
}

impl fmt::Display for LaunchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchFailure::NotFound { program } => write!(f, "executable not found: {}", program),
            LaunchFailure::Other { reason } => f.write_str(reason),
        }
    }
}

/// Typed result of one check before it is flattened into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Clean { stdout: String },
    Failed { stderr: String },
    ToolMissing { program: String },
    Unexpected { reason: String },
}

impl CheckOutcome {
    /// Classify a launch result. A non-zero exit or a signal counts as failure.
    pub fn from_launch(result: Result<CapturedOutput, LaunchFailure>) -> Self {
        match result {
            Ok(out) if out.success() => CheckOutcome::Clean { stdout: out.stdout },
            Ok(out) => CheckOutcome::Failed { stderr: out.stderr },
            Err(LaunchFailure::NotFound { program }) => CheckOutcome::ToolMissing { program },
            Err(LaunchFailure::Other { reason }) => CheckOutcome::Unexpected { reason },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub kind: CheckKind,
    pub outcome: CheckOutcome,
}

impl CheckReport {
    pub fn new(kind: CheckKind, outcome: CheckOutcome) -> Self {
        Self { kind, outcome }
    }

    /// Human-readable report. Never empty for failures; a clean static run
    /// returns the tool output untouched, which may be empty.
    pub fn text(&self) -> String {
        match (self.kind, &self.outcome) {
            (CheckKind::Static, CheckOutcome::Clean { stdout }) => stdout.clone(),
            (CheckKind::Static, CheckOutcome::Failed { stderr }) => {
                format!("Error during static analysis: {}", stderr)
            }
            (CheckKind::Static, CheckOutcome::ToolMissing { program }) => {
                format!("Error: {} is not installed or not found in the PATH.", program)
            }
            (CheckKind::Static, CheckOutcome::Unexpected { reason }) => {
                format!("Unexpected error during static analysis: {}", reason)
            }
            (CheckKind::Dynamic, CheckOutcome::Clean { stdout }) => {
                format!("No runtime errors detected:\n{}", stdout)
            }
            (CheckKind::Dynamic, CheckOutcome::Failed { stderr }) => {
                format!("Runtime error during execution: {}", stderr)
            }
            (CheckKind::Dynamic, CheckOutcome::ToolMissing { .. }) => {
                "Error: Python interpreter not found.".to_string()
            }
            (CheckKind::Dynamic, CheckOutcome::Unexpected { reason }) => {
                format!("Unexpected error during dynamic check: {}", reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(code: Option<i32>, stdout: &str, stderr: &str) -> CapturedOutput {
        CapturedOutput {
            exit_code: code,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn test_zero_exit_is_clean() {
        let outcome = CheckOutcome::from_launch(Ok(captured(Some(0), "ok\n", "noise")));
        assert_eq!(outcome, CheckOutcome::Clean { stdout: "ok\n".into() });
    }

    #[test]
    fn test_nonzero_exit_keeps_stderr() {
        let outcome = CheckOutcome::from_launch(Ok(captured(Some(2), "out", "bad things")));
        assert_eq!(outcome, CheckOutcome::Failed { stderr: "bad things".into() });
    }

    #[test]
    fn test_signal_counts_as_failure() {
        let outcome = CheckOutcome::from_launch(Ok(captured(None, "", "killed")));
        assert!(matches!(outcome, CheckOutcome::Failed { .. }));
    }

    #[test]
    fn test_launch_failures_map_to_outcomes() {
        let missing = CheckOutcome::from_launch(Err(LaunchFailure::NotFound {
            program: "pylint".into(),
        }));
        assert_eq!(missing, CheckOutcome::ToolMissing { program: "pylint".into() });

        let other = CheckOutcome::from_launch(Err(LaunchFailure::Other {
            reason: "Permission denied (os error 13)".into(),
        }));
        assert_eq!(
            other,
            CheckOutcome::Unexpected { reason: "Permission denied (os error 13)".into() }
        );
    }

    #[test]
    fn test_static_clean_report_is_verbatim() {
        let report = CheckReport::new(CheckKind::Static, CheckOutcome::Clean { stdout: String::new() });
        assert_eq!(report.text(), "");

        let report = CheckReport::new(
            CheckKind::Static,
            CheckOutcome::Clean { stdout: "Your code has been rated at 10.00/10\n".into() },
        );
        assert_eq!(report.text(), "Your code has been rated at 10.00/10\n");
    }

    #[test]
    fn test_static_failure_messages() {
        let failed = CheckReport::new(CheckKind::Static, CheckOutcome::Failed { stderr: "E0001".into() });
        assert_eq!(failed.text(), "Error during static analysis: E0001");

        let missing = CheckReport::new(
            CheckKind::Static,
            CheckOutcome::ToolMissing { program: "pylint".into() },
        );
        assert_eq!(missing.text(), "Error: pylint is not installed or not found in the PATH.");

        let unexpected = CheckReport::new(
            CheckKind::Static,
            CheckOutcome::Unexpected { reason: "boom".into() },
        );
        assert_eq!(unexpected.text(), "Unexpected error during static analysis: boom");
    }

    #[test]
    fn test_dynamic_messages() {
        let clean = CheckReport::new(CheckKind::Dynamic, CheckOutcome::Clean { stdout: "hi\n".into() });
        assert_eq!(clean.text(), "No runtime errors detected:\nhi\n");

        let failed = CheckReport::new(
            CheckKind::Dynamic,
            CheckOutcome::Failed { stderr: "Traceback".into() },
        );
        assert_eq!(failed.text(), "Runtime error during execution: Traceback");
        assert!(!failed.text().contains("No runtime errors"));

        let missing = CheckReport::new(
            CheckKind::Dynamic,
            CheckOutcome::ToolMissing { program: "python3.99".into() },
        );
        assert_eq!(missing.text(), "Error: Python interpreter not found.");

        let unexpected = CheckReport::new(
            CheckKind::Dynamic,
            CheckOutcome::Unexpected { reason: "boom".into() },
        );
        assert_eq!(unexpected.text(), "Unexpected error during dynamic check: boom");
    }
}
