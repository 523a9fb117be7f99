use std::path::Path;

use crate::domain::check::{CapturedOutput, CheckKind, CheckReport, LaunchFailure};

// ProcessLauncher: run `program <target>` to completion and capture its streams
pub trait ProcessLauncher {
    fn launch(&self, program: &str, target: &Path) -> Result<CapturedOutput, LaunchFailure>;
}

// Checker: produce a report for one target; never fails, errors become report text
pub trait Checker {
    fn kind(&self) -> CheckKind;
    fn check(&self, target: &Path) -> CheckReport;
}

// ReportExporter: render the progress and results of a run to some output
pub trait ReportExporter {
    fn target_missing(&mut self, target: &Path) -> anyhow::Result<()>;
    fn check_started(&mut self, kind: CheckKind) -> anyhow::Result<()>;
    fn check_finished(&mut self, report: &CheckReport) -> anyhow::Result<()>;
    fn finish(&mut self, target: &Path) -> anyhow::Result<()>;
}
