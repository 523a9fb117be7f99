use std::path::Path;

use crate::domain::check::{CheckKind, CheckOutcome, CheckReport};
use crate::ports::{Checker, ProcessLauncher};

pub const DEFAULT_ANALYZER: &str = "pylint";
pub const DEFAULT_INTERPRETER: &str = "python";

/// Runs the static-analysis tool with the target as its only argument.
pub struct StaticAnalyzer<'a> {
    pub launcher: &'a dyn ProcessLauncher,
    pub program: String,
}

impl<'a> StaticAnalyzer<'a> {
    pub fn new(launcher: &'a dyn ProcessLauncher, program: impl Into<String>) -> Self {
        Self { launcher, program: program.into() }
    }
}

impl Checker for StaticAnalyzer<'_> {
    fn kind(&self) -> CheckKind {
        CheckKind::Static
    }

    fn check(&self, target: &Path) -> CheckReport {
        let outcome = CheckOutcome::from_launch(self.launcher.launch(&self.program, target));
        CheckReport::new(self.kind(), outcome)
    }
}

/// Executes the target under the interpreter. Unsandboxed: the target runs
/// with the same privileges and environment as this process.
pub struct DynamicRunner<'a> {
    pub launcher: &'a dyn ProcessLauncher,
    pub interpreter: String,
}

impl<'a> DynamicRunner<'a> {
    pub fn new(launcher: &'a dyn ProcessLauncher, interpreter: impl Into<String>) -> Self {
        Self { launcher, interpreter: interpreter.into() }
    }
}

impl Checker for DynamicRunner<'_> {
    fn kind(&self) -> CheckKind {
        CheckKind::Dynamic
    }

    fn check(&self, target: &Path) -> CheckReport {
        let outcome = CheckOutcome::from_launch(self.launcher.launch(&self.interpreter, target));
        CheckReport::new(self.kind(), outcome)
    }
}
