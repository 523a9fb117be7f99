// Application layer: the driver that runs both checks against one target.

use std::path::Path;

use anyhow::Result;

use crate::ports::{Checker, ReportExporter};

/// The main usecase: validate the target, then run the static and dynamic
/// checks in order, handing each result to the exporter as soon as it is ready.
pub struct SafetyCheckUsecase<'a> {
    pub static_analyzer: &'a dyn Checker,
    pub dynamic_runner: &'a dyn Checker,
}

impl<'a> SafetyCheckUsecase<'a> {
    /// Only output failures are returned as errors; check failures are report text.
    pub fn run(&self, target: &Path, exporter: &mut dyn ReportExporter) -> Result<()> {
        if !target.exists() {
            return exporter.target_missing(target);
        }

        for checker in [self.static_analyzer, self.dynamic_runner] {
            exporter.check_started(checker.kind())?;
            let report = checker.check(target);
            exporter.check_finished(&report)?;
        }

        exporter.finish(target)
    }
}
