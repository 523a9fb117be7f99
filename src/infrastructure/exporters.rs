use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::api::dto::{CheckDto, MissingTargetDto, SafetyReportDto};
use crate::domain::check::{CheckKind, CheckReport};
use crate::ports::ReportExporter;

/// Plain-text layout, written as each check progresses.
pub struct TextExporter<W: Write> {
    out: W,
}

impl<W: Write> TextExporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportExporter for TextExporter<W> {
    fn target_missing(&mut self, target: &Path) -> Result<()> {
        writeln!(self.out, "File not found: {}", target.display()).context("Failed to write report")?;
        self.out.flush().context("Failed to flush report")
    }

    fn check_started(&mut self, kind: CheckKind) -> Result<()> {
        let heading = match kind {
            CheckKind::Static => "Starting static analysis...",
            CheckKind::Dynamic => "\nStarting dynamic check...",
        };
        writeln!(self.out, "{}", heading).context("Failed to write report")?;
        // Subprocess may run for a long time; show the heading before it starts.
        self.out.flush().context("Failed to flush report")
    }

    fn check_finished(&mut self, report: &CheckReport) -> Result<()> {
        let title = match report.kind {
            CheckKind::Static => "Static Analysis Results:",
            CheckKind::Dynamic => "Dynamic Check Results:",
        };
        writeln!(self.out, "{}", title).context("Failed to write report")?;
        writeln!(self.out, "{}", report.text()).context("Failed to write report")?;
        self.out.flush().context("Failed to flush report")
    }

    fn finish(&mut self, _target: &Path) -> Result<()> {
        self.out.flush().context("Failed to flush report")
    }
}

/// Collects both reports and emits one JSON document at the end.
pub struct JsonExporter<W: Write> {
    out: W,
    static_analysis: Option<CheckDto>,
    dynamic_check: Option<CheckDto>,
}

impl<W: Write> JsonExporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, static_analysis: None, dynamic_check: None }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    fn write_json<T: serde::Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, value).context("Failed to serialize report")?;
        writeln!(self.out).context("Failed to write report")?;
        self.out.flush().context("Failed to flush report")
    }
}

impl<W: Write> ReportExporter for JsonExporter<W> {
    fn target_missing(&mut self, target: &Path) -> Result<()> {
        let dto = MissingTargetDto {
            target: target.display().to_string(),
            error: format!("File not found: {}", target.display()),
        };
        self.write_json(&dto)
    }

    fn check_started(&mut self, _kind: CheckKind) -> Result<()> {
        Ok(())
    }

    fn check_finished(&mut self, report: &CheckReport) -> Result<()> {
        let dto = CheckDto::from(report);
        match report.kind {
            CheckKind::Static => self.static_analysis = Some(dto),
            CheckKind::Dynamic => self.dynamic_check = Some(dto),
        }
        Ok(())
    }

    fn finish(&mut self, target: &Path) -> Result<()> {
        let dto = SafetyReportDto {
            target: target.display().to_string(),
            static_analysis: self.static_analysis.take(),
            dynamic_check: self.dynamic_check.take(),
        };
        self.write_json(&dto)
    }
}
