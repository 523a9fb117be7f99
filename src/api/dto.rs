use serde::{Serialize, Deserialize};
use crate::domain::check::{CheckOutcome, CheckReport};

#[derive(Debug, Serialize, Deserialize)]
pub struct SafetyReportDto {
    pub target: String,
    pub static_analysis: Option<CheckDto>,
    pub dynamic_check: Option<CheckDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MissingTargetDto {
    pub target: String,
    pub error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Clean,
    Failed,
    ToolMissing,
    Unexpected,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckDto {
    pub status: CheckStatus,
    pub report: String,
}

impl From<&CheckReport> for CheckDto {
    fn from(report: &CheckReport) -> Self {
        let status = match report.outcome {
            CheckOutcome::Clean { .. } => CheckStatus::Clean,
            CheckOutcome::Failed { .. } => CheckStatus::Failed,
            CheckOutcome::ToolMissing { .. } => CheckStatus::ToolMissing,
            CheckOutcome::Unexpected { .. } => CheckStatus::Unexpected,
        };
        CheckDto { status, report: report.text() }
    }
}
