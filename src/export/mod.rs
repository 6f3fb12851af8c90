// src/export/mod.rs

mod excel_date;
pub mod job;
mod json_csv;
pub mod logic;
pub mod model;
pub mod xlsx;

pub use job::EncodeJob;
pub use logic::{ExportLogic, ExportOutcome, ExportRequest};
pub use model::{ExportOptions, ExportRow, ExportSheet};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Base name of every report file.
pub const REPORT_BASENAME: &str = "production_report";

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// `production_report.<ext>`
    pub fn file_name(&self) -> String {
        format!("{REPORT_BASENAME}.{}", self.as_str())
    }
}
