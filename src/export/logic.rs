// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::job::EncodeJob;
use crate::export::model::{ExportOptions, ExportSheet};
use crate::export::{ExportFormat, notify_export_success};
use crate::models::filter::DateFilter;
use crate::models::record::Record;
use crate::ui::labels::Language;
use crate::ui::messages::info;
use std::fs;
use std::path::PathBuf;

/// Parameters of one export.
#[derive(Clone, Debug)]
pub struct ExportRequest {
    pub format: ExportFormat,
    /// Destination directory; the file name is fixed per format.
    pub dir: PathBuf,
    pub options: ExportOptions,
    pub language: Language,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The filter matched nothing, no file was produced.
    NoData,
    /// `rows` is the sheet row count (leading + header + data).
    Written { path: PathBuf, rows: usize },
}

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Build the sheet for the records in scope of `filter`, or `None` when
    /// nothing matches.
    pub fn prepare(
        records: &[Record],
        filter: &DateFilter,
        request: &ExportRequest,
    ) -> Option<ExportSheet> {
        let scoped = filter.apply(records);
        if scoped.is_empty() {
            return None;
        }

        // title/period rows only make sense in the spreadsheet
        let options = ExportOptions {
            header_rows: request.options.header_rows && request.format == ExportFormat::Xlsx,
            ..request.options.clone()
        };

        Some(ExportSheet::build(
            &scoped,
            filter,
            &options,
            request.language.labels(),
        ))
    }

    /// Encode and write `production_report.<ext>` into `request.dir`,
    /// overwriting any previous report.
    pub fn export(
        records: &[Record],
        filter: &DateFilter,
        request: &ExportRequest,
    ) -> AppResult<ExportOutcome> {
        let Some(sheet) = Self::prepare(records, filter, request) else {
            return Ok(ExportOutcome::NoData);
        };

        let rows = sheet.row_count();
        let path = request.dir.join(request.format.file_name());

        info(format!(
            "Exporting to {}: {}",
            request.format.as_str().to_uppercase(),
            path.display()
        ));

        let buffer = EncodeJob::spawn(sheet, request.format).wait()?;

        fs::create_dir_all(&request.dir)?;
        fs::write(&path, &buffer)?;

        notify_export_success(&request.format.as_str().to_uppercase(), &path);
        Ok(ExportOutcome::Written { path, rows })
    }
}
