//! Asynchronous encoding of an export.

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{encode_csv, encode_json};
use crate::export::model::ExportSheet;
use crate::export::xlsx::encode_xlsx;
use std::thread::{self, JoinHandle};

/// Encode `sheet` synchronously.
pub fn encode(sheet: &ExportSheet, format: ExportFormat) -> AppResult<Vec<u8>> {
    match format {
        ExportFormat::Xlsx => encode_xlsx(sheet),
        ExportFormat::Csv => encode_csv(sheet),
        ExportFormat::Json => encode_json(sheet),
    }
}

/// An encode running on its own thread. Each job owns its sheet, so
/// overlapping jobs share nothing.
pub struct EncodeJob {
    handle: JoinHandle<AppResult<Vec<u8>>>,
}

impl EncodeJob {
    pub fn spawn(sheet: ExportSheet, format: ExportFormat) -> Self {
        let handle = thread::spawn(move || encode(&sheet, format));
        Self { handle }
    }

    /// Block until the buffer is ready.
    pub fn wait(self) -> AppResult<Vec<u8>> {
        self.handle
            .join()
            .map_err(|_| AppError::Export("encoder thread panicked".into()))?
    }
}
