// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::ExportSheet;

/// JSON pretty-printed array of rows.
pub(crate) fn encode_json(sheet: &ExportSheet) -> AppResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(&sheet.rows)?)
}

/// CSV with header (field names come from serde).
pub(crate) fn encode_csv(sheet: &ExportSheet) -> AppResult<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for row in &sheet.rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))
}
