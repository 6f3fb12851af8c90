// src/export/model.rs

use crate::models::filter::DateFilter;
use crate::models::record::Record;
use crate::ui::labels::Labels;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Extra characters added to the widest cell of each column.
pub const COLUMN_PAD: usize = 2;

/// Struttura “piatta” per export dei record, in ordine di colonna.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ExportRow {
    pub date: String,
    pub time: String,
    pub model: String,
    pub color: String,
    pub shift: String,
    pub total: u64,
}

impl ExportRow {
    pub fn from_record(r: &Record) -> Self {
        Self {
            date: r.date.clone(),
            time: r.time.clone(),
            model: r.model.clone(),
            color: r.color.clone(),
            shift: r.shift.code().to_string(),
            total: r.total,
        }
    }

    pub fn cells(&self) -> [String; 6] {
        [
            self.date.clone(),
            self.time.clone(),
            self.model.clone(),
            self.color.clone(),
            self.shift.clone(),
            self.total.to_string(),
        ]
    }
}

#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Prefix the sheet with the title row and the period row.
    pub header_rows: bool,
    pub company_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            header_rows: true,
            company_name: "PT. YOUR COMPANY NAME".to_string(),
        }
    }
}

/// Tabular form of an export, independent of the output encoding.
#[derive(Clone, Debug)]
pub struct ExportSheet {
    /// Title and period rows, empty when disabled.
    pub leading: Vec<Vec<String>>,
    pub headers: [String; 6],
    pub rows: Vec<ExportRow>,
}

impl ExportSheet {
    pub fn build(
        records: &[&Record],
        filter: &DateFilter,
        options: &ExportOptions,
        labels: &Labels,
    ) -> Self {
        let leading = if options.header_rows {
            let period = filter.describe().unwrap_or(labels.all_data);
            vec![
                vec![options.company_name.clone()],
                vec![labels.period.to_string(), period.to_string()],
            ]
        } else {
            Vec::new()
        };

        Self {
            leading,
            headers: labels.export_headers().map(str::to_string),
            rows: records.iter().map(|r| ExportRow::from_record(r)).collect(),
        }
    }

    /// Zero-based row index of the header row.
    pub fn header_row(&self) -> u32 {
        self.leading.len() as u32
    }

    /// Total number of sheet rows: leading + header + data.
    pub fn row_count(&self) -> usize {
        self.leading.len() + 1 + self.rows.len()
    }

    /// Longest header/data cell per column plus [`COLUMN_PAD`].
    pub fn column_widths(&self) -> [usize; 6] {
        let mut widths = self.headers.clone().map(|h| h.width());
        for row in &self.rows {
            for (i, cell) in row.cells().iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }
        widths.map(|w| w + COLUMN_PAD)
    }
}
