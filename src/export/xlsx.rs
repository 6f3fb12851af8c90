// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::excel_date::{DATE_FORMAT, TIME_FORMAT, date_serial, time_serial};
use crate::export::model::ExportSheet;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};

pub const SHEET_NAME: &str = "Data_Filtered";

// column indexes with typed cells
const COL_DATE: u16 = 0;
const COL_TIME: u16 = 1;
const COL_TOTAL: u16 = 5;

/// Encode the sheet as an XLSX workbook held in memory.
pub fn encode_xlsx(sheet: &ExportSheet) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    // ---------------------------
    // Title / period
    // ---------------------------
    let title_format = Format::new().set_bold();
    for (r, row) in sheet.leading.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            if r == 0 {
                worksheet.write_with_format(r as u32, c as u16, value.as_str(), &title_format)?;
            } else {
                worksheet.write(r as u32, c as u16, value.as_str())?;
            }
        }
    }

    // ---------------------------
    // Header
    // ---------------------------
    let header_row = sheet.header_row();
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in sheet.headers.iter().enumerate() {
        worksheet.write_with_format(header_row, col as u16, header.as_str(), &header_format)?;
    }

    worksheet.set_freeze_panes(header_row + 1, 0)?;

    // ---------------------------
    // Righe dati
    // ---------------------------
    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (i, rec) in sheet.rows.iter().enumerate() {
        let row = header_row + 1 + i as u32;
        let band = if i % 2 == 0 { band1 } else { band2 };

        for (col, value) in rec.cells().iter().enumerate() {
            write_cell(worksheet, row, col as u16, value, band)?;
        }
    }

    // ---------------------------
    // Larghezze colonne
    // ---------------------------
    for (c, w) in sheet.column_widths().iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Dates and times become Excel serials, the total a number, the rest text.
fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let typed = match col {
        COL_DATE => date_serial(s).map(|v| (v, base.clone().set_num_format(DATE_FORMAT))),
        COL_TIME => time_serial(s).map(|v| (v, base.clone().set_num_format(TIME_FORMAT))),
        COL_TOTAL => s
            .parse::<f64>()
            .ok()
            .map(|v| (v, base.clone().set_align(FormatAlign::Right))),
        _ => None,
    };

    match typed {
        Some((num, fmt)) => worksheet.write_with_format(row, col, num, &fmt)?,
        None => worksheet.write_with_format(row, col, s, &base)?,
    };

    Ok(())
}
