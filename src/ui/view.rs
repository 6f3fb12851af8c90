//! Text rendering of the record table, the grand total and the daily chart.

use crate::core::aggregate::Summary;
use crate::models::filter::DateFilter;
use crate::models::record::Record;
use crate::ui::labels::Labels;
use crate::ui::messages::header;
use crate::utils::table::{Table, pad_right};
use unicode_width::UnicodeWidthStr;

const BAR: &str = "█";

/// Full report for the records in scope of `filter`.
pub fn render(records: &[Record], filter: &DateFilter, labels: &Labels, chart_width: usize) -> String {
    let scoped = filter.apply(records);
    let summary = Summary::from_records(&scoped);

    let mut out = String::new();
    out.push_str(&header(labels.title));
    out.push_str("\n\n");

    if let Some(d) = filter.describe() {
        out.push_str(&format!("{}: {}\n\n", labels.filter, d));
    }

    if scoped.is_empty() {
        out.push_str(labels.no_data);
        out.push('\n');
        return out;
    }

    out.push_str(&render_table(&scoped, labels));
    out.push('\n');
    out.push_str(&format!("{}: {}\n\n", labels.grand_total, summary.grand_total));
    out.push_str(&render_chart(&summary, labels, chart_width));

    out
}

pub fn render_table(records: &[&Record], labels: &Labels) -> String {
    let mut table = Table::new([
        labels.id,
        labels.date,
        labels.time,
        labels.model,
        labels.color,
        labels.shift,
        labels.total,
    ]);

    for r in records {
        table.add_row(vec![
            r.id.to_string(),
            r.date.clone(),
            r.time.clone(),
            r.model.clone(),
            r.color.clone(),
            labels.shift_name(r.shift).to_string(),
            r.total.to_string(),
        ]);
    }

    table.render()
}

/// Horizontal bars, one per date, scaled so the peak fills `width` columns.
pub fn render_chart(summary: &Summary, labels: &Labels, width: usize) -> String {
    let mut out = format!("{}\n", labels.chart_title);

    let peak = summary.peak();
    let label_w = summary
        .by_date
        .iter()
        .map(|d| d.date.width())
        .max()
        .unwrap_or(0);

    for d in &summary.by_date {
        let len = bar_len(d.total, peak, width);
        out.push_str(&format!(
            "{} | {}{}{}\n",
            pad_right(&d.date, label_w),
            BAR.repeat(len),
            if len > 0 { " " } else { "" },
            d.total
        ));
    }

    out
}

fn bar_len(value: u64, peak: u64, width: usize) -> usize {
    if peak == 0 || value == 0 {
        return 0;
    }
    let scaled = (value as f64 / peak as f64 * width as f64).round() as usize;
    scaled.max(1)
}
