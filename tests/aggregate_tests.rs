mod common;

use common::record;
use prodlog::core::aggregate::{DateTotal, Summary, grand_total, group_by_date};
use prodlog::models::{DateFilter, Record, Shift};
use prodlog::ui::Language;
use prodlog::ui::view;

fn dataset() -> Vec<Record> {
    vec![
        record(1, "2024-01-02", "A1", Shift::Day, 4),
        record(2, "2024-01-01", "A2", Shift::Night, 6),
        record(3, "2024-01-02", "A3", Shift::Day, 1),
        record(4, "2024-01-03", "A1", Shift::Night, 9),
    ]
}

#[test]
fn test_reference_scenario_grand_total_and_grouping() {
    let records = vec![
        record(1, "2024-01-01", "A1", Shift::Day, 10),
        record(2, "2024-01-01", "A2", Shift::Night, 5),
    ];
    let scoped = DateFilter::none().apply(&records);

    assert_eq!(grand_total(&scoped), 15);
    assert_eq!(
        group_by_date(&scoped),
        vec![DateTotal {
            date: "2024-01-01".into(),
            total: 15
        }]
    );
}

#[test]
fn test_grouping_keeps_first_seen_order_and_never_merges_distinct_dates() {
    let records = dataset();
    let groups = group_by_date(&DateFilter::none().apply(&records));

    let dates: Vec<&str> = groups.iter().map(|g| g.date.as_str()).collect();
    let totals: Vec<u64> = groups.iter().map(|g| g.total).collect();

    assert_eq!(dates, vec!["2024-01-02", "2024-01-01", "2024-01-03"]);
    assert_eq!(totals, vec![5, 6, 9]);
}

#[test]
fn test_filter_scopes_grand_total() {
    let records = dataset();

    let all = DateFilter::none().apply(&records);
    let day = DateFilter::on("2024-01-02").apply(&records);
    let nothing = DateFilter::on("1999-12-31").apply(&records);

    assert_eq!(grand_total(&all), 20);
    assert_eq!(grand_total(&day), 5);
    assert_eq!(day.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(grand_total(&nothing), 0);
    assert!(group_by_date(&nothing).is_empty());
}

#[test]
fn test_empty_filter_value_means_no_filter() {
    let records = dataset();
    assert_eq!(DateFilter::from_option(Some("")).describe(), None);
    assert_eq!(DateFilter::from_option(Some("  ")).apply(&records).len(), 4);
    assert_eq!(DateFilter::from_option(None).apply(&records).len(), 4);
}

#[test]
fn test_summary_peak() {
    let records = dataset();
    let summary = Summary::from_records(&DateFilter::none().apply(&records));

    assert_eq!(summary.count, 4);
    assert_eq!(summary.grand_total, 20);
    assert_eq!(summary.peak(), 9);
}

#[test]
fn test_view_renders_table_total_and_chart() {
    let records = dataset();
    let labels = Language::Id.labels();

    let out = view::render(&records, &DateFilter::none(), labels, 9);

    assert!(out.contains("Sistem Data Produksi"));
    assert!(out.contains("Grand TOTAL: 20"));
    assert!(out.contains("Grafik Produksi Per Hari"));
    assert!(out.contains("Malam"));
    // peak date fills the full width
    assert!(out.contains(&format!("2024-01-03 | {} 9", "█".repeat(9))));
    assert!(out.contains(&format!("2024-01-01 | {} 6", "█".repeat(6))));
}

#[test]
fn test_view_localizes_shift_and_handles_empty_filter() {
    let records = dataset();
    let labels = Language::Cn.labels();

    let out = view::render(&records, &DateFilter::on("2024-01-01"), labels, 10);
    assert!(out.contains("夜班"));
    assert!(out.contains("总TOTAL: 6"));

    let empty = view::render(&records, &DateFilter::on("2030-01-01"), labels, 10);
    assert!(empty.contains(labels.no_data));
    assert!(!empty.contains(labels.chart_title));
}

#[test]
fn test_totals_saturate_instead_of_overflowing() {
    // stored values are not range-checked on load
    let records = vec![
        record(1, "2024-01-01", "A1", Shift::Day, u64::MAX),
        record(2, "2024-01-01", "A2", Shift::Night, 1),
    ];
    let scoped = DateFilter::none().apply(&records);

    assert_eq!(grand_total(&scoped), u64::MAX);
    assert_eq!(group_by_date(&scoped)[0].total, u64::MAX);
    assert_eq!(Summary::from_records(&scoped).peak(), u64::MAX);
}
