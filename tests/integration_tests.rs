use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{home_dir, init_db_with_data, pl, setup_test_db, temp_dir};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    pl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_list_reference_scenario() {
    let db_path = setup_test_db("list_reference");
    init_db_with_data(&db_path);

    pl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("A1"))
        .stdout(contains("A2"))
        .stdout(contains("Grand TOTAL: 15"))
        .stdout(contains("2024-01-01 | "))
        .stdout(contains("Malam"));
}

#[test]
fn test_list_chinese_labels() {
    let db_path = setup_test_db("list_chinese");
    init_db_with_data(&db_path);

    pl().args(["--db", &db_path, "--lang", "cn", "list"])
        .assert()
        .success()
        .stdout(contains("生产数据系统"))
        .stdout(contains("白班"))
        .stdout(contains("夜班"));
}

#[test]
fn test_add_zero_total_is_recorded() {
    let db_path = setup_test_db("add_zero_total");

    pl().args(["--db", &db_path, "add", "2024-02-01", "B1", "Black", "0"])
        .assert()
        .success()
        .stdout(contains("added"));

    pl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("B1"))
        .stdout(contains("Grand TOTAL: 0"));
}

#[test]
fn test_add_invalid_input_records_nothing() {
    let db_path = setup_test_db("add_invalid");

    pl().args(["--db", &db_path, "add", "2024-02-01", "B1", "Black", "-4"])
        .assert()
        .success()
        .stdout(contains("Nothing recorded"));

    pl().args(["--db", &db_path, "add", "2024-02-01", "B1", "", "4"])
        .assert()
        .success()
        .stdout(contains("Nothing recorded"));

    pl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Tidak ada data"));
}

#[test]
fn test_add_unknown_shift_fails() {
    let db_path = setup_test_db("add_unknown_shift");

    pl().args([
        "--db",
        &db_path,
        "add",
        "2024-02-01",
        "B1",
        "Black",
        "4",
        "--shift",
        "evening",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid shift"));
}

#[test]
fn test_list_filter_by_date() {
    let db_path = setup_test_db("list_filter");
    init_db_with_data(&db_path);

    pl().args(["--db", &db_path, "add", "2024-01-02", "C9", "Green", "7"])
        .assert()
        .success();

    pl().args(["--db", &db_path, "list", "--date", "2024-01-02"])
        .assert()
        .success()
        .stdout(contains("C9"))
        .stdout(contains("Grand TOTAL: 7"))
        .stdout(contains("A1").not());
}

#[test]
fn test_list_rejects_malformed_date() {
    let db_path = setup_test_db("list_bad_date");

    pl().args(["--db", &db_path, "list", "--date", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_del_unknown_id_is_noop() {
    let db_path = setup_test_db("del_unknown");
    init_db_with_data(&db_path);

    pl().args(["--db", &db_path, "del", "42"])
        .assert()
        .success()
        .stdout(contains("No record with id 42"));

    pl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Grand TOTAL: 15"));
}

#[test]
fn test_del_existing_record() {
    let db_path = setup_test_db("del_existing");
    init_db_with_data(&db_path);

    let out = pl().args(["--db", &db_path, "list"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&out.stdout);

    // first data row after the rule line: "<id> | 2024-01-01 | ..."
    let id = stdout
        .lines()
        .find(|l| l.contains("| A1 "))
        .and_then(|l| l.split('|').next())
        .map(|s| s.trim().to_string())
        .expect("row for A1");

    pl().args(["--db", &db_path, "del", &id])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    pl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Grand TOTAL: 5"))
        .stdout(contains("| A1 ").not());
}

#[test]
fn test_export_xlsx_writes_report() {
    let db_path = setup_test_db("cli_export_xlsx");
    init_db_with_data(&db_path);
    let dir = temp_dir("cli_export_xlsx");

    pl().args([
        "--db",
        &db_path,
        "export",
        "--dir",
        dir.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(contains("XLSX export completed"));

    let path = dir.join("production_report.xlsx");
    let bytes = fs::read(path).expect("report written");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_no_match_warns_and_writes_nothing() {
    let db_path = setup_test_db("cli_export_nodata");
    init_db_with_data(&db_path);
    let dir = temp_dir("cli_export_nodata");

    pl().args([
        "--db",
        &db_path,
        "export",
        "--date",
        "2030-01-01",
        "--dir",
        dir.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(contains("Tidak ada data sesuai filter tanggal"));

    assert!(!dir.join("production_report.xlsx").exists());
}

#[test]
fn test_export_json_format() {
    let db_path = setup_test_db("cli_export_json");
    init_db_with_data(&db_path);
    let dir = temp_dir("cli_export_json");

    pl().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "json",
        "--dir",
        dir.to_str().unwrap(),
    ])
    .assert()
    .success();

    let content = fs::read_to_string(dir.join("production_report.json")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 2);
    assert_eq!(v[1]["shift"], "Malam");
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_ops");
    init_db_with_data(&db_path);

    pl().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add").and(contains("A2")));
}

#[test]
fn test_unpadded_date_is_found_by_date_filter() {
    let db_path = setup_test_db("unpadded_date");
    let dir = temp_dir("unpadded_date");

    pl().args(["--db", &db_path, "add", "2024-1-5", "D4", "White", "3"])
        .assert()
        .success()
        .stdout(contains("2024-01-05"));

    pl().args(["--db", &db_path, "list", "--date", "2024-1-5"])
        .assert()
        .success()
        .stdout(contains("D4"))
        .stdout(contains("Grand TOTAL: 3"));

    pl().args([
        "--db",
        &db_path,
        "export",
        "--date",
        "2024-1-5",
        "--dir",
        dir.to_str().unwrap(),
    ])
    .assert()
    .success();

    assert!(dir.join("production_report.xlsx").exists());
}

#[test]
fn test_relative_db_resolves_under_config_dir_for_every_command() {
    let home = home_dir();
    let db_file = home.join(".prodlog").join("relative_db_test.sqlite");
    fs::remove_file(&db_file).ok();

    pl().args(["--db", "relative_db_test.sqlite", "--test", "init"])
        .assert()
        .success();

    pl().args(["--db", "relative_db_test.sqlite", "add", "2024-03-01", "R1", "Grey", "8"])
        .assert()
        .success();

    assert!(db_file.exists());

    pl().args(["--db", "relative_db_test.sqlite", "list"])
        .assert()
        .success()
        .stdout(contains("R1"));
}
