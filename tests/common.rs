#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use prodlog::models::{FormState, Record, Shift};
use prodlog::store::{MemoryStorage, RecordStore};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at an isolated directory so a
/// real `~/.prodlog/prodlog.conf` is never read.
pub fn pl() -> Command {
    let home = home_dir();
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("prodlog");
    cmd.env("HOME", home);
    cmd
}

/// HOME used by [`pl`]
pub fn home_dir() -> PathBuf {
    let mut home = env::temp_dir();
    home.push("prodlog_test_home");
    home
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_prodlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh, empty output directory inside the temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_prodlog_out", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Initialize DB and add the two-record reference dataset
pub fn init_db_with_data(db_path: &str) {
    pl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    pl().args(["--db", db_path, "add", "2024-01-01", "A1", "Red", "10"])
        .assert()
        .success();

    pl().args([
        "--db",
        db_path,
        "add",
        "2024-01-01",
        "A2",
        "Blue",
        "5",
        "--shift",
        "night",
    ])
    .assert()
    .success();
}

pub fn record(id: i64, date: &str, model: &str, shift: Shift, total: u64) -> Record {
    Record {
        id,
        date: date.to_string(),
        time: "08:00:00".to_string(),
        model: model.to_string(),
        color: "Red".to_string(),
        shift,
        total,
    }
}

pub fn memory_store() -> RecordStore<MemoryStorage> {
    RecordStore::load(MemoryStorage::new()).expect("load memory store")
}

pub fn form(date: &str, model: &str, color: &str, shift: Shift, total: &str) -> FormState {
    FormState::new(date, model, color, shift, total)
}
