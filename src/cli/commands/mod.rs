pub mod add;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::filter::DateFilter;
use crate::store::{RecordStore, SqliteStorage};
use crate::utils::date;
use std::fs;
use std::path::Path;

/// Open the configured database and restore the record collection.
pub(crate) fn open_store(cfg: &Config) -> AppResult<RecordStore<SqliteStorage>> {
    if let Some(parent) = Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    RecordStore::load(SqliteStorage::open(&cfg.database)?)
}

/// `--date` option → filter. A non-blank value must be a calendar date and
/// is zero-padded the same way stored records are.
pub(crate) fn parse_filter(d: &Option<String>) -> AppResult<DateFilter> {
    let filter = DateFilter::from_option(d.as_deref());
    match filter.describe() {
        Some(s) => {
            let parsed = date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
            Ok(DateFilter::on(parsed.format("%Y-%m-%d").to_string()))
        }
        None => Ok(filter),
    }
}
