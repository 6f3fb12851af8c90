use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::store::{RecordStore, SqliteStorage};
use crate::ui::messages::{info, success};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete by id. An unknown id is not an error.
    pub fn apply(store: &mut RecordStore<SqliteStorage>, id: i64) -> AppResult<bool> {
        let removed = store.delete(id)?;

        if removed {
            ttlog_quiet(
                &store.storage().pool().conn,
                "del",
                &id.to_string(),
                "Record deleted",
            );
            success(format!("Record {id} has been deleted."));
        } else {
            info(format!("No record with id {id}."));
        }

        Ok(removed)
    }
}
