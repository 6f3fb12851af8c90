use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::form::{FormState, Submission};
use crate::store::{RecordStore, SqliteStorage};
use crate::ui::messages::{success, warning};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(
        store: &mut RecordStore<SqliteStorage>,
        form: &mut FormState,
    ) -> AppResult<Submission> {
        let submission = form.submit_now(store)?;

        match &submission {
            Submission::Accepted(rec) => {
                ttlog_quiet(
                    &store.storage().pool().conn,
                    "add",
                    &rec.id.to_string(),
                    &format!(
                        "{} {} {} {} total={}",
                        rec.date, rec.model, rec.color, rec.shift, rec.total
                    ),
                );
                success(format!(
                    "Record {} added: {} | {} | {} | {} | {}",
                    rec.id, rec.date, rec.model, rec.color, rec.shift, rec.total
                ));
            }
            Submission::Rejected(reason) => {
                warning(format!("Nothing recorded: {reason}"));
            }
        }

        Ok(submission)
    }
}
