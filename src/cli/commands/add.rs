use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::models::form::FormState;
use crate::models::shift::Shift;

/// Add a production record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        model,
        color,
        total,
        shift,
    } = cmd
    {
        let shift = Shift::from_code(shift).ok_or_else(|| AppError::InvalidShift(shift.clone()))?;

        let mut form = FormState::new(date.as_str(), model.as_str(), color.as_str(), shift, total.as_str());

        let mut store = open_store(cfg)?;
        AddLogic::apply(&mut store, &mut form)?;
    }

    Ok(())
}
