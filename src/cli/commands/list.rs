use crate::cli::commands::{open_store, parse_filter};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::view;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date } = cmd {
        let filter = parse_filter(date)?;
        let store = open_store(cfg)?;

        print!(
            "{}",
            view::render(store.all(), &filter, cfg.language.labels(), cfg.chart_width)
        );
    }
    Ok(())
}
