use crate::cli::commands::{open_store, parse_filter};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportOutcome, ExportRequest};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        date,
        dir,
        format,
        no_header_rows,
    } = cmd
    {
        let filter = parse_filter(date)?;
        let store = open_store(cfg)?;

        let mut options = cfg.export_options();
        if *no_header_rows {
            options.header_rows = false;
        }

        let request = ExportRequest {
            format: *format,
            dir: expand_tilde(dir.as_deref().unwrap_or(&cfg.export_dir)),
            options,
            language: cfg.language,
        };

        match ExportLogic::export(store.all(), &filter, &request)? {
            ExportOutcome::NoData => warning(cfg.language.labels().no_data),
            ExportOutcome::Written { path, rows } => ttlog_quiet(
                &store.storage().pool().conn,
                "export",
                format.as_str(),
                &format!("{} rows written to {}", rows, path.display()),
            ),
        }
    }
    Ok(())
}
