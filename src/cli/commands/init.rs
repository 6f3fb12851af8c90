use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::store::SqliteStorage;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database with its `kv_store` and `log` tables
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing prodlog…");
    println!("🗄️  Database   : {}", &db_path);

    let storage = SqliteStorage::open(&db_path)?;

    println!("✅ Database initialized at {}", &db_path);

    ttlog_quiet(
        &storage.pool().conn,
        "init",
        "",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 prodlog initialization completed!");
    Ok(())
}
