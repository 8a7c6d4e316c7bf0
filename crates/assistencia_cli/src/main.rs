//! CLI smoke entry point.
//!
//! # Responsibility
//! - Open the configured store and report crate and schema versions.
//! - Optionally run one SQL statement and print result rows as JSON lines.
//!
//! Usage: `assistencia_cli [SQL]`. Configuration comes from `DATABASE_URL`
//! and the `ASSISTENCIA_*` variables (or a `.env` file).

use assistencia_core::{
    core_version, execute_raw_query, init_logging_from, latest_version, AppConfig, Database,
};
use log::info;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err((code, message)) => {
            eprintln!("error: {message}");
            ExitCode::from(code)
        }
    }
}

fn run() -> Result<(), (u8, String)> {
    let config = AppConfig::from_env().map_err(|err| (2, err.to_string()))?;
    init_logging_from(&config.log).map_err(|err| (2, err))?;

    let db = Database::open(&config.db).map_err(|err| (1, err.to_string()))?;
    println!("assistencia_core version={}", core_version());
    println!("assistencia_core schema_version={}", latest_version());

    let Some(sql) = std::env::args().nth(1) else {
        return Ok(());
    };

    let rows = execute_raw_query(db.connection(), &sql).map_err(|err| (1, err.to_string()))?;
    for row in &rows {
        let line = serde_json::to_string(row).map_err(|err| (1, err.to_string()))?;
        println!("{line}");
    }
    info!("event=cli_query module=cli status=ok rows={}", rows.len());
    Ok(())
}
