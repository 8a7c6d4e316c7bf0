//! Table definitions and the idempotent schema apply.
//!
//! # Invariants
//! - The DDL only uses `IF NOT EXISTS`, so re-applying it is a no-op.
//! - The applied version is mirrored to `PRAGMA user_version`.
//! - A store stamped with a newer version than this binary knows is rejected
//!   instead of being written to.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

const SCHEMA_VERSION: u32 = 1;
const SCHEMA_SQL: &str = include_str!("0001_init.sql");

/// Every table created by [`create_tables`], in dependency order.
pub const TABLES: &[&str] = &[
    "pessoa",
    "familia",
    "membro_da_familia",
    "profissional",
    "usuario",
    "perfil",
    "permissao",
    "usuario_perfil",
    "perfil_permissao",
    "atendimento",
    "beneficio",
    "necessidade",
    "ocorrencia",
];

/// Returns the schema version written by this binary.
pub fn latest_version() -> u32 {
    SCHEMA_VERSION
}

/// Creates every table, constraint and index that does not exist yet.
///
/// Safe to call on every startup. The DDL runs in one transaction, so a
/// failure leaves the store untouched.
pub fn create_tables(conn: &mut Connection) -> DbResult<()> {
    let current_version = current_user_version(conn)?;

    if current_version > SCHEMA_VERSION {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: SCHEMA_VERSION,
        });
    }

    if current_version == SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA_SQL)?;
    tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    tx.commit()?;

    info!(
        "event=schema_apply module=db status=ok from_version={} to_version={} tables={}",
        current_version,
        SCHEMA_VERSION,
        TABLES.len()
    );
    Ok(())
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
