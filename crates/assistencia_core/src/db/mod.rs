//! SQLite store bootstrap, schema apply and session scoping.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the case-management schema.
//! - Apply the table definitions idempotently before any data access.
//! - Hand out scoped sessions, one per logical unit of work.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Repositories must not read/write data before the schema is applied.
//! - A session never leaves a transaction open after it is dropped.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;
mod session;

pub use open::{open_db, open_db_in_memory};
pub use schema::{create_tables, latest_version};
pub use session::{Database, Session};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
