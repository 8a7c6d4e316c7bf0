//! Shared repository vocabulary and SQL plumbing.
//!
//! # Responsibility
//! - Define the error and pagination types every repository returns/accepts.
//! - Run the get/list/insert/update/delete statement shapes that are identical
//!   across tables, each as one committed unit of work.
//!
//! # Invariants
//! - Store errors are wrapped, never translated: the original
//!   `rusqlite::Error` stays reachable through `source()`.
//! - List order is primary key ascending, so offset windows are stable
//!   between calls without intervening writes.
//! - Log lines carry table names and ids only, never column values.

use crate::db::DbError;
use chrono::{Local, NaiveDate};
use log::debug;
use rusqlite::types::ToSql;
use rusqlite::{ffi, params, params_from_iter, Connection, ErrorCode, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for persistence and query operations.
///
/// Lookups on a missing id are not errors; they surface as `Ok(None)` or
/// `Ok(false)`.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    /// Caller-supplied SQL that cannot be run as requested.
    InvalidQuery(String),
}

impl RepoError {
    /// Returns the wrapped SQLite error, if this is a store failure.
    pub fn sqlite_error(&self) -> Option<&rusqlite::Error> {
        match self {
            Self::Db(DbError::Sqlite(err)) => Some(err),
            _ => None,
        }
    }

    /// `true` when the store rejected a duplicate value (cpf, email, ...).
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self.constraint_code(),
            Some(ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY)
        )
    }

    /// `true` when a foreign key pointed at a missing row, or a delete would
    /// orphan referencing rows.
    pub fn is_foreign_key_violation(&self) -> bool {
        self.constraint_code() == Some(ffi::SQLITE_CONSTRAINT_FOREIGNKEY)
    }

    fn constraint_code(&self) -> Option<i32> {
        match self.sqlite_error() {
            Some(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Some(err.extended_code)
            }
            _ => None,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::InvalidQuery(message) => write!(f, "invalid query: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) | Self::InvalidQuery(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Offset/limit window for list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    /// Number of rows to skip.
    pub skip: u32,
    /// Maximum rows to return.
    pub limit: u32,
}

impl ListQuery {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 100,
        }
    }
}

/// Static description of one mapped table.
pub(crate) struct Table {
    pub name: &'static str,
    pub key: &'static str,
    /// Comma-separated select list, key included.
    pub columns: &'static str,
}

pub(crate) type RowMapper<T> = fn(&Row<'_>) -> RepoResult<T>;

/// `SET` clause collected from the `Some` fields of a partial update.
pub(crate) struct Assignments<'a> {
    columns: Vec<&'static str>,
    values: Vec<&'a dyn ToSql>,
}

impl<'a> Assignments<'a> {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Adds `column = value` when the field was supplied.
    pub fn set<T: ToSql + 'a>(&mut self, column: &'static str, value: &'a Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.columns.push(column);
            self.values.push(value);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn update_sql(&self, table: &Table) -> String {
        let set_clause = self
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| format!("{column} = ?{}", index + 1))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "UPDATE {} SET {set_clause} WHERE {} = ?{};",
            table.name,
            table.key,
            self.columns.len() + 1
        )
    }
}

pub(crate) fn fetch_by_id<T>(
    conn: &Connection,
    table: &Table,
    id: i64,
    map: RowMapper<T>,
) -> RepoResult<Option<T>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM {} WHERE {} = ?1;",
        table.columns, table.name, table.key
    ))?;
    let mut rows = stmt.query([id])?;
    match rows.next()? {
        Some(row) => Ok(Some(map(row)?)),
        None => Ok(None),
    }
}

pub(crate) fn fetch_page<T>(
    conn: &Connection,
    table: &Table,
    query: &ListQuery,
    map: RowMapper<T>,
) -> RepoResult<Vec<T>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM {} ORDER BY {} ASC LIMIT ?1 OFFSET ?2;",
        table.columns, table.name, table.key
    ))?;
    let mut rows = stmt.query(params![i64::from(query.limit), i64::from(query.skip)])?;
    collect_rows(&mut rows, map)
}

/// Rows whose foreign key `column` equals `id`, primary key ascending.
pub(crate) fn fetch_by_column<T>(
    conn: &Connection,
    table: &Table,
    column: &str,
    id: i64,
    map: RowMapper<T>,
) -> RepoResult<Vec<T>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM {} WHERE {column} = ?1 ORDER BY {} ASC;",
        table.columns, table.name, table.key
    ))?;
    let mut rows = stmt.query([id])?;
    collect_rows(&mut rows, map)
}

/// Inserts one row and returns it as persisted, defaults included.
pub(crate) fn insert_row<T>(
    conn: &Connection,
    table: &Table,
    columns: &[&str],
    values: &[&dyn ToSql],
    map: RowMapper<T>,
) -> RepoResult<T> {
    let placeholders = (1..=columns.len())
        .map(|index| format!("?{index}"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({placeholders});",
        table.name,
        columns.join(", ")
    );

    let tx = conn.unchecked_transaction()?;
    tx.execute(&sql, values)?;
    let id = tx.last_insert_rowid();
    let row = fetch_by_id(&tx, table, id, map)?.ok_or_else(|| {
        RepoError::InvalidData(format!("{} row {id} missing right after insert", table.name))
    })?;
    tx.commit()?;

    debug!(
        "event=row_insert module=repo status=ok table={} id={}",
        table.name, id
    );
    Ok(row)
}

/// Applies a partial update and returns the refreshed row.
///
/// Returns `Ok(None)` when no row has the given id. An empty assignment set
/// only reloads the row.
pub(crate) fn update_row<T>(
    conn: &Connection,
    table: &Table,
    id: i64,
    assignments: &Assignments<'_>,
    map: RowMapper<T>,
) -> RepoResult<Option<T>> {
    let tx = conn.unchecked_transaction()?;
    let mut changed = 0;
    if !assignments.is_empty() {
        let mut values: Vec<&dyn ToSql> = assignments.values.iter().copied().collect();
        values.push(&id);
        changed = tx.execute(&assignments.update_sql(table), params_from_iter(values))?;
    }
    let row = fetch_by_id(&tx, table, id, map)?;
    tx.commit()?;

    debug!(
        "event=row_update module=repo status={} table={} id={} fields={} changed={}",
        if row.is_some() { "ok" } else { "not_found" },
        table.name,
        id,
        assignments.columns.len(),
        changed
    );
    Ok(row)
}

/// Deletes by primary key. `Ok(false)` when no row matched.
pub(crate) fn delete_by_id(conn: &Connection, table: &Table, id: i64) -> RepoResult<bool> {
    let tx = conn.unchecked_transaction()?;
    let changed = tx.execute(
        &format!("DELETE FROM {} WHERE {} = ?1;", table.name, table.key),
        [id],
    )?;
    tx.commit()?;

    debug!(
        "event=row_delete module=repo status={} table={} id={}",
        if changed > 0 { "ok" } else { "not_found" },
        table.name,
        id
    );
    Ok(changed > 0)
}

/// Reads a `BOOLEAN` column stored as `0/1`.
pub(crate) fn bool_column(row: &Row<'_>, table: &str, column: &str) -> RepoResult<bool> {
    match row.get::<_, i64>(column)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid boolean value `{other}` in {table}.{column}"
        ))),
    }
}

/// Local calendar day used for registration-date defaults.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn collect_rows<T>(rows: &mut rusqlite::Rows<'_>, map: RowMapper<T>) -> RepoResult<Vec<T>> {
    let mut items = Vec::new();
    while let Some(row) = rows.next()? {
        items.push(map(row)?);
    }
    Ok(items)
}
