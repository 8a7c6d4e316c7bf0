//! Raw SQL escape hatch outside the entity mapping.
//!
//! # Responsibility
//! - Run caller-supplied SQL and return rows as ordered column-name → value
//!   maps.
//! - Offer a parameterized variant so callers do not need to splice values
//!   into the SQL text.
//!
//! # Invariants
//! - Every statement of the text runs, in order, inside one transaction when
//!   the connection is in autocommit mode; the first failure rolls all of
//!   them back and propagates.
//! - The result is the rows of the last statement that produces columns.
//!   Texts with no row-producing statement (writes, DDL, blank or
//!   comment-only text) return an empty vector.
//! - Integer values are widened to floating point when the column is declared
//!   `NUMERIC`/`DECIMAL`, or when its select-list expression names such a
//!   column (`SUM(renda_mensal)`, `valor_monetario * 12`), so
//!   `renda_mensal = 1500` reads back as `1500.0`. `COUNT(...)` is never
//!   widened.
//! - Store errors propagate unchanged.
//! - The SQL text is never logged.

use super::common::{RepoError, RepoResult};
use super::select_list::decimal_expressions;
use log::debug;
use rusqlite::types::ValueRef;
use rusqlite::{Batch, Connection, Params, Statement};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// One result row, keyed by column name in select-list order.
pub type RawRow = Map<String, Value>;

/// Executes every statement of `sql` verbatim.
///
/// The text is not escaped or validated; never build it from untrusted input.
/// Prefer [`execute_raw_query_with_params`]. In autocommit mode the text runs
/// inside its own transaction, so `BEGIN`/`COMMIT` in it fail.
pub fn execute_raw_query(conn: &Connection, sql: &str) -> RepoResult<Vec<RawRow>> {
    let tx = if conn.is_autocommit() {
        Some(conn.unchecked_transaction()?)
    } else {
        None
    };

    let mut batch = Batch::new(conn, sql);
    let mut result = Vec::new();
    let mut statements = 0usize;
    while let Some(mut stmt) = batch.next()? {
        statements += 1;
        if let Some(rows) = run_statement(conn, &mut stmt, [])? {
            result = rows;
        }
    }

    if let Some(tx) = tx {
        tx.commit()?;
    }
    debug!(
        "event=raw_query module=repo status=ok statements={} rows={}",
        statements,
        result.len()
    );
    Ok(result)
}

/// Executes a single statement with positional or named bound parameters.
///
/// # Errors
/// - [`RepoError::InvalidQuery`] when `sql` holds more than one statement;
///   nothing is executed in that case.
pub fn execute_raw_query_with_params<P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> RepoResult<Vec<RawRow>> {
    let mut batch = Batch::new(conn, sql);
    let Some(mut stmt) = batch.next()? else {
        return Ok(Vec::new());
    };
    if batch.next()?.is_some() {
        return Err(RepoError::InvalidQuery(
            "bound parameters apply to exactly one statement, found several".to_string(),
        ));
    }

    let rows = run_statement(conn, &mut stmt, params)?.unwrap_or_default();
    debug!(
        "event=raw_query module=repo status=ok statements=1 rows={}",
        rows.len()
    );
    Ok(rows)
}

/// Runs one prepared statement. `None` when it produces no columns.
fn run_statement<P: Params>(
    conn: &Connection,
    stmt: &mut Statement<'_>,
    params: P,
) -> RepoResult<Option<Vec<RawRow>>> {
    if stmt.column_count() == 0 {
        let changed = stmt.execute(params)?;
        debug!("event=raw_query_statement module=repo status=ok kind=write changed={changed}");
        return Ok(None);
    }

    let names = stmt
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>();
    let widen = decimal_flags(conn, stmt)?;

    let mut rows = stmt.query(params)?;
    let mut result = Vec::new();
    while let Some(row) = rows.next()? {
        let mut record = RawRow::new();
        for (index, (name, decimal)) in names.iter().zip(&widen).enumerate() {
            record.insert(name.clone(), json_value(row.get_ref(index)?, *decimal));
        }
        result.push(record);
    }
    Ok(Some(result))
}

/// Per result column, whether integer values should read back as floats.
fn decimal_flags(conn: &Connection, stmt: &Statement<'_>) -> RepoResult<Vec<bool>> {
    let columns = stmt.columns();
    let mut flags = columns
        .iter()
        .map(|column| is_decimal(column.decl_type()))
        .collect::<Vec<_>>();
    if columns.iter().all(|column| column.decl_type().is_some()) {
        return Ok(flags);
    }

    let Some(sql) = stmt.expanded_sql() else {
        return Ok(flags);
    };
    let decimal_columns = decimal_columns(conn)?;
    if decimal_columns.is_empty() {
        return Ok(flags);
    }

    let derived = decimal_expressions(&sql, &decimal_columns, flags.len());
    for ((flag, column), mentions_decimal) in flags.iter_mut().zip(&columns).zip(derived) {
        if column.decl_type().is_none() && mentions_decimal {
            *flag = true;
        }
    }
    Ok(flags)
}

/// Lowercased names of every `NUMERIC`/`DECIMAL` column in the store.
fn decimal_columns(conn: &Connection) -> RepoResult<HashSet<String>> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT lower(info.name)
         FROM sqlite_master AS tbl
         JOIN pragma_table_info(tbl.name) AS info
         WHERE tbl.type = 'table'
           AND (upper(info.type) LIKE 'NUMERIC%' OR upper(info.type) LIKE 'DECIMAL%');",
    )?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<HashSet<_>, _>>()?;
    Ok(names)
}

fn is_decimal(decl_type: Option<&str>) -> bool {
    decl_type
        .map(|decl| {
            let decl = decl.trim().to_ascii_uppercase();
            decl.starts_with("NUMERIC") || decl.starts_with("DECIMAL")
        })
        .unwrap_or(false)
}

fn json_value(value: ValueRef<'_>, decimal: bool) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(int) if decimal => Value::from(int as f64),
        ValueRef::Integer(int) => Value::from(int),
        ValueRef::Real(real) => Value::from(real),
        ValueRef::Text(text) => Value::String(String::from_utf8_lossy(text).into_owned()),
        ValueRef::Blob(bytes) => Value::Array(bytes.iter().copied().map(Value::from).collect()),
    }
}
