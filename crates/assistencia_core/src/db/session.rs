//! Store handle and scoped sessions.
//!
//! # Responsibility
//! - Own the single bootstrapped connection ("engine") for a process or test.
//! - Produce one [`Session`] per logical unit of work.
//!
//! # Invariants
//! - `Database` is constructed explicitly and passed by reference; there is no
//!   process-global store state.
//! - Only one session is alive at a time (`session` borrows the handle
//!   mutably).
//! - Dropping a session rolls back any transaction it left open.

use super::open::{open_file, open_memory, DEFAULT_BUSY_TIMEOUT};
use super::schema::create_tables;
use super::DbResult;
use crate::config::{DbConfig, DbLocation};
use log::{debug, warn};
use rusqlite::Connection;
use std::ops::Deref;
use std::time::Instant;

/// Explicitly constructed store handle.
pub struct Database {
    conn: Connection,
    next_session_id: u64,
}

impl Database {
    /// Opens the store described by `config` and applies the schema.
    pub fn open(config: &DbConfig) -> DbResult<Self> {
        let conn = match &config.location {
            DbLocation::Memory => open_memory(config.busy_timeout)?,
            DbLocation::File(path) => open_file(path, config.busy_timeout)?,
        };
        Ok(Self::from_connection(conn))
    }

    /// Opens a private in-memory store with the schema applied.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self::from_connection(open_memory(DEFAULT_BUSY_TIMEOUT)?))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn,
            next_session_id: 1,
        }
    }

    /// Re-applies the table definitions. Idempotent.
    pub fn create_tables(&mut self) -> DbResult<()> {
        create_tables(&mut self.conn)
    }

    /// Read-only access to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Starts a scoped session for one unit of work.
    pub fn session(&mut self) -> Session<'_> {
        let id = self.next_session_id;
        self.next_session_id += 1;
        debug!("event=session_open module=db status=ok session_id={id}");
        Session {
            conn: &self.conn,
            id,
            started_at: Instant::now(),
        }
    }

    /// Runs `work` inside a fresh session.
    ///
    /// The session is released on every exit path, including when `work`
    /// returns an error.
    pub fn with_session<T, E>(
        &mut self,
        work: impl FnOnce(&Session<'_>) -> Result<T, E>,
    ) -> Result<T, E> {
        let session = self.session();
        work(&session)
    }
}

/// One logical unit of work against the store.
///
/// Dereferences to [`Connection`] so repositories can be built from it.
pub struct Session<'db> {
    conn: &'db Connection,
    id: u64,
    started_at: Instant,
}

impl Session<'_> {
    /// Monotonic id within the owning [`Database`], for log correlation.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Releases the session explicitly. Equivalent to dropping it.
    pub fn close(self) {}
}

impl Deref for Session<'_> {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        self.conn
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        if !self.conn.is_autocommit() {
            warn!(
                "event=session_close module=db status=rollback session_id={}",
                self.id
            );
            if let Err(err) = self.conn.execute_batch("ROLLBACK;") {
                warn!(
                    "event=session_close module=db status=error session_id={} error={}",
                    self.id, err
                );
            }
        }
        debug!(
            "event=session_close module=db status=ok session_id={} duration_ms={}",
            self.id,
            self.started_at.elapsed().as_millis()
        );
    }
}
