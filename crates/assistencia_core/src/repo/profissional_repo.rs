//! Profissional repository contract and SQLite implementation.
//!
//! # Invariants
//! - The primary key is the owning person's id; creating a professional for a
//!   missing person fails with a foreign-key error, and creating it twice
//!   fails with a primary-key violation.

use super::common::{
    delete_by_id, fetch_by_id, fetch_page, insert_row, update_row, Assignments, ListQuery,
    RepoResult, Table,
};
use crate::model::profissional::{
    NewProfissional, Profissional, ProfissionalId, ProfissionalUpdate,
};
use rusqlite::{params, Connection, Row};

const PROFISSIONAL: Table = Table {
    name: "profissional",
    key: "id_profissional",
    columns: "id_profissional, cargo, setor",
};

pub trait ProfissionalRepository {
    fn create_profissional(&self, profissional: &NewProfissional) -> RepoResult<Profissional>;
    fn get_profissional(&self, id: ProfissionalId) -> RepoResult<Option<Profissional>>;
    fn list_profissionais(&self, query: &ListQuery) -> RepoResult<Vec<Profissional>>;
    fn update_profissional(
        &self,
        id: ProfissionalId,
        update: &ProfissionalUpdate,
    ) -> RepoResult<Option<Profissional>>;
    fn delete_profissional(&self, id: ProfissionalId) -> RepoResult<bool>;
}

pub struct SqliteProfissionalRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProfissionalRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProfissionalRepository for SqliteProfissionalRepository<'_> {
    fn create_profissional(&self, profissional: &NewProfissional) -> RepoResult<Profissional> {
        insert_row(
            self.conn,
            &PROFISSIONAL,
            &["id_profissional", "cargo", "setor"],
            params![profissional.id_pessoa, profissional.cargo, profissional.setor],
            parse_profissional_row,
        )
    }

    fn get_profissional(&self, id: ProfissionalId) -> RepoResult<Option<Profissional>> {
        fetch_by_id(self.conn, &PROFISSIONAL, id, parse_profissional_row)
    }

    fn list_profissionais(&self, query: &ListQuery) -> RepoResult<Vec<Profissional>> {
        fetch_page(self.conn, &PROFISSIONAL, query, parse_profissional_row)
    }

    fn update_profissional(
        &self,
        id: ProfissionalId,
        update: &ProfissionalUpdate,
    ) -> RepoResult<Option<Profissional>> {
        let mut set = Assignments::new();
        set.set("cargo", &update.cargo).set("setor", &update.setor);
        update_row(self.conn, &PROFISSIONAL, id, &set, parse_profissional_row)
    }

    fn delete_profissional(&self, id: ProfissionalId) -> RepoResult<bool> {
        delete_by_id(self.conn, &PROFISSIONAL, id)
    }
}

fn parse_profissional_row(row: &Row<'_>) -> RepoResult<Profissional> {
    Ok(Profissional {
        id_profissional: row.get("id_profissional")?,
        cargo: row.get("cargo")?,
        setor: row.get("setor")?,
    })
}
