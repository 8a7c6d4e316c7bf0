//! Familia repository contract and SQLite implementation.
//!
//! # Invariants
//! - `data_cadastro` is stamped with the local current date when the caller
//!   does not supply one, and never changes afterwards.
//! - `status_vulnerabilidade` is persisted as `0/1`; any other stored value is
//!   reported as invalid data instead of being coerced.

use super::common::{
    bool_column, delete_by_id, fetch_by_id, fetch_page, insert_row, today, update_row,
    Assignments, ListQuery, RepoResult, Table,
};
use crate::model::familia::{Familia, FamiliaId, FamiliaUpdate, NewFamilia};
use rusqlite::{params, Connection, Row};

const FAMILIA: Table = Table {
    name: "familia",
    key: "id_familia",
    columns: "id_familia, nome_familia, endereco, bairro, cidade, estado, cep, telefone,
        renda_mensal, data_cadastro, status_vulnerabilidade, observacoes",
};

/// Repository interface for family CRUD operations.
pub trait FamiliaRepository {
    fn create_familia(&self, familia: &NewFamilia) -> RepoResult<Familia>;
    fn get_familia(&self, id: FamiliaId) -> RepoResult<Option<Familia>>;
    fn list_familias(&self, query: &ListQuery) -> RepoResult<Vec<Familia>>;
    fn update_familia(&self, id: FamiliaId, update: &FamiliaUpdate) -> RepoResult<Option<Familia>>;
    fn delete_familia(&self, id: FamiliaId) -> RepoResult<bool>;
}

/// SQLite-backed family repository.
pub struct SqliteFamiliaRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteFamiliaRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl FamiliaRepository for SqliteFamiliaRepository<'_> {
    fn create_familia(&self, familia: &NewFamilia) -> RepoResult<Familia> {
        let data_cadastro = familia.data_cadastro.unwrap_or_else(today);
        insert_row(
            self.conn,
            &FAMILIA,
            &[
                "nome_familia",
                "endereco",
                "bairro",
                "cidade",
                "estado",
                "cep",
                "telefone",
                "renda_mensal",
                "data_cadastro",
                "status_vulnerabilidade",
                "observacoes",
            ],
            params![
                familia.nome_familia,
                familia.endereco,
                familia.bairro,
                familia.cidade,
                familia.estado,
                familia.cep,
                familia.telefone,
                familia.renda_mensal,
                data_cadastro,
                familia.status_vulnerabilidade,
                familia.observacoes,
            ],
            parse_familia_row,
        )
    }

    fn get_familia(&self, id: FamiliaId) -> RepoResult<Option<Familia>> {
        fetch_by_id(self.conn, &FAMILIA, id, parse_familia_row)
    }

    fn list_familias(&self, query: &ListQuery) -> RepoResult<Vec<Familia>> {
        fetch_page(self.conn, &FAMILIA, query, parse_familia_row)
    }

    fn update_familia(&self, id: FamiliaId, update: &FamiliaUpdate) -> RepoResult<Option<Familia>> {
        let mut set = Assignments::new();
        set.set("nome_familia", &update.nome_familia)
            .set("endereco", &update.endereco)
            .set("bairro", &update.bairro)
            .set("cidade", &update.cidade)
            .set("estado", &update.estado)
            .set("cep", &update.cep)
            .set("telefone", &update.telefone)
            .set("renda_mensal", &update.renda_mensal)
            .set("status_vulnerabilidade", &update.status_vulnerabilidade)
            .set("observacoes", &update.observacoes);
        update_row(self.conn, &FAMILIA, id, &set, parse_familia_row)
    }

    fn delete_familia(&self, id: FamiliaId) -> RepoResult<bool> {
        delete_by_id(self.conn, &FAMILIA, id)
    }
}

fn parse_familia_row(row: &Row<'_>) -> RepoResult<Familia> {
    Ok(Familia {
        id_familia: row.get("id_familia")?,
        nome_familia: row.get("nome_familia")?,
        endereco: row.get("endereco")?,
        bairro: row.get("bairro")?,
        cidade: row.get("cidade")?,
        estado: row.get("estado")?,
        cep: row.get("cep")?,
        telefone: row.get("telefone")?,
        renda_mensal: row.get("renda_mensal")?,
        data_cadastro: row.get("data_cadastro")?,
        status_vulnerabilidade: bool_column(row, FAMILIA.name, "status_vulnerabilidade")?,
        observacoes: row.get("observacoes")?,
    })
}
