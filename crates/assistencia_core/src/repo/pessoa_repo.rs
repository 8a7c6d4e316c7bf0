//! Pessoa repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over the `pessoa` table.
//!
//! # Invariants
//! - `cpf`, `rg` and `email` uniqueness is enforced by the store; duplicates
//!   surface as [`RepoError::is_unique_violation`](super::RepoError).
//! - Deleting a person still referenced as member, professional or user fails
//!   with the store's foreign-key error.

use super::common::{
    delete_by_id, fetch_by_id, fetch_page, insert_row, update_row, Assignments, ListQuery,
    RepoResult, Table,
};
use crate::model::pessoa::{NewPessoa, Pessoa, PessoaId, PessoaUpdate};
use rusqlite::{params, Connection, Row};

const PESSOA: Table = Table {
    name: "pessoa",
    key: "id_pessoa",
    columns: "id_pessoa, nome_completo, data_nasc, cpf, rg, genero, email, telefone",
};

/// Repository interface for person CRUD operations.
pub trait PessoaRepository {
    fn create_pessoa(&self, pessoa: &NewPessoa) -> RepoResult<Pessoa>;
    fn get_pessoa(&self, id: PessoaId) -> RepoResult<Option<Pessoa>>;
    fn list_pessoas(&self, query: &ListQuery) -> RepoResult<Vec<Pessoa>>;
    fn update_pessoa(&self, id: PessoaId, update: &PessoaUpdate) -> RepoResult<Option<Pessoa>>;
    fn delete_pessoa(&self, id: PessoaId) -> RepoResult<bool>;
}

/// SQLite-backed person repository.
pub struct SqlitePessoaRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePessoaRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PessoaRepository for SqlitePessoaRepository<'_> {
    fn create_pessoa(&self, pessoa: &NewPessoa) -> RepoResult<Pessoa> {
        insert_row(
            self.conn,
            &PESSOA,
            &[
                "nome_completo",
                "data_nasc",
                "cpf",
                "rg",
                "genero",
                "email",
                "telefone",
            ],
            params![
                pessoa.nome_completo,
                pessoa.data_nasc,
                pessoa.cpf,
                pessoa.rg,
                pessoa.genero,
                pessoa.email,
                pessoa.telefone,
            ],
            parse_pessoa_row,
        )
    }

    fn get_pessoa(&self, id: PessoaId) -> RepoResult<Option<Pessoa>> {
        fetch_by_id(self.conn, &PESSOA, id, parse_pessoa_row)
    }

    fn list_pessoas(&self, query: &ListQuery) -> RepoResult<Vec<Pessoa>> {
        fetch_page(self.conn, &PESSOA, query, parse_pessoa_row)
    }

    fn update_pessoa(&self, id: PessoaId, update: &PessoaUpdate) -> RepoResult<Option<Pessoa>> {
        let mut set = Assignments::new();
        set.set("nome_completo", &update.nome_completo)
            .set("data_nasc", &update.data_nasc)
            .set("cpf", &update.cpf)
            .set("rg", &update.rg)
            .set("genero", &update.genero)
            .set("email", &update.email)
            .set("telefone", &update.telefone);
        update_row(self.conn, &PESSOA, id, &set, parse_pessoa_row)
    }

    fn delete_pessoa(&self, id: PessoaId) -> RepoResult<bool> {
        delete_by_id(self.conn, &PESSOA, id)
    }
}

fn parse_pessoa_row(row: &Row<'_>) -> RepoResult<Pessoa> {
    Ok(Pessoa {
        id_pessoa: row.get("id_pessoa")?,
        nome_completo: row.get("nome_completo")?,
        data_nasc: row.get("data_nasc")?,
        cpf: row.get("cpf")?,
        rg: row.get("rg")?,
        genero: row.get("genero")?,
        email: row.get("email")?,
        telefone: row.get("telefone")?,
    })
}
