//! Necessidade (tracked need) repository contract and SQLite implementation.
//!
//! `data_registro` defaults to the local current date and is not part of the
//! partial update.

use super::common::{
    delete_by_id, fetch_by_column, fetch_by_id, fetch_page, insert_row, today, update_row,
    Assignments, ListQuery, RepoResult, Table,
};
use crate::model::familia::FamiliaId;
use crate::model::necessidade::{Necessidade, NecessidadeId, NecessidadeUpdate, NewNecessidade};
use rusqlite::{params, Connection, Row};

const NECESSIDADE: Table = Table {
    name: "necessidade",
    key: "id_necessidade",
    columns: "id_necessidade, tipo_necessidade, descricao, grau_prioridade, status_resolucao,
        data_registro, data_resolucao, id_familia",
};

pub trait NecessidadeRepository {
    fn create_necessidade(&self, necessidade: &NewNecessidade) -> RepoResult<Necessidade>;
    fn get_necessidade(&self, id: NecessidadeId) -> RepoResult<Option<Necessidade>>;
    fn list_necessidades(&self, query: &ListQuery) -> RepoResult<Vec<Necessidade>>;
    fn list_necessidades_by_familia(&self, id_familia: FamiliaId) -> RepoResult<Vec<Necessidade>>;
    fn update_necessidade(
        &self,
        id: NecessidadeId,
        update: &NecessidadeUpdate,
    ) -> RepoResult<Option<Necessidade>>;
    fn delete_necessidade(&self, id: NecessidadeId) -> RepoResult<bool>;
}

pub struct SqliteNecessidadeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNecessidadeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NecessidadeRepository for SqliteNecessidadeRepository<'_> {
    fn create_necessidade(&self, necessidade: &NewNecessidade) -> RepoResult<Necessidade> {
        let data_registro = necessidade.data_registro.unwrap_or_else(today);
        insert_row(
            self.conn,
            &NECESSIDADE,
            &[
                "tipo_necessidade",
                "descricao",
                "grau_prioridade",
                "status_resolucao",
                "data_registro",
                "data_resolucao",
                "id_familia",
            ],
            params![
                necessidade.tipo_necessidade,
                necessidade.descricao,
                necessidade.grau_prioridade,
                necessidade.status_resolucao,
                data_registro,
                necessidade.data_resolucao,
                necessidade.id_familia,
            ],
            parse_necessidade_row,
        )
    }

    fn get_necessidade(&self, id: NecessidadeId) -> RepoResult<Option<Necessidade>> {
        fetch_by_id(self.conn, &NECESSIDADE, id, parse_necessidade_row)
    }

    fn list_necessidades(&self, query: &ListQuery) -> RepoResult<Vec<Necessidade>> {
        fetch_page(self.conn, &NECESSIDADE, query, parse_necessidade_row)
    }

    fn list_necessidades_by_familia(&self, id_familia: FamiliaId) -> RepoResult<Vec<Necessidade>> {
        fetch_by_column(
            self.conn,
            &NECESSIDADE,
            "id_familia",
            id_familia,
            parse_necessidade_row,
        )
    }

    fn update_necessidade(
        &self,
        id: NecessidadeId,
        update: &NecessidadeUpdate,
    ) -> RepoResult<Option<Necessidade>> {
        let mut set = Assignments::new();
        set.set("tipo_necessidade", &update.tipo_necessidade)
            .set("descricao", &update.descricao)
            .set("grau_prioridade", &update.grau_prioridade)
            .set("status_resolucao", &update.status_resolucao)
            .set("data_resolucao", &update.data_resolucao)
            .set("id_familia", &update.id_familia);
        update_row(self.conn, &NECESSIDADE, id, &set, parse_necessidade_row)
    }

    fn delete_necessidade(&self, id: NecessidadeId) -> RepoResult<bool> {
        delete_by_id(self.conn, &NECESSIDADE, id)
    }
}

fn parse_necessidade_row(row: &Row<'_>) -> RepoResult<Necessidade> {
    Ok(Necessidade {
        id_necessidade: row.get("id_necessidade")?,
        tipo_necessidade: row.get("tipo_necessidade")?,
        descricao: row.get("descricao")?,
        grau_prioridade: row.get("grau_prioridade")?,
        status_resolucao: row.get("status_resolucao")?,
        data_registro: row.get("data_registro")?,
        data_resolucao: row.get("data_resolucao")?,
        id_familia: row.get("id_familia")?,
    })
}
