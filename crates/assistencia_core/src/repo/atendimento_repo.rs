//! Atendimento (service visit) repository contract and SQLite implementation.

use super::common::{
    delete_by_id, fetch_by_column, fetch_by_id, fetch_page, insert_row, update_row, Assignments,
    ListQuery, RepoResult, Table,
};
use crate::model::atendimento::{Atendimento, AtendimentoId, AtendimentoUpdate, NewAtendimento};
use crate::model::familia::FamiliaId;
use rusqlite::{params, Connection, Row};

const ATENDIMENTO: Table = Table {
    name: "atendimento",
    key: "id_atendimento",
    columns: "id_atendimento, data_atendimento, tipo_atendimento, resumo, encaminhamentos,
        id_familia, id_profissional, id_pessoa_membro",
};

pub trait AtendimentoRepository {
    fn create_atendimento(&self, atendimento: &NewAtendimento) -> RepoResult<Atendimento>;
    fn get_atendimento(&self, id: AtendimentoId) -> RepoResult<Option<Atendimento>>;
    fn list_atendimentos(&self, query: &ListQuery) -> RepoResult<Vec<Atendimento>>;
    fn list_atendimentos_by_familia(&self, id_familia: FamiliaId) -> RepoResult<Vec<Atendimento>>;
    fn update_atendimento(
        &self,
        id: AtendimentoId,
        update: &AtendimentoUpdate,
    ) -> RepoResult<Option<Atendimento>>;
    fn delete_atendimento(&self, id: AtendimentoId) -> RepoResult<bool>;
}

pub struct SqliteAtendimentoRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAtendimentoRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AtendimentoRepository for SqliteAtendimentoRepository<'_> {
    fn create_atendimento(&self, atendimento: &NewAtendimento) -> RepoResult<Atendimento> {
        insert_row(
            self.conn,
            &ATENDIMENTO,
            &[
                "data_atendimento",
                "tipo_atendimento",
                "resumo",
                "encaminhamentos",
                "id_familia",
                "id_profissional",
                "id_pessoa_membro",
            ],
            params![
                atendimento.data_atendimento,
                atendimento.tipo_atendimento,
                atendimento.resumo,
                atendimento.encaminhamentos,
                atendimento.id_familia,
                atendimento.id_profissional,
                atendimento.id_pessoa_membro,
            ],
            parse_atendimento_row,
        )
    }

    fn get_atendimento(&self, id: AtendimentoId) -> RepoResult<Option<Atendimento>> {
        fetch_by_id(self.conn, &ATENDIMENTO, id, parse_atendimento_row)
    }

    fn list_atendimentos(&self, query: &ListQuery) -> RepoResult<Vec<Atendimento>> {
        fetch_page(self.conn, &ATENDIMENTO, query, parse_atendimento_row)
    }

    fn list_atendimentos_by_familia(&self, id_familia: FamiliaId) -> RepoResult<Vec<Atendimento>> {
        fetch_by_column(
            self.conn,
            &ATENDIMENTO,
            "id_familia",
            id_familia,
            parse_atendimento_row,
        )
    }

    fn update_atendimento(
        &self,
        id: AtendimentoId,
        update: &AtendimentoUpdate,
    ) -> RepoResult<Option<Atendimento>> {
        let mut set = Assignments::new();
        set.set("data_atendimento", &update.data_atendimento)
            .set("tipo_atendimento", &update.tipo_atendimento)
            .set("resumo", &update.resumo)
            .set("encaminhamentos", &update.encaminhamentos)
            .set("id_familia", &update.id_familia)
            .set("id_profissional", &update.id_profissional)
            .set("id_pessoa_membro", &update.id_pessoa_membro);
        update_row(self.conn, &ATENDIMENTO, id, &set, parse_atendimento_row)
    }

    fn delete_atendimento(&self, id: AtendimentoId) -> RepoResult<bool> {
        delete_by_id(self.conn, &ATENDIMENTO, id)
    }
}

fn parse_atendimento_row(row: &Row<'_>) -> RepoResult<Atendimento> {
    Ok(Atendimento {
        id_atendimento: row.get("id_atendimento")?,
        data_atendimento: row.get("data_atendimento")?,
        tipo_atendimento: row.get("tipo_atendimento")?,
        resumo: row.get("resumo")?,
        encaminhamentos: row.get("encaminhamentos")?,
        id_familia: row.get("id_familia")?,
        id_profissional: row.get("id_profissional")?,
        id_pessoa_membro: row.get("id_pessoa_membro")?,
    })
}
