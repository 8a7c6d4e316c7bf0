//! Ocorrencia (incident) repository contract and SQLite implementation.

use super::common::{
    delete_by_id, fetch_by_column, fetch_by_id, fetch_page, insert_row, update_row, Assignments,
    ListQuery, RepoResult, Table,
};
use crate::model::familia::FamiliaId;
use crate::model::ocorrencia::{NewOcorrencia, Ocorrencia, OcorrenciaId, OcorrenciaUpdate};
use rusqlite::{params, Connection, Row};

const OCORRENCIA: Table = Table {
    name: "ocorrencia",
    key: "id_ocorrencia",
    columns: "id_ocorrencia, data_ocorrencia, tipo_ocorrencia, descricao, id_profissional,
        id_familia",
};

pub trait OcorrenciaRepository {
    fn create_ocorrencia(&self, ocorrencia: &NewOcorrencia) -> RepoResult<Ocorrencia>;
    fn get_ocorrencia(&self, id: OcorrenciaId) -> RepoResult<Option<Ocorrencia>>;
    fn list_ocorrencias(&self, query: &ListQuery) -> RepoResult<Vec<Ocorrencia>>;
    fn list_ocorrencias_by_familia(&self, id_familia: FamiliaId) -> RepoResult<Vec<Ocorrencia>>;
    fn update_ocorrencia(
        &self,
        id: OcorrenciaId,
        update: &OcorrenciaUpdate,
    ) -> RepoResult<Option<Ocorrencia>>;
    fn delete_ocorrencia(&self, id: OcorrenciaId) -> RepoResult<bool>;
}

pub struct SqliteOcorrenciaRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteOcorrenciaRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl OcorrenciaRepository for SqliteOcorrenciaRepository<'_> {
    fn create_ocorrencia(&self, ocorrencia: &NewOcorrencia) -> RepoResult<Ocorrencia> {
        insert_row(
            self.conn,
            &OCORRENCIA,
            &[
                "data_ocorrencia",
                "tipo_ocorrencia",
                "descricao",
                "id_profissional",
                "id_familia",
            ],
            params![
                ocorrencia.data_ocorrencia,
                ocorrencia.tipo_ocorrencia,
                ocorrencia.descricao,
                ocorrencia.id_profissional,
                ocorrencia.id_familia,
            ],
            parse_ocorrencia_row,
        )
    }

    fn get_ocorrencia(&self, id: OcorrenciaId) -> RepoResult<Option<Ocorrencia>> {
        fetch_by_id(self.conn, &OCORRENCIA, id, parse_ocorrencia_row)
    }

    fn list_ocorrencias(&self, query: &ListQuery) -> RepoResult<Vec<Ocorrencia>> {
        fetch_page(self.conn, &OCORRENCIA, query, parse_ocorrencia_row)
    }

    fn list_ocorrencias_by_familia(&self, id_familia: FamiliaId) -> RepoResult<Vec<Ocorrencia>> {
        fetch_by_column(
            self.conn,
            &OCORRENCIA,
            "id_familia",
            id_familia,
            parse_ocorrencia_row,
        )
    }

    fn update_ocorrencia(
        &self,
        id: OcorrenciaId,
        update: &OcorrenciaUpdate,
    ) -> RepoResult<Option<Ocorrencia>> {
        let mut set = Assignments::new();
        set.set("data_ocorrencia", &update.data_ocorrencia)
            .set("tipo_ocorrencia", &update.tipo_ocorrencia)
            .set("descricao", &update.descricao)
            .set("id_profissional", &update.id_profissional)
            .set("id_familia", &update.id_familia);
        update_row(self.conn, &OCORRENCIA, id, &set, parse_ocorrencia_row)
    }

    fn delete_ocorrencia(&self, id: OcorrenciaId) -> RepoResult<bool> {
        delete_by_id(self.conn, &OCORRENCIA, id)
    }
}

fn parse_ocorrencia_row(row: &Row<'_>) -> RepoResult<Ocorrencia> {
    Ok(Ocorrencia {
        id_ocorrencia: row.get("id_ocorrencia")?,
        data_ocorrencia: row.get("data_ocorrencia")?,
        tipo_ocorrencia: row.get("tipo_ocorrencia")?,
        descricao: row.get("descricao")?,
        id_profissional: row.get("id_profissional")?,
        id_familia: row.get("id_familia")?,
    })
}
