//! Beneficio (benefit grant) repository contract and SQLite implementation.

use super::common::{
    delete_by_id, fetch_by_column, fetch_by_id, fetch_page, insert_row, update_row, Assignments,
    ListQuery, RepoResult, Table,
};
use crate::model::beneficio::{Beneficio, BeneficioId, BeneficioUpdate, NewBeneficio};
use crate::model::familia::FamiliaId;
use rusqlite::{params, Connection, Row};

const BENEFICIO: Table = Table {
    name: "beneficio",
    key: "id_beneficio",
    columns: "id_beneficio, tipo_beneficio, valor_monetario, data_inicio, data_fim, observacoes,
        id_familia, id_pessoa_membro",
};

pub trait BeneficioRepository {
    fn create_beneficio(&self, beneficio: &NewBeneficio) -> RepoResult<Beneficio>;
    fn get_beneficio(&self, id: BeneficioId) -> RepoResult<Option<Beneficio>>;
    fn list_beneficios(&self, query: &ListQuery) -> RepoResult<Vec<Beneficio>>;
    fn list_beneficios_by_familia(&self, id_familia: FamiliaId) -> RepoResult<Vec<Beneficio>>;
    fn update_beneficio(
        &self,
        id: BeneficioId,
        update: &BeneficioUpdate,
    ) -> RepoResult<Option<Beneficio>>;
    fn delete_beneficio(&self, id: BeneficioId) -> RepoResult<bool>;
}

pub struct SqliteBeneficioRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBeneficioRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BeneficioRepository for SqliteBeneficioRepository<'_> {
    fn create_beneficio(&self, beneficio: &NewBeneficio) -> RepoResult<Beneficio> {
        insert_row(
            self.conn,
            &BENEFICIO,
            &[
                "tipo_beneficio",
                "valor_monetario",
                "data_inicio",
                "data_fim",
                "observacoes",
                "id_familia",
                "id_pessoa_membro",
            ],
            params![
                beneficio.tipo_beneficio,
                beneficio.valor_monetario,
                beneficio.data_inicio,
                beneficio.data_fim,
                beneficio.observacoes,
                beneficio.id_familia,
                beneficio.id_pessoa_membro,
            ],
            parse_beneficio_row,
        )
    }

    fn get_beneficio(&self, id: BeneficioId) -> RepoResult<Option<Beneficio>> {
        fetch_by_id(self.conn, &BENEFICIO, id, parse_beneficio_row)
    }

    fn list_beneficios(&self, query: &ListQuery) -> RepoResult<Vec<Beneficio>> {
        fetch_page(self.conn, &BENEFICIO, query, parse_beneficio_row)
    }

    fn list_beneficios_by_familia(&self, id_familia: FamiliaId) -> RepoResult<Vec<Beneficio>> {
        fetch_by_column(
            self.conn,
            &BENEFICIO,
            "id_familia",
            id_familia,
            parse_beneficio_row,
        )
    }

    fn update_beneficio(
        &self,
        id: BeneficioId,
        update: &BeneficioUpdate,
    ) -> RepoResult<Option<Beneficio>> {
        let mut set = Assignments::new();
        set.set("tipo_beneficio", &update.tipo_beneficio)
            .set("valor_monetario", &update.valor_monetario)
            .set("data_inicio", &update.data_inicio)
            .set("data_fim", &update.data_fim)
            .set("observacoes", &update.observacoes)
            .set("id_familia", &update.id_familia)
            .set("id_pessoa_membro", &update.id_pessoa_membro);
        update_row(self.conn, &BENEFICIO, id, &set, parse_beneficio_row)
    }

    fn delete_beneficio(&self, id: BeneficioId) -> RepoResult<bool> {
        delete_by_id(self.conn, &BENEFICIO, id)
    }
}

fn parse_beneficio_row(row: &Row<'_>) -> RepoResult<Beneficio> {
    Ok(Beneficio {
        id_beneficio: row.get("id_beneficio")?,
        tipo_beneficio: row.get("tipo_beneficio")?,
        valor_monetario: row.get("valor_monetario")?,
        data_inicio: row.get("data_inicio")?,
        data_fim: row.get("data_fim")?,
        observacoes: row.get("observacoes")?,
        id_familia: row.get("id_familia")?,
        id_pessoa_membro: row.get("id_pessoa_membro")?,
    })
}
