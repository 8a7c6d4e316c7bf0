//! Family-membership repository contract and SQLite implementation.
//!
//! Besides CRUD, exposes the two directions of the Pessoa/Familia association
//! as explicit foreign-key queries.

use super::common::{
    delete_by_id, fetch_by_column, fetch_by_id, fetch_page, insert_row, update_row, Assignments,
    ListQuery, RepoResult, Table,
};
use crate::model::familia::FamiliaId;
use crate::model::membro::{MembroDaFamilia, MembroDaFamiliaUpdate, MembroId, NewMembroDaFamilia};
use crate::model::pessoa::PessoaId;
use rusqlite::{params, Connection, Row};

const MEMBRO: Table = Table {
    name: "membro_da_familia",
    key: "id_membro_familia",
    columns: "id_membro_familia, id_pessoa, id_familia, parentesco, escolaridade, ocupacao,
        situacao_saude, beneficios",
};

pub trait MembroDaFamiliaRepository {
    fn create_membro(&self, membro: &NewMembroDaFamilia) -> RepoResult<MembroDaFamilia>;
    fn get_membro(&self, id: MembroId) -> RepoResult<Option<MembroDaFamilia>>;
    fn list_membros(&self, query: &ListQuery) -> RepoResult<Vec<MembroDaFamilia>>;
    /// Members of one family, oldest membership first.
    fn list_membros_by_familia(&self, id_familia: FamiliaId) -> RepoResult<Vec<MembroDaFamilia>>;
    /// Every family membership held by one person.
    fn list_membros_by_pessoa(&self, id_pessoa: PessoaId) -> RepoResult<Vec<MembroDaFamilia>>;
    fn update_membro(
        &self,
        id: MembroId,
        update: &MembroDaFamiliaUpdate,
    ) -> RepoResult<Option<MembroDaFamilia>>;
    fn delete_membro(&self, id: MembroId) -> RepoResult<bool>;
}

pub struct SqliteMembroDaFamiliaRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMembroDaFamiliaRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl MembroDaFamiliaRepository for SqliteMembroDaFamiliaRepository<'_> {
    fn create_membro(&self, membro: &NewMembroDaFamilia) -> RepoResult<MembroDaFamilia> {
        insert_row(
            self.conn,
            &MEMBRO,
            &[
                "id_pessoa",
                "id_familia",
                "parentesco",
                "escolaridade",
                "ocupacao",
                "situacao_saude",
                "beneficios",
            ],
            params![
                membro.id_pessoa,
                membro.id_familia,
                membro.parentesco,
                membro.escolaridade,
                membro.ocupacao,
                membro.situacao_saude,
                membro.beneficios,
            ],
            parse_membro_row,
        )
    }

    fn get_membro(&self, id: MembroId) -> RepoResult<Option<MembroDaFamilia>> {
        fetch_by_id(self.conn, &MEMBRO, id, parse_membro_row)
    }

    fn list_membros(&self, query: &ListQuery) -> RepoResult<Vec<MembroDaFamilia>> {
        fetch_page(self.conn, &MEMBRO, query, parse_membro_row)
    }

    fn list_membros_by_familia(&self, id_familia: FamiliaId) -> RepoResult<Vec<MembroDaFamilia>> {
        fetch_by_column(self.conn, &MEMBRO, "id_familia", id_familia, parse_membro_row)
    }

    fn list_membros_by_pessoa(&self, id_pessoa: PessoaId) -> RepoResult<Vec<MembroDaFamilia>> {
        fetch_by_column(self.conn, &MEMBRO, "id_pessoa", id_pessoa, parse_membro_row)
    }

    fn update_membro(
        &self,
        id: MembroId,
        update: &MembroDaFamiliaUpdate,
    ) -> RepoResult<Option<MembroDaFamilia>> {
        let mut set = Assignments::new();
        set.set("id_pessoa", &update.id_pessoa)
            .set("id_familia", &update.id_familia)
            .set("parentesco", &update.parentesco)
            .set("escolaridade", &update.escolaridade)
            .set("ocupacao", &update.ocupacao)
            .set("situacao_saude", &update.situacao_saude)
            .set("beneficios", &update.beneficios);
        update_row(self.conn, &MEMBRO, id, &set, parse_membro_row)
    }

    fn delete_membro(&self, id: MembroId) -> RepoResult<bool> {
        delete_by_id(self.conn, &MEMBRO, id)
    }
}

fn parse_membro_row(row: &Row<'_>) -> RepoResult<MembroDaFamilia> {
    Ok(MembroDaFamilia {
        id_membro_familia: row.get("id_membro_familia")?,
        id_pessoa: row.get("id_pessoa")?,
        id_familia: row.get("id_familia")?,
        parentesco: row.get("parentesco")?,
        escolaridade: row.get("escolaridade")?,
        ocupacao: row.get("ocupacao")?,
        situacao_saude: row.get("situacao_saude")?,
        beneficios: row.get("beneficios")?,
    })
}
