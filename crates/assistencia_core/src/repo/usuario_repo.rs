//! Usuario repository contract and SQLite implementation.
//!
//! # Invariants
//! - `nome_usuario` uniqueness is enforced by the store.
//! - The primary key is the owning person's id.
//! - Passwords are never written to logs.

use super::common::{
    delete_by_id, fetch_by_id, fetch_page, insert_row, today, update_row, Assignments, ListQuery,
    RepoResult, Table,
};
use crate::model::pessoa::PessoaId;
use crate::model::usuario::{NewUsuario, Usuario, UsuarioUpdate};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Row};

const USUARIO: Table = Table {
    name: "usuario",
    key: "id_usuario",
    columns: "id_usuario, nome_usuario, senha, data_criacao, status_conta, ultimo_login",
};

pub trait UsuarioRepository {
    fn create_usuario(&self, usuario: &NewUsuario) -> RepoResult<Usuario>;
    fn get_usuario(&self, id: PessoaId) -> RepoResult<Option<Usuario>>;
    fn list_usuarios(&self, query: &ListQuery) -> RepoResult<Vec<Usuario>>;
    fn update_usuario(&self, id: PessoaId, update: &UsuarioUpdate) -> RepoResult<Option<Usuario>>;
    /// Stamps `ultimo_login`. Absent when the user does not exist.
    fn record_login(&self, id: PessoaId, at: NaiveDateTime) -> RepoResult<Option<Usuario>>;
    fn delete_usuario(&self, id: PessoaId) -> RepoResult<bool>;
}

pub struct SqliteUsuarioRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUsuarioRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UsuarioRepository for SqliteUsuarioRepository<'_> {
    fn create_usuario(&self, usuario: &NewUsuario) -> RepoResult<Usuario> {
        let data_criacao = usuario.data_criacao.unwrap_or_else(today);
        insert_row(
            self.conn,
            &USUARIO,
            &[
                "id_usuario",
                "nome_usuario",
                "senha",
                "data_criacao",
                "status_conta",
                "ultimo_login",
            ],
            params![
                usuario.id_pessoa,
                usuario.nome_usuario,
                usuario.senha,
                data_criacao,
                usuario.status_conta,
                usuario.ultimo_login,
            ],
            parse_usuario_row,
        )
    }

    fn get_usuario(&self, id: PessoaId) -> RepoResult<Option<Usuario>> {
        fetch_by_id(self.conn, &USUARIO, id, parse_usuario_row)
    }

    fn list_usuarios(&self, query: &ListQuery) -> RepoResult<Vec<Usuario>> {
        fetch_page(self.conn, &USUARIO, query, parse_usuario_row)
    }

    fn update_usuario(&self, id: PessoaId, update: &UsuarioUpdate) -> RepoResult<Option<Usuario>> {
        let mut set = Assignments::new();
        set.set("nome_usuario", &update.nome_usuario)
            .set("senha", &update.senha)
            .set("status_conta", &update.status_conta)
            .set("ultimo_login", &update.ultimo_login);
        update_row(self.conn, &USUARIO, id, &set, parse_usuario_row)
    }

    fn record_login(&self, id: PessoaId, at: NaiveDateTime) -> RepoResult<Option<Usuario>> {
        self.update_usuario(
            id,
            &UsuarioUpdate {
                ultimo_login: Some(at),
                ..UsuarioUpdate::default()
            },
        )
    }

    fn delete_usuario(&self, id: PessoaId) -> RepoResult<bool> {
        delete_by_id(self.conn, &USUARIO, id)
    }
}

fn parse_usuario_row(row: &Row<'_>) -> RepoResult<Usuario> {
    Ok(Usuario {
        id_usuario: row.get("id_usuario")?,
        nome_usuario: row.get("nome_usuario")?,
        senha: row.get("senha")?,
        data_criacao: row.get("data_criacao")?,
        status_conta: row.get("status_conta")?,
        ultimo_login: row.get("ultimo_login")?,
    })
}
