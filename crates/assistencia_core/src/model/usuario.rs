//! System user: one-to-one extension of a person with login credentials.
//!
//! # Invariants
//! - `nome_usuario` is unique across users.
//! - `senha` is stored as given; `Debug` output redacts it.

use super::pessoa::PessoaId;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usuario {
    /// Same value as the owning `Pessoa` id.
    pub id_usuario: PessoaId,
    pub nome_usuario: String,
    #[serde(skip_serializing)]
    pub senha: String,
    pub data_criacao: NaiveDate,
    pub status_conta: String,
    pub ultimo_login: Option<NaiveDateTime>,
}

impl Debug for Usuario {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Usuario")
            .field("id_usuario", &self.id_usuario)
            .field("nome_usuario", &self.nome_usuario)
            .field("senha", &"<redacted>")
            .field("data_criacao", &self.data_criacao)
            .field("status_conta", &self.status_conta)
            .field("ultimo_login", &self.ultimo_login)
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUsuario {
    pub id_pessoa: PessoaId,
    pub nome_usuario: String,
    #[serde(skip_serializing)]
    pub senha: String,
    pub status_conta: String,
    /// `None` stamps the local current date at insert time.
    pub data_criacao: Option<NaiveDate>,
    pub ultimo_login: Option<NaiveDateTime>,
}

impl NewUsuario {
    pub fn new(
        id_pessoa: PessoaId,
        nome_usuario: impl Into<String>,
        senha: impl Into<String>,
        status_conta: impl Into<String>,
    ) -> Self {
        Self {
            id_pessoa,
            nome_usuario: nome_usuario.into(),
            senha: senha.into(),
            status_conta: status_conta.into(),
            data_criacao: None,
            ultimo_login: None,
        }
    }
}

impl Debug for NewUsuario {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUsuario")
            .field("id_pessoa", &self.id_pessoa)
            .field("nome_usuario", &self.nome_usuario)
            .field("senha", &"<redacted>")
            .field("status_conta", &self.status_conta)
            .field("data_criacao", &self.data_criacao)
            .field("ultimo_login", &self.ultimo_login)
            .finish()
    }
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsuarioUpdate {
    pub nome_usuario: Option<String>,
    #[serde(skip_serializing)]
    pub senha: Option<String>,
    pub status_conta: Option<String>,
    pub ultimo_login: Option<NaiveDateTime>,
}

impl Debug for UsuarioUpdate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsuarioUpdate")
            .field("nome_usuario", &self.nome_usuario)
            .field("senha", &self.senha.as_ref().map(|_| "<redacted>"))
            .field("status_conta", &self.status_conta)
            .field("ultimo_login", &self.ultimo_login)
            .finish()
    }
}
