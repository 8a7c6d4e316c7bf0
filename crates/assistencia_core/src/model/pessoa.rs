//! Person, the root identity entity.
//!
//! A person may at the same time be a family member, a professional and a
//! system user; those roles live in their own tables keyed by `id_pessoa`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type PessoaId = i64;

/// Persisted `pessoa` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pessoa {
    pub id_pessoa: PessoaId,
    pub nome_completo: String,
    pub data_nasc: Option<NaiveDate>,
    /// Unique.
    pub cpf: String,
    /// Unique when present.
    pub rg: Option<String>,
    pub genero: Option<String>,
    /// Unique.
    pub email: String,
    pub telefone: Option<String>,
}

/// Input for creating a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPessoa {
    pub nome_completo: String,
    pub data_nasc: Option<NaiveDate>,
    pub cpf: String,
    pub rg: Option<String>,
    pub genero: Option<String>,
    pub email: String,
    pub telefone: Option<String>,
}

impl NewPessoa {
    /// Builds the input from the required columns; optional ones start empty.
    pub fn new(
        nome_completo: impl Into<String>,
        cpf: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            nome_completo: nome_completo.into(),
            data_nasc: None,
            cpf: cpf.into(),
            rg: None,
            genero: None,
            email: email.into(),
            telefone: None,
        }
    }
}

/// Partial update for a person. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PessoaUpdate {
    pub nome_completo: Option<String>,
    pub data_nasc: Option<NaiveDate>,
    pub cpf: Option<String>,
    pub rg: Option<String>,
    pub genero: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
}
