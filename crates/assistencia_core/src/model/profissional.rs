//! Professional: one-to-one extension of a person.

use super::pessoa::PessoaId;
use serde::{Deserialize, Serialize};

/// Same value as the owning `Pessoa` id.
pub type ProfissionalId = PessoaId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profissional {
    pub id_profissional: ProfissionalId,
    pub cargo: String,
    pub setor: String,
}

/// Promotes an existing person to professional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProfissional {
    pub id_pessoa: PessoaId,
    pub cargo: String,
    pub setor: String,
}

impl NewProfissional {
    pub fn new(id_pessoa: PessoaId, cargo: impl Into<String>, setor: impl Into<String>) -> Self {
        Self {
            id_pessoa,
            cargo: cargo.into(),
            setor: setor.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfissionalUpdate {
    pub cargo: Option<String>,
    pub setor: Option<String>,
}
