//! Family membership: which person belongs to which family, and how.
//!
//! # Invariants
//! - A person/family pair is expected to appear once, but the schema does not
//!   enforce it; duplicates are accepted and returned as separate rows.

use super::familia::FamiliaId;
use super::pessoa::PessoaId;
use serde::{Deserialize, Serialize};

pub type MembroId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembroDaFamilia {
    pub id_membro_familia: MembroId,
    pub id_pessoa: PessoaId,
    pub id_familia: FamiliaId,
    /// Relationship to the head of the household.
    pub parentesco: String,
    pub escolaridade: Option<String>,
    pub ocupacao: Option<String>,
    pub situacao_saude: Option<String>,
    /// Free-text notes on benefits received by this member.
    pub beneficios: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMembroDaFamilia {
    pub id_pessoa: PessoaId,
    pub id_familia: FamiliaId,
    pub parentesco: String,
    pub escolaridade: Option<String>,
    pub ocupacao: Option<String>,
    pub situacao_saude: Option<String>,
    pub beneficios: Option<String>,
}

impl NewMembroDaFamilia {
    pub fn new(id_pessoa: PessoaId, id_familia: FamiliaId, parentesco: impl Into<String>) -> Self {
        Self {
            id_pessoa,
            id_familia,
            parentesco: parentesco.into(),
            escolaridade: None,
            ocupacao: None,
            situacao_saude: None,
            beneficios: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembroDaFamiliaUpdate {
    pub id_pessoa: Option<PessoaId>,
    pub id_familia: Option<FamiliaId>,
    pub parentesco: Option<String>,
    pub escolaridade: Option<String>,
    pub ocupacao: Option<String>,
    pub situacao_saude: Option<String>,
    pub beneficios: Option<String>,
}
