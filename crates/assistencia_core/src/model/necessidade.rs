//! Tracked unmet need of a family.
//!
//! Priority and resolution status are free strings; the schema does not
//! constrain their values.

use super::familia::FamiliaId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type NecessidadeId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Necessidade {
    pub id_necessidade: NecessidadeId,
    pub tipo_necessidade: String,
    pub descricao: Option<String>,
    pub grau_prioridade: String,
    pub status_resolucao: String,
    pub data_registro: NaiveDate,
    pub data_resolucao: Option<NaiveDate>,
    pub id_familia: FamiliaId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNecessidade {
    pub tipo_necessidade: String,
    pub descricao: Option<String>,
    pub grau_prioridade: String,
    pub status_resolucao: String,
    /// `None` stamps the local current date at insert time.
    pub data_registro: Option<NaiveDate>,
    pub data_resolucao: Option<NaiveDate>,
    pub id_familia: FamiliaId,
}

impl NewNecessidade {
    pub fn new(
        tipo_necessidade: impl Into<String>,
        grau_prioridade: impl Into<String>,
        status_resolucao: impl Into<String>,
        id_familia: FamiliaId,
    ) -> Self {
        Self {
            tipo_necessidade: tipo_necessidade.into(),
            descricao: None,
            grau_prioridade: grau_prioridade.into(),
            status_resolucao: status_resolucao.into(),
            data_registro: None,
            data_resolucao: None,
            id_familia,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NecessidadeUpdate {
    pub tipo_necessidade: Option<String>,
    pub descricao: Option<String>,
    pub grau_prioridade: Option<String>,
    pub status_resolucao: Option<String>,
    pub data_resolucao: Option<NaiveDate>,
    pub id_familia: Option<FamiliaId>,
}
