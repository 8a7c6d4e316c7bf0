//! Logged incident involving a family.

use super::familia::FamiliaId;
use super::profissional::ProfissionalId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type OcorrenciaId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ocorrencia {
    pub id_ocorrencia: OcorrenciaId,
    pub data_ocorrencia: NaiveDateTime,
    pub tipo_ocorrencia: String,
    pub descricao: Option<String>,
    /// Professional who registered the incident, when known.
    pub id_profissional: Option<ProfissionalId>,
    pub id_familia: FamiliaId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOcorrencia {
    pub data_ocorrencia: NaiveDateTime,
    pub tipo_ocorrencia: String,
    pub descricao: Option<String>,
    pub id_profissional: Option<ProfissionalId>,
    pub id_familia: FamiliaId,
}

impl NewOcorrencia {
    pub fn new(
        data_ocorrencia: NaiveDateTime,
        tipo_ocorrencia: impl Into<String>,
        id_familia: FamiliaId,
    ) -> Self {
        Self {
            data_ocorrencia,
            tipo_ocorrencia: tipo_ocorrencia.into(),
            descricao: None,
            id_profissional: None,
            id_familia,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcorrenciaUpdate {
    pub data_ocorrencia: Option<NaiveDateTime>,
    pub tipo_ocorrencia: Option<String>,
    pub descricao: Option<String>,
    pub id_profissional: Option<ProfissionalId>,
    pub id_familia: Option<FamiliaId>,
}
