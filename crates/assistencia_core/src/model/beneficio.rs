//! Benefit grant with a monetary amount and a validity window.

use super::familia::FamiliaId;
use super::pessoa::PessoaId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type BeneficioId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beneficio {
    pub id_beneficio: BeneficioId,
    pub tipo_beneficio: String,
    /// `NUMERIC(10, 2)` in the schema.
    pub valor_monetario: Option<f64>,
    pub data_inicio: NaiveDate,
    /// Open-ended grant when `None`.
    pub data_fim: Option<NaiveDate>,
    pub observacoes: Option<String>,
    pub id_familia: FamiliaId,
    pub id_pessoa_membro: Option<PessoaId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBeneficio {
    pub tipo_beneficio: String,
    pub valor_monetario: Option<f64>,
    pub data_inicio: NaiveDate,
    pub data_fim: Option<NaiveDate>,
    pub observacoes: Option<String>,
    pub id_familia: FamiliaId,
    pub id_pessoa_membro: Option<PessoaId>,
}

impl NewBeneficio {
    pub fn new(
        tipo_beneficio: impl Into<String>,
        data_inicio: NaiveDate,
        id_familia: FamiliaId,
    ) -> Self {
        Self {
            tipo_beneficio: tipo_beneficio.into(),
            valor_monetario: None,
            data_inicio,
            data_fim: None,
            observacoes: None,
            id_familia,
            id_pessoa_membro: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeneficioUpdate {
    pub tipo_beneficio: Option<String>,
    pub valor_monetario: Option<f64>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
    pub observacoes: Option<String>,
    pub id_familia: Option<FamiliaId>,
    pub id_pessoa_membro: Option<PessoaId>,
}
