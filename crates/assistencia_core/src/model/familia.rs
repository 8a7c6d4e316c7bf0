//! Family unit, the aggregation root for household-level records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type FamiliaId = i64;

/// Persisted `familia` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Familia {
    pub id_familia: FamiliaId,
    pub nome_familia: String,
    pub endereco: String,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub cep: String,
    pub telefone: String,
    /// `NUMERIC(10, 2)` in the schema.
    pub renda_mensal: Option<f64>,
    pub data_cadastro: NaiveDate,
    pub status_vulnerabilidade: bool,
    pub observacoes: Option<String>,
}

/// Input for registering a family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFamilia {
    pub nome_familia: String,
    pub endereco: String,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub cep: String,
    pub telefone: String,
    pub renda_mensal: Option<f64>,
    pub status_vulnerabilidade: bool,
    pub observacoes: Option<String>,
    /// Registration day; `None` stamps the local current date at insert time.
    pub data_cadastro: Option<NaiveDate>,
}

impl NewFamilia {
    pub fn new(
        nome_familia: impl Into<String>,
        endereco: impl Into<String>,
        cep: impl Into<String>,
        telefone: impl Into<String>,
        status_vulnerabilidade: bool,
    ) -> Self {
        Self {
            nome_familia: nome_familia.into(),
            endereco: endereco.into(),
            bairro: None,
            cidade: None,
            estado: None,
            cep: cep.into(),
            telefone: telefone.into(),
            renda_mensal: None,
            status_vulnerabilidade,
            observacoes: None,
            data_cadastro: None,
        }
    }
}

/// Partial update for a family. `data_cadastro` is fixed at registration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamiliaUpdate {
    pub nome_familia: Option<String>,
    pub endereco: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub cep: Option<String>,
    pub telefone: Option<String>,
    pub renda_mensal: Option<f64>,
    pub status_vulnerabilidade: Option<bool>,
    pub observacoes: Option<String>,
}
