//! Logged service visit or consultation.

use super::familia::FamiliaId;
use super::pessoa::PessoaId;
use super::profissional::ProfissionalId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type AtendimentoId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atendimento {
    pub id_atendimento: AtendimentoId,
    pub data_atendimento: NaiveDateTime,
    pub tipo_atendimento: String,
    pub resumo: String,
    /// Referral notes.
    pub encaminhamentos: Option<String>,
    pub id_familia: FamiliaId,
    pub id_profissional: ProfissionalId,
    /// Set when the visit concerned one specific member.
    pub id_pessoa_membro: Option<PessoaId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAtendimento {
    pub data_atendimento: NaiveDateTime,
    pub tipo_atendimento: String,
    pub resumo: String,
    pub encaminhamentos: Option<String>,
    pub id_familia: FamiliaId,
    pub id_profissional: ProfissionalId,
    pub id_pessoa_membro: Option<PessoaId>,
}

impl NewAtendimento {
    pub fn new(
        data_atendimento: NaiveDateTime,
        tipo_atendimento: impl Into<String>,
        resumo: impl Into<String>,
        id_familia: FamiliaId,
        id_profissional: ProfissionalId,
    ) -> Self {
        Self {
            data_atendimento,
            tipo_atendimento: tipo_atendimento.into(),
            resumo: resumo.into(),
            encaminhamentos: None,
            id_familia,
            id_profissional,
            id_pessoa_membro: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtendimentoUpdate {
    pub data_atendimento: Option<NaiveDateTime>,
    pub tipo_atendimento: Option<String>,
    pub resumo: Option<String>,
    pub encaminhamentos: Option<String>,
    pub id_familia: Option<FamiliaId>,
    pub id_profissional: Option<ProfissionalId>,
    pub id_pessoa_membro: Option<PessoaId>,
}
