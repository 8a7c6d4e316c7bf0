//! Data-access layer for the social-services case-management schema.
//!
//! People, families and their members, professionals, users, service visits,
//! benefits, needs and incidents, persisted in SQLite through one repository
//! per table.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use config::{AppConfig, ConfigError, DbConfig, DbLocation, LogConfig};
pub use db::{
    create_tables, latest_version, open_db, open_db_in_memory, Database, DbError, DbResult, Session,
};
pub use logging::{default_log_level, init_logging, init_logging_from, logging_status};
pub use model::{
    Atendimento, AtendimentoId, AtendimentoUpdate, Beneficio, BeneficioId, BeneficioUpdate,
    Familia, FamiliaId, FamiliaUpdate, MembroDaFamilia, MembroDaFamiliaUpdate, MembroId,
    Necessidade, NecessidadeId, NecessidadeUpdate, NewAtendimento, NewBeneficio, NewFamilia,
    NewMembroDaFamilia, NewNecessidade, NewOcorrencia, NewPessoa, NewProfissional, NewUsuario,
    Ocorrencia, OcorrenciaId, OcorrenciaUpdate, Pessoa, PessoaId, PessoaUpdate, Profissional,
    ProfissionalId, ProfissionalUpdate, Usuario, UsuarioUpdate,
};
pub use repo::atendimento_repo::{AtendimentoRepository, SqliteAtendimentoRepository};
pub use repo::beneficio_repo::{BeneficioRepository, SqliteBeneficioRepository};
pub use repo::familia_repo::{FamiliaRepository, SqliteFamiliaRepository};
pub use repo::membro_repo::{MembroDaFamiliaRepository, SqliteMembroDaFamiliaRepository};
pub use repo::necessidade_repo::{NecessidadeRepository, SqliteNecessidadeRepository};
pub use repo::ocorrencia_repo::{OcorrenciaRepository, SqliteOcorrenciaRepository};
pub use repo::pessoa_repo::{PessoaRepository, SqlitePessoaRepository};
pub use repo::profissional_repo::{ProfissionalRepository, SqliteProfissionalRepository};
pub use repo::raw_query::{execute_raw_query, execute_raw_query_with_params, RawRow};
pub use repo::usuario_repo::{SqliteUsuarioRepository, UsuarioRepository};
pub use repo::{ListQuery, RepoError, RepoResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
