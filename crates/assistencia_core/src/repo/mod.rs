//! Repository layer: one contract plus SQLite implementation per entity.
//!
//! # Responsibility
//! - Provide create/get/list/update/delete per table of the schema.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Each repository call is one committed transaction; failures roll back.
//! - Missing ids are reported as `None`/`false`, not as errors.
//! - `perfil`, `permissao` and their join tables are schema-only; no
//!   repository reads them.

mod common;
mod select_list;

pub mod atendimento_repo;
pub mod beneficio_repo;
pub mod familia_repo;
pub mod membro_repo;
pub mod necessidade_repo;
pub mod ocorrencia_repo;
pub mod pessoa_repo;
pub mod profissional_repo;
pub mod raw_query;
pub mod usuario_repo;

pub use common::{ListQuery, RepoError, RepoResult};
