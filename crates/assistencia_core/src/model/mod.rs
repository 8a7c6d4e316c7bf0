//! Entity shapes of the case-management schema.
//!
//! # Responsibility
//! - Mirror one table per persisted struct, field names equal to column names.
//! - Provide the create input (`New*`) and partial-update input (`*Update`)
//!   for every entity the repositories write.
//!
//! # Invariants
//! - Ids are surrogate SQLite integer keys, except `Profissional` and
//!   `Usuario`, which reuse the owning `Pessoa` id.
//! - Associations are plain foreign-key ids; joins happen in repositories.
//! - In `*Update` structs, `None` means "not supplied", never "set to NULL".

pub mod atendimento;
pub mod beneficio;
pub mod familia;
pub mod membro;
pub mod necessidade;
pub mod ocorrencia;
pub mod pessoa;
pub mod profissional;
pub mod usuario;

pub use atendimento::{Atendimento, AtendimentoId, AtendimentoUpdate, NewAtendimento};
pub use beneficio::{Beneficio, BeneficioId, BeneficioUpdate, NewBeneficio};
pub use familia::{Familia, FamiliaId, FamiliaUpdate, NewFamilia};
pub use membro::{MembroDaFamilia, MembroDaFamiliaUpdate, MembroId, NewMembroDaFamilia};
pub use necessidade::{Necessidade, NecessidadeId, NecessidadeUpdate, NewNecessidade};
pub use ocorrencia::{NewOcorrencia, Ocorrencia, OcorrenciaId, OcorrenciaUpdate};
pub use pessoa::{NewPessoa, Pessoa, PessoaId, PessoaUpdate};
pub use profissional::{NewProfissional, Profissional, ProfissionalId, ProfissionalUpdate};
pub use usuario::{NewUsuario, Usuario, UsuarioUpdate};
