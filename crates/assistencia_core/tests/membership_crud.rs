use assistencia_core::db::open_db_in_memory;
use assistencia_core::{
    FamiliaRepository, ListQuery, MembroDaFamiliaRepository, MembroDaFamiliaUpdate, NewFamilia,
    NewMembroDaFamilia, NewPessoa, NewProfissional, NewUsuario, PessoaRepository,
    ProfissionalRepository, ProfissionalUpdate, SqliteFamiliaRepository,
    SqliteMembroDaFamiliaRepository, SqlitePessoaRepository, SqliteProfissionalRepository,
    SqliteUsuarioRepository, UsuarioRepository, UsuarioUpdate,
};
use chrono::{Local, NaiveDate};
use rusqlite::Connection;

fn seed_pessoa(conn: &Connection, nome: &str, cpf: &str) -> i64 {
    SqlitePessoaRepository::new(conn)
        .create_pessoa(&NewPessoa::new(nome, cpf, format!("{cpf}@x.com")))
        .unwrap()
        .id_pessoa
}

fn seed_familia(conn: &Connection, nome: &str) -> i64 {
    SqliteFamiliaRepository::new(conn)
        .create_familia(&NewFamilia::new(nome, "Rua A, 1", "01000-000", "3333-0000", false))
        .unwrap()
        .id_familia
}

#[test]
fn membro_links_person_and_family() {
    let conn = open_db_in_memory().unwrap();
    let pessoa = seed_pessoa(&conn, "Carla", "111");
    let familia = seed_familia(&conn, "Família Lima");
    let repo = SqliteMembroDaFamiliaRepository::new(&conn);

    let mut input = NewMembroDaFamilia::new(pessoa, familia, "responsável");
    input.escolaridade = Some("ensino médio".to_string());
    let created = repo.create_membro(&input).unwrap();

    let loaded = repo.get_membro(created.id_membro_familia).unwrap().unwrap();
    assert_eq!(loaded.id_pessoa, pessoa);
    assert_eq!(loaded.id_familia, familia);
    assert_eq!(loaded.parentesco, "responsável");
    assert_eq!(loaded.escolaridade.as_deref(), Some("ensino médio"));
    assert_eq!(loaded.ocupacao, None);
}

#[test]
fn membro_requires_existing_person_and_family() {
    let conn = open_db_in_memory().unwrap();
    let familia = seed_familia(&conn, "Família Lima");
    let repo = SqliteMembroDaFamiliaRepository::new(&conn);

    let err = repo
        .create_membro(&NewMembroDaFamilia::new(999, familia, "filho"))
        .unwrap_err();
    assert!(err.is_foreign_key_violation(), "unexpected error: {err}");
    assert!(repo.list_membros(&ListQuery::default()).unwrap().is_empty());
}

#[test]
fn membro_association_queries_follow_both_directions() {
    let conn = open_db_in_memory().unwrap();
    let carla = seed_pessoa(&conn, "Carla", "111");
    let davi = seed_pessoa(&conn, "Davi", "222");
    let lima = seed_familia(&conn, "Família Lima");
    let rocha = seed_familia(&conn, "Família Rocha");
    let repo = SqliteMembroDaFamiliaRepository::new(&conn);

    repo.create_membro(&NewMembroDaFamilia::new(carla, lima, "responsável"))
        .unwrap();
    repo.create_membro(&NewMembroDaFamilia::new(davi, lima, "filho"))
        .unwrap();
    repo.create_membro(&NewMembroDaFamilia::new(carla, rocha, "avó"))
        .unwrap();

    let membros_lima = repo.list_membros_by_familia(lima).unwrap();
    assert_eq!(
        membros_lima.iter().map(|m| m.id_pessoa).collect::<Vec<_>>(),
        vec![carla, davi]
    );

    let familias_carla = repo.list_membros_by_pessoa(carla).unwrap();
    assert_eq!(
        familias_carla.iter().map(|m| m.id_familia).collect::<Vec<_>>(),
        vec![lima, rocha]
    );
}

#[test]
fn duplicate_person_family_pair_is_accepted() {
    let conn = open_db_in_memory().unwrap();
    let pessoa = seed_pessoa(&conn, "Carla", "111");
    let familia = seed_familia(&conn, "Família Lima");
    let repo = SqliteMembroDaFamiliaRepository::new(&conn);

    repo.create_membro(&NewMembroDaFamilia::new(pessoa, familia, "mãe"))
        .unwrap();
    repo.create_membro(&NewMembroDaFamilia::new(pessoa, familia, "mãe"))
        .unwrap();
    assert_eq!(repo.list_membros_by_familia(familia).unwrap().len(), 2);
}

#[test]
fn membro_update_and_delete() {
    let conn = open_db_in_memory().unwrap();
    let pessoa = seed_pessoa(&conn, "Carla", "111");
    let familia = seed_familia(&conn, "Família Lima");
    let repo = SqliteMembroDaFamiliaRepository::new(&conn);

    let created = repo
        .create_membro(&NewMembroDaFamilia::new(pessoa, familia, "filha"))
        .unwrap();
    let update = MembroDaFamiliaUpdate {
        ocupacao: Some("estudante".to_string()),
        ..MembroDaFamiliaUpdate::default()
    };
    let updated = repo
        .update_membro(created.id_membro_familia, &update)
        .unwrap()
        .unwrap();
    assert_eq!(updated.ocupacao.as_deref(), Some("estudante"));
    assert_eq!(updated.parentesco, "filha");

    assert!(repo.update_membro(999, &update).unwrap().is_none());
    assert!(repo.delete_membro(created.id_membro_familia).unwrap());
    assert!(repo.get_membro(created.id_membro_familia).unwrap().is_none());
}

#[test]
fn deleting_referenced_person_fails_without_cascade() {
    let conn = open_db_in_memory().unwrap();
    let pessoa = seed_pessoa(&conn, "Carla", "111");
    let familia = seed_familia(&conn, "Família Lima");
    SqliteMembroDaFamiliaRepository::new(&conn)
        .create_membro(&NewMembroDaFamilia::new(pessoa, familia, "mãe"))
        .unwrap();

    let pessoas = SqlitePessoaRepository::new(&conn);
    let err = pessoas.delete_pessoa(pessoa).unwrap_err();
    assert!(err.is_foreign_key_violation());
    assert!(pessoas.get_pessoa(pessoa).unwrap().is_some());
}

#[test]
fn profissional_shares_person_key() {
    let conn = open_db_in_memory().unwrap();
    let pessoa = seed_pessoa(&conn, "Elisa", "333");
    let repo = SqliteProfissionalRepository::new(&conn);

    let created = repo
        .create_profissional(&NewProfissional::new(pessoa, "assistente social", "CRAS"))
        .unwrap();
    assert_eq!(created.id_profissional, pessoa);

    let again = repo
        .create_profissional(&NewProfissional::new(pessoa, "psicóloga", "CREAS"))
        .unwrap_err();
    assert!(again.is_unique_violation());

    let orphan = repo
        .create_profissional(&NewProfissional::new(pessoa + 100, "psicóloga", "CREAS"))
        .unwrap_err();
    assert!(orphan.is_foreign_key_violation());

    let update = ProfissionalUpdate {
        setor: Some("CREAS".to_string()),
        ..ProfissionalUpdate::default()
    };
    let updated = repo.update_profissional(pessoa, &update).unwrap().unwrap();
    assert_eq!(updated.setor, "CREAS");
    assert_eq!(updated.cargo, "assistente social");

    assert_eq!(repo.list_profissionais(&ListQuery::default()).unwrap().len(), 1);
    assert!(repo.delete_profissional(pessoa).unwrap());
    assert!(repo.get_profissional(pessoa).unwrap().is_none());
}

#[test]
fn usuario_defaults_creation_date_and_tracks_login() {
    let conn = open_db_in_memory().unwrap();
    let pessoa = seed_pessoa(&conn, "Fábio", "444");
    let repo = SqliteUsuarioRepository::new(&conn);

    let created = repo
        .create_usuario(&NewUsuario::new(pessoa, "fabio", "s3cret", "ativo"))
        .unwrap();
    assert_eq!(created.id_usuario, pessoa);
    assert_eq!(created.data_criacao, Local::now().date_naive());
    assert_eq!(created.ultimo_login, None);
    assert!(!format!("{created:?}").contains("s3cret"));

    let login_at = NaiveDate::from_ymd_opt(2024, 5, 2)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();
    let logged = repo.record_login(pessoa, login_at).unwrap().unwrap();
    assert_eq!(logged.ultimo_login, Some(login_at));
    assert_eq!(logged.status_conta, "ativo");

    assert!(repo.record_login(pessoa + 1, login_at).unwrap().is_none());
}

#[test]
fn usuario_login_name_is_unique() {
    let conn = open_db_in_memory().unwrap();
    let first = seed_pessoa(&conn, "Fábio", "444");
    let second = seed_pessoa(&conn, "Gabi", "555");
    let repo = SqliteUsuarioRepository::new(&conn);

    repo.create_usuario(&NewUsuario::new(first, "fabio", "a", "ativo"))
        .unwrap();
    let err = repo
        .create_usuario(&NewUsuario::new(second, "fabio", "b", "ativo"))
        .unwrap_err();
    assert!(err.is_unique_violation());
}

#[test]
fn usuario_update_and_delete() {
    let conn = open_db_in_memory().unwrap();
    let pessoa = seed_pessoa(&conn, "Fábio", "444");
    let repo = SqliteUsuarioRepository::new(&conn);
    repo.create_usuario(&NewUsuario::new(pessoa, "fabio", "a", "ativo"))
        .unwrap();

    let update = UsuarioUpdate {
        status_conta: Some("bloqueado".to_string()),
        ..UsuarioUpdate::default()
    };
    let updated = repo.update_usuario(pessoa, &update).unwrap().unwrap();
    assert_eq!(updated.status_conta, "bloqueado");
    assert_eq!(updated.nome_usuario, "fabio");
    assert_eq!(updated.senha, "a");

    assert_eq!(repo.list_usuarios(&ListQuery::new(0, 10)).unwrap().len(), 1);
    assert!(repo.delete_usuario(pessoa).unwrap());
    assert!(!repo.delete_usuario(pessoa).unwrap());
}
