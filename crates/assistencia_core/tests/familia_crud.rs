use assistencia_core::db::open_db_in_memory;
use assistencia_core::{
    FamiliaRepository, FamiliaUpdate, ListQuery, NewFamilia, RepoError, SqliteFamiliaRepository,
};
use chrono::{Local, NaiveDate};

fn familia_souza() -> NewFamilia {
    let mut familia = NewFamilia::new(
        "Família Souza",
        "Rua das Flores, 10",
        "01000-000",
        "(11) 3333-4444",
        true,
    );
    familia.bairro = Some("Centro".to_string());
    familia.cidade = Some("São Paulo".to_string());
    familia.estado = Some("SP".to_string());
    familia.renda_mensal = Some(1320.5);
    familia
}

#[test]
fn create_stamps_registration_date_with_today() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFamiliaRepository::new(&conn);

    let before = Local::now().date_naive();
    let created = repo.create_familia(&familia_souza()).unwrap();
    let after = Local::now().date_naive();

    assert!(created.data_cadastro >= before && created.data_cadastro <= after);
    assert!(created.status_vulnerabilidade);
    assert_eq!(created.renda_mensal, Some(1320.5));
    assert_eq!(created.cidade.as_deref(), Some("São Paulo"));
    assert_eq!(created.observacoes, None);
}

#[test]
fn create_keeps_supplied_registration_date() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFamiliaRepository::new(&conn);

    let mut input = familia_souza();
    input.data_cadastro = NaiveDate::from_ymd_opt(2023, 1, 15);
    let created = repo.create_familia(&input).unwrap();

    let loaded = repo.get_familia(created.id_familia).unwrap().unwrap();
    assert_eq!(loaded.data_cadastro, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
}

#[test]
fn whole_number_income_reads_back_as_money() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFamiliaRepository::new(&conn);

    let mut input = familia_souza();
    input.renda_mensal = Some(1500.0);
    let created = repo.create_familia(&input).unwrap();
    assert_eq!(created.renda_mensal, Some(1500.0));
}

#[test]
fn update_changes_only_supplied_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFamiliaRepository::new(&conn);

    let before = repo.create_familia(&familia_souza()).unwrap();
    let update = FamiliaUpdate {
        status_vulnerabilidade: Some(false),
        renda_mensal: Some(2100.0),
        observacoes: Some("Acompanhamento mensal".to_string()),
        ..FamiliaUpdate::default()
    };
    let after = repo
        .update_familia(before.id_familia, &update)
        .unwrap()
        .unwrap();

    assert!(!after.status_vulnerabilidade);
    assert_eq!(after.renda_mensal, Some(2100.0));
    assert_eq!(after.observacoes.as_deref(), Some("Acompanhamento mensal"));
    assert_eq!(after.nome_familia, before.nome_familia);
    assert_eq!(after.endereco, before.endereco);
    assert_eq!(after.bairro, before.bairro);
    assert_eq!(after.cep, before.cep);
    assert_eq!(after.telefone, before.telefone);
    assert_eq!(after.data_cadastro, before.data_cadastro);
}

#[test]
fn missing_id_returns_absent_signals() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFamiliaRepository::new(&conn);

    assert!(repo.get_familia(7).unwrap().is_none());
    let update = FamiliaUpdate {
        cep: Some("02000-000".to_string()),
        ..FamiliaUpdate::default()
    };
    assert!(repo.update_familia(7, &update).unwrap().is_none());
    assert!(!repo.delete_familia(7).unwrap());
}

#[test]
fn delete_then_get_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFamiliaRepository::new(&conn);

    let created = repo.create_familia(&familia_souza()).unwrap();
    assert!(repo.delete_familia(created.id_familia).unwrap());
    assert!(repo.get_familia(created.id_familia).unwrap().is_none());
}

#[test]
fn list_windows_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFamiliaRepository::new(&conn);

    for _ in 0..3 {
        repo.create_familia(&familia_souza()).unwrap();
    }

    let page = repo.list_familias(&ListQuery::new(1, 1)).unwrap();
    let all = repo.list_familias(&ListQuery::default()).unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0], all[1]);
}

#[test]
fn corrupted_vulnerability_flag_is_reported() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFamiliaRepository::new(&conn);

    let created = repo.create_familia(&familia_souza()).unwrap();
    conn.execute(
        "UPDATE familia SET status_vulnerabilidade = 7 WHERE id_familia = ?1;",
        [created.id_familia],
    )
    .unwrap();

    let err = repo.get_familia(created.id_familia).unwrap_err();
    match err {
        RepoError::InvalidData(message) => {
            assert!(message.contains("familia.status_vulnerabilidade"))
        }
        other => panic!("unexpected error: {other}"),
    }
}
