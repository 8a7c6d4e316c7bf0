use assistencia_core::db::open_db_in_memory;
use assistencia_core::{
    execute_raw_query, execute_raw_query_with_params, BeneficioRepository, FamiliaRepository,
    NewBeneficio, NewFamilia, RepoError, SqliteBeneficioRepository, SqliteFamiliaRepository,
};
use chrono::NaiveDate;
use rusqlite::{named_params, Connection};
use serde_json::{json, Value};

fn seed_familia(conn: &Connection, nome: &str, renda: Option<f64>) -> i64 {
    let mut input = NewFamilia::new(nome, "Rua D, 4", "04000-000", "3333-4444", true);
    input.renda_mensal = renda;
    SqliteFamiliaRepository::new(conn)
        .create_familia(&input)
        .unwrap()
        .id_familia
}

#[test]
fn select_returns_rows_keyed_in_column_order() {
    let conn = open_db_in_memory().unwrap();
    let id = seed_familia(&conn, "Família Prado", Some(1500.0));

    let rows = execute_raw_query(
        &conn,
        "SELECT nome_familia, id_familia, renda_mensal, observacoes FROM familia",
    )
    .unwrap();

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(
        row.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["nome_familia", "id_familia", "renda_mensal", "observacoes"]
    );
    assert_eq!(row["nome_familia"], json!("Família Prado"));
    assert_eq!(row["id_familia"], json!(id));
    assert_eq!(row["observacoes"], Value::Null);
}

#[test]
fn decimal_columns_read_back_as_floats() {
    let conn = open_db_in_memory().unwrap();
    seed_familia(&conn, "Família Prado", Some(1500.0));
    seed_familia(&conn, "Família Costa", Some(980.75));

    let rows = execute_raw_query(
        &conn,
        "SELECT renda_mensal FROM familia ORDER BY id_familia",
    )
    .unwrap();

    assert!(rows[0]["renda_mensal"].is_f64());
    assert_eq!(rows[0]["renda_mensal"], json!(1500.0));
    assert_eq!(rows[1]["renda_mensal"], json!(980.75));
}

#[test]
fn aggregates_are_returned_as_rows() {
    let conn = open_db_in_memory().unwrap();
    seed_familia(&conn, "Família Prado", None);
    seed_familia(&conn, "Família Costa", None);

    let rows = execute_raw_query(&conn, "SELECT COUNT(*) AS total FROM familia").unwrap();
    assert_eq!(rows, vec![json!({ "total": 2 }).as_object().unwrap().clone()]);
}

#[test]
fn write_statements_return_no_rows() {
    let conn = open_db_in_memory().unwrap();
    let id = seed_familia(&conn, "Família Prado", None);

    let rows = execute_raw_query(
        &conn,
        &format!("UPDATE familia SET observacoes = 'revisado' WHERE id_familia = {id}"),
    )
    .unwrap();
    assert!(rows.is_empty());

    let check = execute_raw_query(&conn, "SELECT observacoes FROM familia").unwrap();
    assert_eq!(check[0]["observacoes"], json!("revisado"));
}

#[test]
fn parameters_are_bound_not_spliced() {
    let conn = open_db_in_memory().unwrap();
    seed_familia(&conn, "Família Prado", None);
    seed_familia(&conn, "O'Neil", None);

    let rows = execute_raw_query_with_params(
        &conn,
        "SELECT nome_familia FROM familia WHERE nome_familia = ?1",
        ["O'Neil"],
    )
    .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["nome_familia"], json!("O'Neil"));

    let named = execute_raw_query_with_params(
        &conn,
        "SELECT COUNT(*) AS total FROM familia WHERE status_vulnerabilidade = :flag",
        named_params! { ":flag": true },
    )
    .unwrap();
    assert_eq!(named[0]["total"], json!(2));
}

#[test]
fn store_errors_propagate() {
    let conn = open_db_in_memory().unwrap();

    let err = execute_raw_query(&conn, "SELECT * FROM tabela_inexistente").unwrap_err();
    assert!(err.sqlite_error().is_some());

    execute_raw_query(
        &conn,
        "INSERT INTO pessoa (nome_completo, cpf, email) VALUES ('A', '1', 'a@x.com')",
    )
    .unwrap();
    let duplicate = execute_raw_query(
        &conn,
        "INSERT INTO pessoa (nome_completo, cpf, email) VALUES ('B', '1', 'b@x.com')",
    )
    .unwrap_err();
    assert!(duplicate.is_unique_violation());
}

fn pessoa_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM pessoa;", [], |row| row.get(0)).unwrap()
}

#[test]
fn every_statement_of_a_script_runs() {
    let conn = open_db_in_memory().unwrap();

    let rows = execute_raw_query(
        &conn,
        "INSERT INTO pessoa (nome_completo, cpf, email) VALUES ('A', '1', 'a@x.com');
         INSERT INTO pessoa (nome_completo, cpf, email) VALUES ('B', '2', 'b@x.com');",
    )
    .unwrap();

    assert!(rows.is_empty());
    assert_eq!(pessoa_count(&conn), 2);
}

#[test]
fn script_returns_rows_of_last_select() {
    let conn = open_db_in_memory().unwrap();

    let rows = execute_raw_query(
        &conn,
        "INSERT INTO pessoa (nome_completo, cpf, email) VALUES ('A', '1', 'a@x.com');
         SELECT 1 AS primeiro;
         SELECT nome_completo FROM pessoa;",
    )
    .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["nome_completo"], json!("A"));
    assert!(!rows[0].contains_key("primeiro"));
}

#[test]
fn failing_statement_rolls_back_whole_script() {
    let conn = open_db_in_memory().unwrap();

    let err = execute_raw_query(
        &conn,
        "INSERT INTO pessoa (nome_completo, cpf, email) VALUES ('A', '1', 'a@x.com');
         INSERT INTO pessoa (nome_completo, cpf, email) VALUES ('B', '1', 'b@x.com');",
    )
    .unwrap_err();

    assert!(err.is_unique_violation());
    assert_eq!(pessoa_count(&conn), 0);
    assert!(conn.is_autocommit());
}

#[test]
fn parameterized_query_rejects_several_statements() {
    let conn = open_db_in_memory().unwrap();

    let err = execute_raw_query_with_params(
        &conn,
        "INSERT INTO pessoa (nome_completo, cpf, email) VALUES (?1, '1', 'a@x.com');
         INSERT INTO pessoa (nome_completo, cpf, email) VALUES ('B', '2', 'b@x.com');",
        ["A"],
    )
    .unwrap_err();

    assert!(matches!(err, RepoError::InvalidQuery(_)));
    assert_eq!(pessoa_count(&conn), 0);
}

#[test]
fn blank_and_comment_only_text_returns_no_rows() {
    let conn = open_db_in_memory().unwrap();

    assert!(execute_raw_query(&conn, "").unwrap().is_empty());
    assert!(execute_raw_query(&conn, "  -- nada a fazer\n").unwrap().is_empty());
    assert!(execute_raw_query(&conn, "/* vazio */ ;").unwrap().is_empty());
    assert!(execute_raw_query_with_params(&conn, "   ", []).unwrap().is_empty());
}

#[test]
fn aggregates_over_decimal_columns_read_back_as_floats() {
    let conn = open_db_in_memory().unwrap();
    let familia = seed_familia(&conn, "Família Prado", Some(1500.0));
    seed_familia(&conn, "Família Costa", Some(1000.0));

    let rows = execute_raw_query(
        &conn,
        "SELECT SUM(renda_mensal) AS s, MAX(renda_mensal) AS m, COUNT(renda_mensal) AS n, \
         renda_mensal FROM familia",
    )
    .unwrap();
    let row = &rows[0];
    assert!(row["s"].is_f64());
    assert_eq!(row["s"], json!(2500.0));
    assert_eq!(row["m"], json!(1500.0));
    assert!(row["n"].is_u64());
    assert_eq!(row["n"], json!(2));
    assert!(row["renda_mensal"].is_f64());

    let mut beneficio = NewBeneficio::new(
        "Auxílio Gás",
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        familia,
    );
    beneficio.valor_monetario = Some(110.0);
    SqliteBeneficioRepository::new(&conn)
        .create_beneficio(&beneficio)
        .unwrap();

    let yearly = execute_raw_query_with_params(
        &conn,
        "SELECT b.valor_monetario * 12 AS anual FROM beneficio b WHERE b.id_familia = ?1",
        [familia],
    )
    .unwrap();
    assert_eq!(yearly[0]["anual"], json!(1320.0));
    assert!(yearly[0]["anual"].is_f64());
}
