//! Integration tests for the DataFusion connection/cursor facade.

use std::collections::HashMap;

use sqlpane_adapter::{Adapter, Connection, Cursor};
use sqlpane_fusion::{ADAPTER_NAME, DataFusionAdapter, DataFusionConnection};
use sqlpane_result::Error;

fn connect() -> DataFusionConnection {
    sqlpane_test_utils::init_tracing_for_tests();
    DataFusionAdapter::new(Vec::new(), HashMap::new())
        .connect()
        .expect("connect to in-memory engine")
}

#[test]
fn plugin_name_is_fixed() {
    assert_eq!(ADAPTER_NAME, "datafusion");
}

#[test]
fn connect_succeeds() {
    let connection = connect();
    assert_eq!(connection.init_message(), "");
}

#[test]
fn extra_options_are_held_not_validated() {
    let mut options = HashMap::new();
    options.insert("foo".to_string(), "1".to_string());
    options.insert("bar".to_string(), "baz".to_string());
    DataFusionAdapter::new(vec!["unused".to_string()], options)
        .connect()
        .expect("options do not affect connecting");
}

#[test]
fn ddl_returns_no_cursor() {
    let connection = connect();
    let cursor = connection
        .execute("CREATE TABLE foo (a INT)")
        .expect("create table");
    assert!(cursor.is_none(), "DDL produces no result rows");
}

#[test]
fn select_returns_cursor_with_typed_columns() {
    let connection = connect();
    let mut cursor = connection
        .execute("SELECT 1 AS a")
        .expect("execute select")
        .expect("select produces a cursor");
    assert_eq!(cursor.columns(), vec![("a".to_string(), "##".to_string())]);

    let batch = cursor.fetchall().expect("fetch all rows");
    assert_eq!(batch.num_columns(), 1, "expected single column");
    assert_eq!(batch.num_rows(), 1, "expected single row");
}

#[test]
fn set_limit_caps_materialized_rows() {
    let connection = connect();
    let sql = "SELECT 1 AS a UNION ALL SELECT 2 UNION ALL SELECT 3";

    let mut cursor = connection
        .execute(sql)
        .expect("execute union")
        .expect("union produces a cursor");
    let batch = cursor.set_limit(2).fetchall().expect("fetch limited rows");
    assert_eq!(batch.num_rows(), 2, "limit caps materialization");

    let mut cursor = connection
        .execute(sql)
        .expect("execute union")
        .expect("union produces a cursor");
    let batch = cursor.fetchall().expect("fetch unlimited rows");
    assert_eq!(batch.num_rows(), 3, "no limit materializes every row");
}

#[test]
fn malformed_sql_is_a_query_error() {
    let connection = connect();
    let err = connection
        .execute("selec;")
        .expect_err("malformed SQL must fail");
    assert!(
        matches!(err, Error::Query { .. }),
        "expected a query error, got {err:?}"
    );
}

#[test]
fn missing_table_is_a_query_error() {
    let connection = connect();
    let err = connection
        .execute("SELECT * FROM nowhere")
        .expect_err("unknown table must fail");
    assert!(
        matches!(err, Error::Query { .. }),
        "expected a query error, got {err:?}"
    );
}

#[test]
fn dml_reports_through_a_cursor() {
    let connection = connect();
    connection
        .execute("CREATE TABLE counters (n INT)")
        .expect("create table");

    let mut cursor = connection
        .execute("INSERT INTO counters VALUES (1), (2)")
        .expect("execute insert")
        .expect("DML reports its row count through a cursor");
    let batch = cursor.fetchall().expect("fetch insert report");
    assert_eq!(batch.num_rows(), 1, "one report row");
}

#[test]
fn external_csv_table_round_trip() {
    let connection = connect();
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("people.csv");
    std::fs::write(&path, "id,name\n1,ada\n2,grace\n").expect("write csv fixture");

    let ddl = format!(
        "CREATE EXTERNAL TABLE people STORED AS CSV LOCATION '{}' OPTIONS ('format.has_header' 'true')",
        path.display()
    );
    let cursor = connection.execute(&ddl).expect("create external table");
    assert!(cursor.is_none(), "external table DDL produces no rows");

    let mut cursor = connection
        .execute("SELECT * FROM people")
        .expect("query external table")
        .expect("select produces a cursor");
    assert_eq!(
        cursor.columns(),
        vec![
            ("id".to_string(), "##".to_string()),
            ("name".to_string(), "s".to_string()),
        ],
        "columns follow the file's schema, in file order"
    );
    let batch = cursor.fetchall().expect("materialize csv rows");
    assert_eq!(batch.num_rows(), 2);
}
