use std::fs::File;
use std::path::{Path, PathBuf};

use rowdb::storage::{CONTENT_MAX, ROWS_PER_PAGE};
use rowdb::{ExecutionEngine, Row};

/// The host embedding supplies the backing file before the table is opened.
fn bootstrap(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    File::create(&path).unwrap();
    path
}

#[test]
fn example_scenario_insert_two_select_two() {
    let dir = tempfile::tempdir().unwrap();
    let path = bootstrap(dir.path(), "example.db");

    let mut engine = ExecutionEngine::open(&path).unwrap();
    engine.execute("INSERT 0 'alice'").unwrap();
    engine.execute("INSERT 1 'bob'").unwrap();

    let result = engine.execute("SELECT").unwrap();
    assert_eq!(result.rows, vec![Row::new(0, "alice"), Row::new(1, "bob")]);
    engine.close().unwrap();
}

#[test]
fn rows_survive_close_and_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = bootstrap(dir.path(), "survive.db");
    let total = 20;

    let mut engine = ExecutionEngine::open(&path).unwrap();
    for i in 0..total {
        engine
            .execute(&format!("INSERT {} 'row number {}'", i, i))
            .unwrap();
    }
    engine.close().unwrap();

    let mut engine = ExecutionEngine::open(&path).unwrap();
    assert_eq!(engine.table().num_rows(), total);

    let result = engine.execute("SELECT").unwrap();
    assert_eq!(result.rows.len(), total);
    for (i, row) in result.rows.iter().enumerate() {
        assert_eq!(row.id, i as i32);
        assert_eq!(row.content, format!("row number {}", i));
    }
    engine.close().unwrap();
}

#[test]
fn reopen_is_exact_across_full_page_boundaries() {
    let dir = tempfile::tempdir().unwrap();
    let path = bootstrap(dir.path(), "pages.db");
    // two completely full pages plus a partial third: the case where the
    // per-page slack bytes would corrupt a naive length/row-size count
    let total = ROWS_PER_PAGE * 2 + 5;

    let mut engine = ExecutionEngine::open(&path).unwrap();
    for i in 0..total {
        engine.execute(&format!("INSERT {} 'r'", i)).unwrap();
    }
    engine.close().unwrap();

    let mut engine = ExecutionEngine::open(&path).unwrap();
    assert_eq!(engine.table().num_rows(), total);
    let ids: Vec<i32> = engine
        .execute("SELECT")
        .unwrap()
        .rows
        .iter()
        .map(|row| row.id)
        .collect();
    assert_eq!(ids, (0..total as i32).collect::<Vec<_>>());
    engine.close().unwrap();
}

#[test]
fn appends_after_reopen_continue_the_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let path = bootstrap(dir.path(), "append.db");

    let mut engine = ExecutionEngine::open(&path).unwrap();
    engine.execute("INSERT 1 'before'").unwrap();
    engine.close().unwrap();

    let mut engine = ExecutionEngine::open(&path).unwrap();
    engine.execute("INSERT 2 'after'").unwrap();
    let result = engine.execute("SELECT").unwrap();
    assert_eq!(
        result.rows,
        vec![Row::new(1, "before"), Row::new(2, "after")]
    );
    engine.close().unwrap();
}

#[test]
fn truncated_content_persists_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let path = bootstrap(dir.path(), "truncate.db");

    let mut engine = ExecutionEngine::open(&path).unwrap();
    let long = "b".repeat(CONTENT_MAX + 30);
    engine.execute(&format!("INSERT 5 '{}'", long)).unwrap();
    engine.close().unwrap();

    let mut engine = ExecutionEngine::open(&path).unwrap();
    let result = engine.execute("SELECT").unwrap();
    assert_eq!(result.rows[0].content, "b".repeat(CONTENT_MAX));
    engine.close().unwrap();
}

#[test]
fn empty_table_reopens_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = bootstrap(dir.path(), "empty.db");

    let engine = ExecutionEngine::open(&path).unwrap();
    engine.close().unwrap();

    let mut engine = ExecutionEngine::open(&path).unwrap();
    assert_eq!(engine.table().num_rows(), 0);
    assert!(engine.execute("SELECT").unwrap().rows.is_empty());
    engine.close().unwrap();
}

#[test]
fn two_tables_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    let first_path = bootstrap(dir.path(), "first.db");
    let second_path = bootstrap(dir.path(), "second.db");

    let mut first = ExecutionEngine::open(&first_path).unwrap();
    let mut second = ExecutionEngine::open(&second_path).unwrap();

    first.execute("INSERT -1 '{\"name\":\"dan\"}'").unwrap();
    first.execute("INSERT 1 '{\"name\":\"dab\"}'").unwrap();
    second.execute("INSERT 0 '{\"name\":\"bia\"}'").unwrap();

    let first_rows = first.execute("SELECT").unwrap().rows;
    let second_rows = second.execute("SELECT").unwrap().rows;
    assert_eq!(first_rows.len(), 2);
    assert_eq!(first_rows[0], Row::new(-1, "{\"name\":\"dan\"}"));
    assert_eq!(second_rows, vec![Row::new(0, "{\"name\":\"bia\"}")]);

    first.close().unwrap();
    second.close().unwrap();
}

#[test]
fn failed_statements_do_not_persist_anything() {
    let dir = tempfile::tempdir().unwrap();
    let path = bootstrap(dir.path(), "failed.db");

    let mut engine = ExecutionEngine::open(&path).unwrap();
    assert!(engine.execute("INSERT abc 'x'").is_err());
    assert!(engine.execute("DELETE").is_err());
    engine.close().unwrap();

    let engine = ExecutionEngine::open(&path).unwrap();
    assert_eq!(engine.table().num_rows(), 0);
    engine.close().unwrap();
}
