use diesel::prelude::*;
use diesel::sql_types::Integer;

mod common;

#[derive(QueryableByName)]
struct PragmaValue {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

#[test]
fn test_creates_and_removes_db_files() {
    let path = {
        let test_db = common::TestDb::new("test_creates_and_removes_db_files.db");
        let conn = test_db.pool().get();
        assert!(conn.is_ok());
        test_db.path().to_path_buf()
    };

    let base = path.to_string_lossy().to_string();
    assert!(!path.exists());
    assert!(!std::path::Path::new(&format!("{base}-shm")).exists());
    assert!(!std::path::Path::new(&format!("{base}-wal")).exists());
}

#[test]
fn test_pooled_connections_enforce_foreign_keys() {
    let test_db = common::TestDb::new("test_pooled_connections_enforce_foreign_keys.db");
    let mut conn = test_db.pool().get().expect("connection");

    let pragma = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<PragmaValue>(&mut conn)
        .expect("pragma");

    assert_eq!(pragma.foreign_keys, 1);
}

#[test]
fn test_migrations_are_idempotent() {
    let test_db = common::TestDb::new("test_migrations_are_idempotent.db");

    let applied = bill_tracker::db::run_migrations(&test_db.pool()).expect("migrations");

    assert_eq!(applied, 0);
}
