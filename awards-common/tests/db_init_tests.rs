//! Tests for database initialization
//!
//! Covers automatic database creation, reopening an existing database,
//! and the movies schema coming up idempotently.

use awards_common::db::init_database;
use awards_common::db::models::MovieRow;
use tempfile::TempDir;

#[tokio::test]
async fn creates_database_when_missing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("awards.db");
    assert!(!db_path.exists());

    let result = init_database(&db_path).await;

    assert!(result.is_ok(), "initialization failed: {:?}", result.err());
    assert!(db_path.exists(), "database file was not created");
}

#[tokio::test]
async fn creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nested").join("deeper").join("awards.db");

    let result = init_database(&db_path).await;

    assert!(result.is_ok(), "initialization failed: {:?}", result.err());
    assert!(db_path.exists());
}

#[tokio::test]
async fn opens_existing_database() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("awards.db");

    let pool1 = init_database(&db_path).await.expect("first init");
    drop(pool1);

    let pool2 = init_database(&db_path).await;
    assert!(pool2.is_ok(), "failed to reopen: {:?}", pool2.err());
}

#[tokio::test]
async fn movies_table_accepts_rows() {
    let dir = TempDir::new().unwrap();
    let pool = init_database(&dir.path().join("awards.db"))
        .await
        .expect("init database");

    sqlx::query(
        "INSERT INTO movies (year, title, studios, producers, winner) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(1990i64)
    .bind("Movie A")
    .bind("Warner")
    .bind("John Doe")
    .bind(true)
    .execute(&pool)
    .await
    .expect("insert row");

    let row: MovieRow = sqlx::query_as("SELECT * FROM movies WHERE title = ?")
        .bind("Movie A")
        .fetch_one(&pool)
        .await
        .expect("fetch row");

    assert_eq!(row.year, 1990);
    assert_eq!(row.producers, "John Doe");
    assert!(row.winner);
}

#[tokio::test]
async fn schema_creation_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("awards.db");

    let pool = init_database(&db_path).await.expect("first init");
    sqlx::query("INSERT INTO movies (year, title, studios, producers, winner) VALUES (1990, 'A', 'W', 'P', 0)")
        .execute(&pool)
        .await
        .expect("insert row");
    drop(pool);

    // Re-running init must not wipe existing rows
    let pool = init_database(&db_path).await.expect("second init");
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
        .fetch_one(&pool)
        .await
        .expect("count rows");

    assert_eq!(count, 1);
}
