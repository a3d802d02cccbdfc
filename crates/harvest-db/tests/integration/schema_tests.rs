use harvest_core::AppError;
use harvest_db::{Database, DbConfig};

use crate::integration::common::setup_test_db;

#[tokio::test]
async fn ensure_tables_exist_is_idempotent() {
    let (db, _config, _container) = setup_test_db().await;

    // setup_test_db already created the tables once
    db.ensure_tables_exist().await.unwrap();
    db.ensure_tables_exist().await.unwrap();
}

#[tokio::test]
async fn ensure_database_exists_twice_does_not_fail() {
    let (_db, config, _container) = setup_test_db().await;
    let config = DbConfig {
        database: "harvest_fresh".into(),
        ..config
    };

    Database::ensure_database_exists(&config).await.unwrap();
    Database::ensure_database_exists(&config).await.unwrap();

    let fresh = Database::connect(&config).await.unwrap();
    fresh.ensure_tables_exist().await.unwrap();
    fresh.close().await;
}

#[tokio::test]
async fn ensure_database_exists_on_existing_database() {
    let (_db, config, _container) = setup_test_db().await;

    // harvest_test is created by the container itself
    Database::ensure_database_exists(&config).await.unwrap();
}

#[tokio::test]
async fn vacancy_foreign_key_is_enforced() {
    let (db, _config, _container) = setup_test_db().await;

    let err = sqlx::query("INSERT INTO vacancies (employer_id, title) VALUES ('missing', 'Ghost')")
        .execute(db.pool())
        .await
        .map_err(harvest_db::error::classify)
        .unwrap_err();

    assert!(matches!(err, AppError::ConstraintViolation(_)));
}

#[tokio::test]
async fn unreachable_server_is_connection_failure() {
    let config = DbConfig {
        host: "127.0.0.1".into(),
        port: 1,
        database: "harvest_test".into(),
        user: "postgres".into(),
        password: "postgres".into(),
        max_connections: 1,
    };

    let err = Database::ensure_database_exists(&config).await.unwrap_err();
    assert!(matches!(err, AppError::ConnectionFailure(_)));
}
