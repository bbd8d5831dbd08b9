use sea_orm_migration::{MigratorTrait, SchemaManager};
use stride_db::database::Db;
use stride_migration::Migrator;

const TABLES: [&str; 6] = [
    "accounts",
    "challenges",
    "product_main_categories",
    "product_categories",
    "article_categories",
    "articles",
];

#[tokio::test]
async fn migrations_create_all_tables() {
    let db = Db::new("sqlite::memory:", 1).await.unwrap();
    db.run_migrations().await.unwrap();

    let manager = SchemaManager::new(db.conn());
    for table in TABLES {
        assert!(manager.has_table(table).await.unwrap(), "missing table {table}");
    }
}

#[tokio::test]
async fn add_column_up_then_down_restores_schema() {
    let db = Db::new("sqlite::memory:", 1).await.unwrap();
    db.run_migrations().await.unwrap();

    let manager = SchemaManager::new(db.conn());
    assert!(manager.has_column("accounts", "fcm_token").await.unwrap());

    // roll back just the add-column migration
    Migrator::down(db.conn(), Some(1)).await.unwrap();
    assert!(manager.has_table("accounts").await.unwrap());
    assert!(!manager.has_column("accounts", "fcm_token").await.unwrap());
}

#[tokio::test]
async fn revert_migrations_drops_all_tables() {
    let db = Db::new("sqlite::memory:", 1).await.unwrap();
    db.run_migrations().await.unwrap();
    db.revert_migrations().await.unwrap();

    let manager = SchemaManager::new(db.conn());
    for table in TABLES {
        assert!(!manager.has_table(table).await.unwrap(), "table {table} survived revert");
    }
}

#[tokio::test]
async fn applying_add_column_twice_fails_with_duplicate_column() {
    let db = Db::new("sqlite::memory:", 1).await.unwrap();
    db.run_migrations().await.unwrap();

    let manager = SchemaManager::new(db.conn());
    let unit = Migrator::migrations()
        .into_iter()
        .find(|m| m.name().contains("add_fcm_token"))
        .unwrap();

    let err = unit.up(&manager).await.unwrap_err();
    assert!(err.to_string().to_lowercase().contains("duplicate column"), "unexpected error: {err}");
}
