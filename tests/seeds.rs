use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};
use sea_orm_migration::{MigratorTrait, SchemaManager};
use stride_db::database::Db;
use stride_seeder::Seeder;

async fn count(conn: &DatabaseConnection, sql: &str) -> i64 {
    let row = conn
        .query_one_raw(Statement::from_string(DbBackend::Sqlite, sql.to_owned()))
        .await
        .unwrap()
        .unwrap();
    row.try_get("", "n").unwrap()
}

async fn seeded_db() -> Db {
    let db = Db::new("sqlite::memory:", 1).await.unwrap();
    db.run_migrations().await.unwrap();
    db.run_seeders().await.unwrap();
    db
}

#[tokio::test]
async fn seeders_insert_expected_row_counts() {
    let db = seeded_db().await;

    for (table, expected) in [
        ("challenges", 2),
        ("product_main_categories", 2),
        ("product_categories", 5),
        ("article_categories", 1),
        ("articles", 4),
    ] {
        let n = count(db.conn(), &format!("SELECT COUNT(*) AS n FROM {table}")).await;
        assert_eq!(n, expected, "unexpected row count in {table}");
    }
}

#[tokio::test]
async fn revert_seeders_empties_seeded_tables() {
    let db = seeded_db().await;
    db.revert_seeders().await.unwrap();

    for table in
        ["challenges", "product_main_categories", "product_categories", "article_categories", "articles"]
    {
        let n = count(db.conn(), &format!("SELECT COUNT(*) AS n FROM {table}")).await;
        assert_eq!(n, 0, "{table} not empty after revert");

        // the schema itself stays in place
        let manager = SchemaManager::new(db.conn());
        assert!(manager.has_table(table).await.unwrap());
    }
}

#[tokio::test]
async fn product_categories_reference_expected_main_categories() {
    let db = seeded_db().await;

    let gear = count(
        db.conn(),
        "SELECT COUNT(*) AS n FROM product_categories pc \
         JOIN product_main_categories pmc ON pc.main_category_id = pmc.id \
         WHERE pmc.code = '0001'",
    )
    .await;
    assert_eq!(gear, 2);

    let nutrition = count(
        db.conn(),
        "SELECT COUNT(*) AS n FROM product_categories pc \
         JOIN product_main_categories pmc ON pc.main_category_id = pmc.id \
         WHERE pmc.code = '0002'",
    )
    .await;
    assert_eq!(nutrition, 3);
}

#[tokio::test]
async fn articles_reference_seeded_article_category() {
    let db = seeded_db().await;

    let n = count(
        db.conn(),
        "SELECT COUNT(*) AS n FROM articles a \
         JOIN article_categories ac ON a.category_id = ac.id \
         WHERE ac.code = 'A0001'",
    )
    .await;
    assert_eq!(n, 4);
}

#[tokio::test]
async fn seeded_rows_carry_insertion_timestamps() {
    let db = seeded_db().await;

    for table in
        ["challenges", "product_main_categories", "product_categories", "article_categories", "articles"]
    {
        let n = count(
            db.conn(),
            &format!(
                "SELECT COUNT(*) AS n FROM {table} WHERE created_at IS NULL OR updated_at IS NULL"
            ),
        )
        .await;
        assert_eq!(n, 0, "{table} has rows without timestamps");
    }
}

#[tokio::test]
async fn seeding_dependents_before_categories_fails_with_foreign_key_error() {
    let db = Db::new("sqlite::memory:", 1).await.unwrap();
    db.run_migrations().await.unwrap();

    let manager = SchemaManager::new(db.conn());
    let unit = Seeder::migrations()
        .into_iter()
        .find(|m| m.name().contains("seed_product_categories"))
        .unwrap();

    // product_main_categories has not been seeded, the bulk insert must fail whole
    let err = unit.up(&manager).await.unwrap_err();
    assert!(err.to_string().to_lowercase().contains("foreign key"), "unexpected error: {err}");

    let n = count(db.conn(), "SELECT COUNT(*) AS n FROM product_categories").await;
    assert_eq!(n, 0);
}
