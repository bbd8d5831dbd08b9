use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use thiserror::Error;

use stride_migration::Migrator;
use stride_seeder::Seeder;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database error: {0}")]
    Db(#[from] sea_orm::DbErr),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

pub struct Db {
    // slightly misleading name but this is a connection pool, not a single connection
    conn: DatabaseConnection,
}

impl Db {
    pub async fn new(url: &str, pool_size: u32) -> DatabaseResult<Self> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size).min_connections(1);

        let db = Database::connect(opt).await?;

        Ok(Self { conn: db })
    }

    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Applies all pending schema migrations, in timestamp order.
    pub async fn run_migrations(&self) -> DatabaseResult<()> {
        Migrator::up(&self.conn, None).await?;
        Ok(())
    }

    /// Rolls back every applied schema migration.
    pub async fn revert_migrations(&self) -> DatabaseResult<()> {
        Migrator::down(&self.conn, None).await?;
        Ok(())
    }

    /// Applies all pending seed fixtures. Schema migrations must have been
    /// applied first, the fixtures reference seeded category rows by id.
    pub async fn run_seeders(&self) -> DatabaseResult<()> {
        Seeder::up(&self.conn, None).await?;
        Ok(())
    }

    /// Rolls back every applied seed fixture, leaving the seeded tables empty.
    pub async fn revert_seeders(&self) -> DatabaseResult<()> {
        Seeder::down(&self.conn, None).await?;
        Ok(())
    }
}
