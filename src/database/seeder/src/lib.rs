use sea_orm_migration::prelude::*;

// Fixture history is kept out of the schema history by giving this migrator
// its own ledger table. Category seeders run before their dependents.
mod s20250816_100000_seed_challenges;
mod s20250816_100100_seed_product_main_categories;
mod s20250816_100200_seed_product_categories;
mod s20250816_100300_seed_article_categories;
mod s20250816_100400_seed_articles;

pub struct Seeder;

#[async_trait::async_trait]
impl MigratorTrait for Seeder {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(s20250816_100000_seed_challenges::Migration),
            Box::new(s20250816_100100_seed_product_main_categories::Migration),
            Box::new(s20250816_100200_seed_product_categories::Migration),
            Box::new(s20250816_100300_seed_article_categories::Migration),
            Box::new(s20250816_100400_seed_articles::Migration),
        ]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("seaql_seeds").into_iden()
    }
}
