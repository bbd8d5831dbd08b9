use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(stride_seeder::Seeder).await;
}
