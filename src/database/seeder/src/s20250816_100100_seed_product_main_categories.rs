use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let insert = Query::insert()
            .into_table(ProductMainCategories::Table)
            .columns([
                ProductMainCategories::Name,
                ProductMainCategories::AvatarUrl,
                ProductMainCategories::Code,
                ProductMainCategories::ObjectStatus,
                ProductMainCategories::CreatedAt,
                ProductMainCategories::UpdatedAt,
            ])
            .values_panic([
                "Running Gear".into(),
                "https://cdn.stride.app/categories/running-gear.png".into(),
                "0001".into(),
                "active".into(),
                Expr::current_timestamp().into(),
                Expr::current_timestamp().into(),
            ])
            .values_panic([
                "Nutrition".into(),
                "https://cdn.stride.app/categories/nutrition.png".into(),
                "0002".into(),
                "active".into(),
                Expr::current_timestamp().into(),
                Expr::current_timestamp().into(),
            ])
            .to_owned();

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(ProductMainCategories::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ProductMainCategories {
    Table,
    Name,
    AvatarUrl,
    Code,
    ObjectStatus,
    CreatedAt,
    UpdatedAt,
}
