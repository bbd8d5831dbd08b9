use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let insert = Query::insert()
            .into_table(ArticleCategories::Table)
            .columns([
                ArticleCategories::Name,
                ArticleCategories::AvatarUrl,
                ArticleCategories::Code,
                ArticleCategories::ObjectStatus,
                ArticleCategories::CreatedAt,
                ArticleCategories::UpdatedAt,
            ])
            .values_panic([
                "Training Tips".into(),
                "https://cdn.stride.app/categories/training-tips.png".into(),
                "A0001".into(),
                "active".into(),
                Expr::current_timestamp().into(),
                Expr::current_timestamp().into(),
            ])
            .to_owned();

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.exec_stmt(Query::delete().from_table(ArticleCategories::Table).to_owned()).await
    }
}

#[derive(Iden)]
pub enum ArticleCategories {
    Table,
    Name,
    AvatarUrl,
    Code,
    ObjectStatus,
    CreatedAt,
    UpdatedAt,
}
