use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .col(pk_auto(Accounts::Id))
                    .col(string(Accounts::Username))
                    .col(string_null(Accounts::Email))
                    .col(string(Accounts::ObjectStatus).default("active"))
                    .col(timestamp(Accounts::CreatedAt))
                    .col(timestamp(Accounts::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Challenges::Table)
                    .col(pk_auto(Challenges::Id))
                    .col(string(Challenges::Name))
                    .col(string_null(Challenges::AvatarUrl))
                    .col(integer(Challenges::TotalDate))
                    .col(integer(Challenges::Price))
                    .col(integer(Challenges::TotalRun))
                    .col(integer(Challenges::MinUserRun))
                    .col(boolean(Challenges::IsGroupChallenges).default(false))
                    .col(string_null(Challenges::GiftReceivingMilestone))
                    .col(string(Challenges::Type))
                    .col(string(Challenges::ObjectStatus))
                    .col(integer(Challenges::SubmittedBeforeDay))
                    .col(timestamp(Challenges::CreatedAt))
                    .col(timestamp(Challenges::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductMainCategories::Table)
                    .col(pk_auto(ProductMainCategories::Id))
                    .col(string(ProductMainCategories::Name))
                    .col(string_null(ProductMainCategories::AvatarUrl))
                    .col(string(ProductMainCategories::Code))
                    .col(string(ProductMainCategories::ObjectStatus))
                    .col(timestamp(ProductMainCategories::CreatedAt))
                    .col(timestamp(ProductMainCategories::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductCategories::Table)
                    .col(pk_auto(ProductCategories::Id))
                    .col(string(ProductCategories::Name))
                    .col(string_null(ProductCategories::AvatarUrl))
                    .col(string(ProductCategories::Code))
                    .col(integer(ProductCategories::MainCategoryId))
                    .col(string(ProductCategories::ObjectStatus))
                    .col(timestamp(ProductCategories::CreatedAt))
                    .col(timestamp(ProductCategories::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_categories_main_category_id")
                            .from(ProductCategories::Table, ProductCategories::MainCategoryId)
                            .to(ProductMainCategories::Table, ProductMainCategories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ArticleCategories::Table)
                    .col(pk_auto(ArticleCategories::Id))
                    .col(string(ArticleCategories::Name))
                    .col(string_null(ArticleCategories::AvatarUrl))
                    .col(string(ArticleCategories::Code))
                    .col(string(ArticleCategories::ObjectStatus))
                    .col(timestamp(ArticleCategories::CreatedAt))
                    .col(timestamp(ArticleCategories::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Articles::Table)
                    .col(pk_auto(Articles::Id))
                    .col(string(Articles::Title))
                    .col(string(Articles::Code))
                    .col(integer(Articles::CategoryId))
                    .col(string_null(Articles::Description))
                    .col(string_null(Articles::Banner))
                    .col(string(Articles::ObjectStatus))
                    .col(timestamp(Articles::CreatedAt))
                    .col(timestamp(Articles::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_articles_category_id")
                            .from(Articles::Table, Articles::CategoryId)
                            .to(ArticleCategories::Table, ArticleCategories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // referencing tables first
        let mut td = Table::drop();
        td.table(Articles::Table);
        manager.drop_table(td).await?;

        let mut td = Table::drop();
        td.table(ArticleCategories::Table);
        manager.drop_table(td).await?;

        let mut td = Table::drop();
        td.table(ProductCategories::Table);
        manager.drop_table(td).await?;

        let mut td = Table::drop();
        td.table(ProductMainCategories::Table);
        manager.drop_table(td).await?;

        let mut td = Table::drop();
        td.table(Challenges::Table);
        manager.drop_table(td).await?;

        let mut td = Table::drop();
        td.table(Accounts::Table);
        manager.drop_table(td).await?;

        Ok(())
    }
}

#[derive(Iden)]
pub enum Accounts {
    Table,
    Id,
    Username,
    Email,
    ObjectStatus,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub enum Challenges {
    Table,
    Id,
    Name,
    AvatarUrl,
    TotalDate,
    Price,
    TotalRun,
    MinUserRun,
    IsGroupChallenges,
    GiftReceivingMilestone,
    Type,
    ObjectStatus,
    SubmittedBeforeDay,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub enum ProductMainCategories {
    Table,
    Id,
    Name,
    AvatarUrl,
    Code,
    ObjectStatus,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub enum ProductCategories {
    Table,
    Id,
    Name,
    AvatarUrl,
    Code,
    MainCategoryId,
    ObjectStatus,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub enum ArticleCategories {
    Table,
    Id,
    Name,
    AvatarUrl,
    Code,
    ObjectStatus,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub enum Articles {
    Table,
    Id,
    Title,
    Code,
    CategoryId,
    Description,
    Banner,
    ObjectStatus,
    CreatedAt,
    UpdatedAt,
}
