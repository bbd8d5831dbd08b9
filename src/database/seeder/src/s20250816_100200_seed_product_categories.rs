use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// main_category_id references the rows seeded by the product main category
// seeder: 1 = '0001' (Running Gear), 2 = '0002' (Nutrition).
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let rows: [(&str, &str, &str, i32); 5] = [
            ("Shoes", "https://cdn.stride.app/categories/shoes.png", "U0001", 1),
            ("Apparel", "https://cdn.stride.app/categories/apparel.png", "U0002", 1),
            ("Energy Gels", "https://cdn.stride.app/categories/energy-gels.png", "U0003", 2),
            ("Drinks", "https://cdn.stride.app/categories/drinks.png", "U0004", 2),
            ("Supplements", "https://cdn.stride.app/categories/supplements.png", "U0005", 2),
        ];

        let mut insert = Query::insert()
            .into_table(ProductCategories::Table)
            .columns([
                ProductCategories::Name,
                ProductCategories::AvatarUrl,
                ProductCategories::Code,
                ProductCategories::MainCategoryId,
                ProductCategories::ObjectStatus,
                ProductCategories::CreatedAt,
                ProductCategories::UpdatedAt,
            ])
            .to_owned();

        for (name, avatar_url, code, main_category_id) in rows {
            insert.values_panic([
                name.into(),
                avatar_url.into(),
                code.into(),
                main_category_id.into(),
                "active".into(),
                Expr::current_timestamp().into(),
                Expr::current_timestamp().into(),
            ]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.exec_stmt(Query::delete().from_table(ProductCategories::Table).to_owned()).await
    }
}

#[derive(Iden)]
pub enum ProductCategories {
    Table,
    Name,
    AvatarUrl,
    Code,
    MainCategoryId,
    ObjectStatus,
    CreatedAt,
    UpdatedAt,
}
