use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// category_id 1 = 'A0001' (Training Tips), seeded by the article category seeder.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let rows: [(&str, &str, &str, &str); 4] = [
            (
                "Build Your Base Before Your First Challenge",
                "B0001",
                "How to work up to a 30-day running challenge without injury.",
                "https://cdn.stride.app/articles/build-your-base.png",
            ),
            (
                "Pacing a Group Run",
                "B0002",
                "Keeping a team together over a month of shared mileage.",
                "https://cdn.stride.app/articles/pacing-a-group-run.png",
            ),
            (
                "What to Eat the Night Before a Long Run",
                "B0003",
                "Simple meals that hold up over distance.",
                "https://cdn.stride.app/articles/night-before-meals.png",
            ),
            (
                "Reading Your Weekly Mileage",
                "B0004",
                "Using challenge stats to spot overtraining early.",
                "https://cdn.stride.app/articles/weekly-mileage.png",
            ),
        ];

        let mut insert = Query::insert()
            .into_table(Articles::Table)
            .columns([
                Articles::Title,
                Articles::Code,
                Articles::CategoryId,
                Articles::Description,
                Articles::Banner,
                Articles::ObjectStatus,
                Articles::CreatedAt,
                Articles::UpdatedAt,
            ])
            .to_owned();

        for (title, code, description, banner) in rows {
            insert.values_panic([
                title.into(),
                code.into(),
                1.into(),
                description.into(),
                banner.into(),
                "active".into(),
                Expr::current_timestamp().into(),
                Expr::current_timestamp().into(),
            ]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.exec_stmt(Query::delete().from_table(Articles::Table).to_owned()).await
    }
}

#[derive(Iden)]
pub enum Articles {
    Table,
    Title,
    Code,
    CategoryId,
    Description,
    Banner,
    ObjectStatus,
    CreatedAt,
    UpdatedAt,
}
