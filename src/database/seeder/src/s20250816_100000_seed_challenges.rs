use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let insert = Query::insert()
            .into_table(Challenges::Table)
            .columns([
                Challenges::Name,
                Challenges::AvatarUrl,
                Challenges::TotalDate,
                Challenges::Price,
                Challenges::TotalRun,
                Challenges::MinUserRun,
                Challenges::IsGroupChallenges,
                Challenges::GiftReceivingMilestone,
                Challenges::Type,
                Challenges::ObjectStatus,
                Challenges::SubmittedBeforeDay,
                Challenges::CreatedAt,
                Challenges::UpdatedAt,
            ])
            .values_panic([
                "30-Day Starter Run".into(),
                "https://cdn.stride.app/challenges/starter-run.png".into(),
                30.into(),
                0.into(),
                90.into(),
                3.into(),
                false.into(),
                "30,60,90".into(),
                "personal".into(),
                "active".into(),
                3.into(),
                Expr::current_timestamp().into(),
                Expr::current_timestamp().into(),
            ])
            .values_panic([
                "Team Marathon Month".into(),
                "https://cdn.stride.app/challenges/marathon-month.png".into(),
                30.into(),
                150000.into(),
                300.into(),
                5.into(),
                true.into(),
                "100,200,300".into(),
                "group".into(),
                "active".into(),
                5.into(),
                Expr::current_timestamp().into(),
                Expr::current_timestamp().into(),
            ])
            .to_owned();

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.exec_stmt(Query::delete().from_table(Challenges::Table).to_owned()).await
    }
}

#[derive(Iden)]
pub enum Challenges {
    Table,
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
