use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scheduling::Table)
                    .if_not_exists()
                    .col(string(Scheduling::Id).primary_key())
                    .col(string(Scheduling::UserId))
                    .col(timestamp_with_time_zone(Scheduling::ScheduledAt))
                    .col(string_null(Scheduling::Location))
                    .col(string(Scheduling::Status).default("scheduled"))
                    .col(timestamp_with_time_zone(Scheduling::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scheduling::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Scheduling {
    Table,
    Id,
    UserId,
    ScheduledAt,
    Location,
    Status,
    CreatedAt,
}
