use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BloodTypeStat::Table)
                    .if_not_exists()
                    .col(string(BloodTypeStat::BloodType).primary_key())
                    .col(integer(BloodTypeStat::Received).default(0))
                    .col(double(BloodTypeStat::Sent).default(0.0))
                    .col(double(BloodTypeStat::ShortTime).default(20.0))
                    .col(double(BloodTypeStat::LongTime).default(0.0))
                    .col(integer_null(BloodTypeStat::BackupReceived))
                    .col(double_null(BloodTypeStat::BackupSent))
                    .col(double_null(BloodTypeStat::BackupShortTime))
                    .col(double_null(BloodTypeStat::BackupLongTime))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BloodTypeStat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BloodTypeStat {
    Table,
    BloodType,
    Received,
    Sent,
    ShortTime,
    LongTime,
    BackupReceived,
    BackupSent,
    BackupShortTime,
    BackupLongTime,
}
