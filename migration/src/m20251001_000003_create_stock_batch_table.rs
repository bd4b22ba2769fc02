use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StockBatch::Table)
                    .if_not_exists()
                    .col(pk_auto(StockBatch::Id))
                    .col(string_uniq(StockBatch::Lot))
                    .col(string(StockBatch::BloodType))
                    .col(integer(StockBatch::Quantity).default(0))
                    .col(date(StockBatch::ExpirationDate))
                    .col(string(StockBatch::Status).default("available"))
                    .col(timestamp_with_time_zone(StockBatch::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StockBatch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StockBatch {
    Table,
    Id,
    Lot,
    BloodType,
    Quantity,
    ExpirationDate,
    Status,
    CreatedAt,
}
