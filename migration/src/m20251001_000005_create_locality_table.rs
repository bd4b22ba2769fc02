use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Locality::Table)
                    .if_not_exists()
                    .col(pk_auto(Locality::Id))
                    .col(string(Locality::Street))
                    .col(string(Locality::Neighborhood))
                    .col(string(Locality::Zip))
                    .col(string(Locality::City))
                    .col(string(Locality::State))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Locality::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Locality {
    Table,
    Id,
    Street,
    Neighborhood,
    Zip,
    City,
    State,
}
