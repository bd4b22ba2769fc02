use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Donor::Table)
                    .if_not_exists()
                    .col(string(Donor::Id).primary_key())
                    .col(string(Donor::Name))
                    .col(date(Donor::BirthDate))
                    .col(string(Donor::BloodType))
                    .col(string(Donor::Gender))
                    .col(string(Donor::Phone))
                    .col(string(Donor::Email))
                    .col(string(Donor::IdentityDocument))
                    .col(string(Donor::Address))
                    .col(double_null(Donor::Latitude))
                    .col(double_null(Donor::Longitude))
                    .col(date_null(Donor::LastDonation))
                    .col(integer_null(Donor::DonationFrequency))
                    .col(boolean_null(Donor::EligibilityStatus))
                    .col(json_null(Donor::ContactPreferences))
                    .col(timestamp_with_time_zone(Donor::CreatedAt))
                    .col(timestamp_with_time_zone(Donor::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_donor_blood_type")
                    .table(Donor::Table)
                    .col(Donor::BloodType)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Donor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Donor {
    Table,
    Id,
    Name,
    BirthDate,
    BloodType,
    Gender,
    Phone,
    Email,
    IdentityDocument,
    Address,
    Latitude,
    Longitude,
    LastDonation,
    DonationFrequency,
    EligibilityStatus,
    ContactPreferences,
    CreatedAt,
    UpdatedAt,
}
