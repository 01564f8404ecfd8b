use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(string_len(Booking::OwnerName, 100).not_null())
                    .col(string_len(Booking::PhoneNumber, 30).not_null())
                    .col(string_len(Booking::PetName, 100).not_null())
                    .col(string_null(Booking::Breed))
                    .col(string_len(Booking::Gender, 10).not_null())
                    .col(boolean(Booking::IsNeutered).not_null())
                    .col(double_null(Booking::Weight))
                    .col(text_null(Booking::MedicalDetails))
                    .col(boolean(Booking::IsTakingMedication).not_null())
                    .col(text_null(Booking::MedicationDetails))
                    .col(text_null(Booking::Personality))
                    .col(
                        string_len(Booking::ServiceType, 50)
                            .not_null()
                            .default("unspecified"),
                    )
                    .col(boolean(Booking::PhotoConsent).not_null().default(false))
                    .col(boolean(Booking::IsAgreed).not_null())
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Booking::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    #[sea_orm(iden = "bookings")]
    Table,
    Id,
    OwnerName,
    PhoneNumber,
    PetName,
    Breed,
    Gender,
    IsNeutered,
    Weight,
    MedicalDetails,
    IsTakingMedication,
    MedicationDetails,
    Personality,
    ServiceType,
    PhotoConsent,
    IsAgreed,
    CreatedAt,
    UpdatedAt,
}
