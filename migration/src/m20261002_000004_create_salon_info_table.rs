use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SalonInfo::Table)
                    .if_not_exists()
                    .col(integer(SalonInfo::Id).primary_key())
                    .col(string_null(SalonInfo::Name))
                    .col(string_null(SalonInfo::Phone))
                    .col(string_null(SalonInfo::Whatsapp))
                    .col(string_null(SalonInfo::Address))
                    .col(string_null(SalonInfo::Email))
                    .col(string_null(SalonInfo::Instagram))
                    .col(string_null(SalonInfo::OpeningHours))
                    .col(json(SalonInfo::Galleries))
                    .col(
                        timestamp(SalonInfo::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SalonInfo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SalonInfo {
    Table,
    Id,
    Name,
    Phone,
    Whatsapp,
    Address,
    Email,
    Instagram,
    OpeningHours,
    Galleries,
    UpdatedAt,
}
