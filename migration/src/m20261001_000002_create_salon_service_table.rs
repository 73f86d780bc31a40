use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SalonService::Table)
                    .if_not_exists()
                    .col(pk_auto(SalonService::Id))
                    .col(string(SalonService::Name))
                    .col(text_null(SalonService::Description))
                    .col(double(SalonService::Price))
                    .col(string(SalonService::Duration))
                    .col(integer_null(SalonService::StaffId))
                    .col(json(SalonService::AddOns))
                    .col(
                        timestamp(SalonService::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_salon_service_staff_id")
                            .from(SalonService::Table, SalonService::StaffId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SalonService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SalonService {
    Table,
    Id,
    Name,
    Description,
    Price,
    Duration,
    StaffId,
    AddOns,
    CreatedAt,
}
