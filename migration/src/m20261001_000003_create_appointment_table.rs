use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_user_table::User,
    m20261001_000002_create_salon_service_table::SalonService,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::Id))
                    .col(integer(Appointment::ServiceId))
                    .col(string(Appointment::EstimatedDuration))
                    .col(timestamp(Appointment::ScheduledAt))
                    .col(integer(Appointment::ClientId))
                    .col(integer(Appointment::StaffId))
                    .col(string_len(Appointment::Status, 16).default("pendente"))
                    .col(json(Appointment::AddOns))
                    .col(integer(Appointment::Version).default(1))
                    .col(
                        timestamp(Appointment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_service_id")
                            .from(Appointment::Table, Appointment::ServiceId)
                            .to(SalonService::Table, SalonService::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_client_id")
                            .from(Appointment::Table, Appointment::ClientId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_staff_id")
                            .from(Appointment::Table, Appointment::StaffId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_scheduled_at")
                    .table(Appointment::Table)
                    .col(Appointment::ScheduledAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    Table,
    Id,
    ServiceId,
    EstimatedDuration,
    ScheduledAt,
    ClientId,
    StaffId,
    Status,
    AddOns,
    Version,
    CreatedAt,
}
