use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260715_000001_create_user_table::User, m20260715_000002_create_doctor_table::Doctor,
};

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
                    .col(string(Booking::PatientName))
                    .col(string(Booking::PatientEmail))
                    .col(string(Booking::PatientPhone))
                    .col(integer(Booking::DoctorId))
                    .col(integer(Booking::UserId))
                    .col(date(Booking::AppointmentDate))
                    .col(string(Booking::TimeSlot))
                    .col(string(Booking::Reason))
                    .col(text_null(Booking::Notes))
                    .col(string(Booking::Status).default("pending"))
                    .col(
                        timestamp(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Booking::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_doctor_id")
                            .from(Booking::Table, Booking::DoctorId)
                            .to(Doctor::Table, Doctor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Booking::Table, Booking::UserId)
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
                    .name("idx_booking_user_date")
                    .table(Booking::Table)
                    .col(Booking::UserId)
                    .col(Booking::AppointmentDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_doctor_date")
                    .table(Booking::Table)
                    .col(Booking::DoctorId)
                    .col(Booking::AppointmentDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_status")
                    .table(Booking::Table)
                    .col(Booking::Status)
                    .to_owned(),
            )
            .await?;

        // Partial unique index backing the no-double-booking rule. A cancelled
        // booking frees its slot, so the uniqueness only covers live rows.
        // SeaQuery cannot express a filtered index, hence raw SQL.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_booking_active_slot \
                 ON booking (doctor_id, user_id, appointment_date, time_slot) \
                 WHERE status <> 'cancelled'",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    PatientName,
    PatientEmail,
    PatientPhone,
    DoctorId,
    UserId,
    AppointmentDate,
    TimeSlot,
    Reason,
    Notes,
    Status,
    CreatedAt,
    UpdatedAt,
}
