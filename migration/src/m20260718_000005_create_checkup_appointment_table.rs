use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CheckupAppointment::Table)
                    .if_not_exists()
                    .col(pk_auto(CheckupAppointment::Id))
                    .col(string(CheckupAppointment::Name))
                    .col(string(CheckupAppointment::Email))
                    .col(string(CheckupAppointment::Phone))
                    .col(string(CheckupAppointment::Package))
                    .col(date(CheckupAppointment::Date))
                    .col(
                        timestamp(CheckupAppointment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CheckupAppointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CheckupAppointment {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Package,
    Date,
    CreatedAt,
}
