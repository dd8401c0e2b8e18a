use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LabAppointment::Table)
                    .if_not_exists()
                    .col(pk_auto(LabAppointment::Id))
                    .col(string(LabAppointment::Name))
                    .col(string(LabAppointment::Email))
                    .col(string(LabAppointment::Phone))
                    .col(string(LabAppointment::TestType))
                    .col(date(LabAppointment::Date))
                    .col(
                        timestamp(LabAppointment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LabAppointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LabAppointment {
    Table,
    Id,
    Name,
    Email,
    Phone,
    TestType,
    Date,
    CreatedAt,
}
