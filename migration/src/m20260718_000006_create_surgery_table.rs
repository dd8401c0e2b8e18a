use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Surgery::Table)
                    .if_not_exists()
                    .col(pk_auto(Surgery::Id))
                    .col(string(Surgery::Name))
                    .col(string(Surgery::Email))
                    .col(string(Surgery::Phone))
                    .col(string(Surgery::Doctor))
                    .col(string(Surgery::SurgeryType))
                    .col(date(Surgery::Date))
                    .col(string_null(Surgery::PrescriptionFileName))
                    .col(
                        timestamp(Surgery::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Surgery::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Surgery {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Doctor,
    SurgeryType,
    Date,
    PrescriptionFileName,
    CreatedAt,
}
