pub use sea_orm_migration::prelude::*;

mod m20260715_000001_create_user_table;
mod m20260715_000002_create_doctor_table;
mod m20260716_000003_create_booking_table;
mod m20260718_000004_create_lab_appointment_table;
mod m20260718_000005_create_checkup_appointment_table;
mod m20260718_000006_create_surgery_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260715_000001_create_user_table::Migration),
            Box::new(m20260715_000002_create_doctor_table::Migration),
            Box::new(m20260716_000003_create_booking_table::Migration),
            Box::new(m20260718_000004_create_lab_appointment_table::Migration),
            Box::new(m20260718_000005_create_checkup_appointment_table::Migration),
            Box::new(m20260718_000006_create_surgery_table::Migration),
        ]
    }
}
