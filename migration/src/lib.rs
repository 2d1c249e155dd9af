pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_user_table;
mod m20240601_000002_create_location_table;
mod m20240601_000003_create_announcement_table;
mod m20240601_000004_create_faq_table;
mod m20240601_000005_create_series_table;
mod m20240601_000006_create_event_table;
mod m20240601_000007_create_contact_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_user_table::Migration),
            Box::new(m20240601_000002_create_location_table::Migration),
            Box::new(m20240601_000003_create_announcement_table::Migration),
            Box::new(m20240601_000004_create_faq_table::Migration),
            Box::new(m20240601_000005_create_series_table::Migration),
            Box::new(m20240601_000006_create_event_table::Migration),
            Box::new(m20240601_000007_create_contact_message_table::Migration),
        ]
    }
}
