pub use sea_orm_migration::prelude::*;

mod m20260115_000001_create_organization_table;
mod m20260115_000002_create_user_table;
mod m20260115_000003_create_workspace_table;
mod m20260115_000004_create_document_table;
mod m20260115_000005_create_flag_table;
mod m20260115_000006_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_create_organization_table::Migration),
            Box::new(m20260115_000002_create_user_table::Migration),
            Box::new(m20260115_000003_create_workspace_table::Migration),
            Box::new(m20260115_000004_create_document_table::Migration),
            Box::new(m20260115_000005_create_flag_table::Migration),
            Box::new(m20260115_000006_create_notification_table::Migration),
        ]
    }
}
