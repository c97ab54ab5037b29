pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20250305_090000_create_calculations_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20250305_090000_create_calculations_table::Migration),
        ]
    }
}
