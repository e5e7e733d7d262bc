pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_cases_table;
mod m20250301_000003_create_items_table;
mod m20250301_000004_create_inventory_details_table;
mod m20250301_000005_seed_starter_cases;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_cases_table::Migration),
            Box::new(m20250301_000003_create_items_table::Migration),
            Box::new(m20250301_000004_create_inventory_details_table::Migration),
            Box::new(m20250301_000005_seed_starter_cases::Migration),
        ]
    }
}
