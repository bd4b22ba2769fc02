pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_admin_table;
mod m20251001_000002_create_donor_table;
mod m20251001_000003_create_stock_batch_table;
mod m20251001_000004_create_scheduling_table;
mod m20251001_000005_create_locality_table;
mod m20251001_000006_create_blood_type_stat_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_admin_table::Migration),
            Box::new(m20251001_000002_create_donor_table::Migration),
            Box::new(m20251001_000003_create_stock_batch_table::Migration),
            Box::new(m20251001_000004_create_scheduling_table::Migration),
            Box::new(m20251001_000005_create_locality_table::Migration),
            Box::new(m20251001_000006_create_blood_type_stat_table::Migration),
        ]
    }
}
