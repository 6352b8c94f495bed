//! Migrator registering one migration per autoscaler table.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_appinstancemetrics;
mod m20240301_000002_create_app_metric;
mod m20240301_000003_create_policy_json;
mod m20240301_000004_create_scalinghistory;
mod m20240301_000005_create_scalingcooldown;
mod m20240301_000006_create_activeschedule;
mod m20240301_000007_create_app_scaling_active_schedule;
mod m20240301_000008_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_appinstancemetrics::Migration),
            Box::new(m20240301_000002_create_app_metric::Migration),
            Box::new(m20240301_000003_create_policy_json::Migration),
            Box::new(m20240301_000004_create_scalinghistory::Migration),
            Box::new(m20240301_000005_create_scalingcooldown::Migration),
            Box::new(m20240301_000006_create_activeschedule::Migration),
            Box::new(m20240301_000007_create_app_scaling_active_schedule::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000008_add_indexes::Migration),
        ]
    }
}
