//! Create `app_scaling_active_schedule` table (current schema).
//!
//! `id` is assigned by the scheduler; `start_job_identifier` links back to the
//! scheduler job that opened the window.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppScalingActiveSchedule::Table)
                    .if_not_exists()
                    .col(big_integer(AppScalingActiveSchedule::Id).primary_key())
                    .col(string_len(AppScalingActiveSchedule::AppId, 255).not_null())
                    .col(big_integer(AppScalingActiveSchedule::StartJobIdentifier).not_null())
                    .col(integer(AppScalingActiveSchedule::InstanceMinCount).not_null())
                    .col(integer(AppScalingActiveSchedule::InstanceMaxCount).not_null())
                    .col(
                        ColumnDef::new(AppScalingActiveSchedule::InitialMinInstanceCount)
                            .integer()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AppScalingActiveSchedule::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AppScalingActiveSchedule { Table, Id, AppId, StartJobIdentifier, InstanceMinCount, InstanceMaxCount, InitialMinInstanceCount }
