//! Create `app_metric` table.
//!
//! Aggregated or custom per-application samples keyed by (app_id, metric_type, timestamp).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppMetric::Table)
                    .if_not_exists()
                    .col(string_len(AppMetric::AppId, 255).not_null())
                    .col(string_len(AppMetric::MetricType, 255).not_null())
                    .col(string_len(AppMetric::Unit, 64).not_null())
                    .col(big_integer(AppMetric::Timestamp).not_null())
                    .col(string_len(AppMetric::Value, 255).not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_app_metric")
                            .col(AppMetric::AppId)
                            .col(AppMetric::MetricType)
                            .col(AppMetric::Timestamp),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AppMetric::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AppMetric { Table, AppId, MetricType, Unit, Timestamp, Value }
