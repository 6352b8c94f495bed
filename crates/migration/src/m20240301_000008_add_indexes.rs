use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ScalingHistory: timeline reads filter by app and order by timestamp
        manager
            .create_index(
                Index::create()
                    .name("idx_scalinghistory_app_timestamp")
                    .table(Scalinghistory::Table)
                    .col(Scalinghistory::Appid)
                    .col(Scalinghistory::Timestamp)
                    .to_owned(),
            )
            .await?;

        // ActiveSchedule (current): at most one row per app
        manager
            .create_index(
                Index::create()
                    .name("uniq_active_schedule_app")
                    .table(AppScalingActiveSchedule::Table)
                    .col(AppScalingActiveSchedule::AppId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Retention sweeps delete by timestamp across all apps
        manager
            .create_index(
                Index::create()
                    .name("idx_appinstancemetrics_timestamp")
                    .table(Appinstancemetrics::Table)
                    .col(Appinstancemetrics::Timestamp)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_app_metric_timestamp")
                    .table(AppMetric::Table)
                    .col(AppMetric::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_scalinghistory_app_timestamp").table(Scalinghistory::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_active_schedule_app").table(AppScalingActiveSchedule::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_appinstancemetrics_timestamp").table(Appinstancemetrics::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_app_metric_timestamp").table(AppMetric::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Scalinghistory { Table, Appid, Timestamp }

#[derive(DeriveIden)]
enum AppScalingActiveSchedule { Table, AppId }

#[derive(DeriveIden)]
enum Appinstancemetrics { Table, Timestamp }

#[derive(DeriveIden)]
enum AppMetric { Table, Timestamp }
