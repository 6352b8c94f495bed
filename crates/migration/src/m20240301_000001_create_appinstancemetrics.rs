//! Create `appinstancemetrics` table.
//!
//! Raw per-instance samples. The composite primary key rejects a second sample
//! for the same (app, instance, metric, timestamp).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appinstancemetrics::Table)
                    .if_not_exists()
                    .col(string_len(Appinstancemetrics::Appid, 255).not_null())
                    .col(integer(Appinstancemetrics::Instanceindex).not_null())
                    .col(string_len(Appinstancemetrics::Name, 255).not_null())
                    .col(string_len(Appinstancemetrics::Unit, 64).not_null())
                    .col(big_integer(Appinstancemetrics::Timestamp).not_null())
                    .col(string_len(Appinstancemetrics::Value, 255).not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_appinstancemetrics")
                            .col(Appinstancemetrics::Appid)
                            .col(Appinstancemetrics::Instanceindex)
                            .col(Appinstancemetrics::Name)
                            .col(Appinstancemetrics::Timestamp),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Appinstancemetrics::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Appinstancemetrics { Table, Appid, Instanceindex, Name, Unit, Timestamp, Value }
