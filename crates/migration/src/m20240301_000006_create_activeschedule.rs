//! Create the legacy `activeschedule` table.
//!
//! Keyed by app id; `initialmininstancecount` is nullable (no override).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Activeschedule::Table)
                    .if_not_exists()
                    .col(string_len(Activeschedule::Appid, 255).primary_key())
                    .col(string_len(Activeschedule::Scheduleid, 255).not_null())
                    .col(integer(Activeschedule::Instancemincount).not_null())
                    .col(integer(Activeschedule::Instancemaxcount).not_null())
                    .col(
                        ColumnDef::new(Activeschedule::Initialmininstancecount)
                            .integer()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Activeschedule::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Activeschedule { Table, Appid, Scheduleid, Instancemincount, Instancemaxcount, Initialmininstancecount }
