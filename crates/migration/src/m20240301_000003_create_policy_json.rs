//! Create `policy_json` table.
//!
//! One serialized scaling policy per app, plus the writer-supplied guid.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PolicyJson::Table)
                    .if_not_exists()
                    .col(string_len(PolicyJson::AppId, 255).primary_key())
                    .col(text(PolicyJson::PolicyJson).not_null())
                    .col(string_len(PolicyJson::Guid, 64).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PolicyJson::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PolicyJson { Table, AppId, PolicyJson, Guid }
