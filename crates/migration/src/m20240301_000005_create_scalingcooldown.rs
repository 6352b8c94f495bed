//! Create `scalingcooldown` table.
//!
//! At most one outstanding cooldown per app; `expireat` is caller time.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scalingcooldown::Table)
                    .if_not_exists()
                    .col(string_len(Scalingcooldown::Appid, 255).primary_key())
                    .col(big_integer(Scalingcooldown::Expireat).not_null())
                    .col(integer(Scalingcooldown::Status).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Scalingcooldown::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Scalingcooldown { Table, Appid, Expireat, Status }
