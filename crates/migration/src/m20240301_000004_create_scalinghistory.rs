//! Create `scalinghistory` table.
//!
//! Append-only audit log. Rows carry a surrogate id so that several entries
//! for the same app and timestamp can coexist.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scalinghistory::Table)
                    .if_not_exists()
                    .col(pk_auto(Scalinghistory::Id))
                    .col(string_len(Scalinghistory::Appid, 255).not_null())
                    .col(big_integer(Scalinghistory::Timestamp).not_null())
                    .col(integer(Scalinghistory::Scalingtype).not_null())
                    .col(integer(Scalinghistory::Status).not_null())
                    .col(integer(Scalinghistory::Oldinstances).not_null())
                    .col(integer(Scalinghistory::Newinstances).not_null())
                    .col(string_len(Scalinghistory::Reason, 255).not_null())
                    .col(text(Scalinghistory::Message).not_null())
                    .col(
                        ColumnDef::new(Scalinghistory::Error)
                            .text()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Scalinghistory::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Scalinghistory { Table, Id, Appid, Timestamp, Scalingtype, Status, Oldinstances, Newinstances, Reason, Message, Error }
