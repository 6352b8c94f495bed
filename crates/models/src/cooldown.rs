use sea_orm::{entity::prelude::*, sea_query::OnConflict, DatabaseConnection, PaginatorTrait, Set};
use serde::{Deserialize, Serialize};

use crate::enums::ScalingStatus;
use crate::errors::StoreError;

/// The suppression window left behind by the last scaling action of an app.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "scalingcooldown")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "appid")]
    pub app_id: String,
    #[sea_orm(column_name = "expireat")]
    pub expire_at: i64,
    pub status: ScalingStatus,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Start (or replace) the cooldown for `app_id`. Only the latest call is kept.
pub async fn record(db: &DatabaseConnection, app_id: &str, expire_at: i64, status: ScalingStatus) -> Result<(), StoreError> {
    let am = ActiveModel {
        app_id: Set(app_id.to_string()),
        expire_at: Set(expire_at),
        status: Set(status),
    };
    Entity::insert(am)
        .on_conflict(
            OnConflict::column(Column::AppId)
                .update_columns([Column::ExpireAt, Column::Status])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    Ok(())
}

/// True iff a cooldown row exists whose `expire_at` is strictly after `now`.
/// `now` comes from the caller; the engine clock is never consulted.
pub async fn is_in_cooldown(db: &DatabaseConnection, app_id: &str, now: i64) -> Result<bool, StoreError> {
    let n = Entity::find()
        .filter(Column::AppId.eq(app_id))
        .filter(Column::ExpireAt.gt(now))
        .count(db)
        .await?;
    Ok(n > 0)
}

pub async fn get(db: &DatabaseConnection, app_id: &str) -> Result<Model, StoreError> {
    Entity::find_by_id(app_id.to_string())
        .one(db)
        .await?
        .ok_or_else(|| StoreError::not_found("cooldown", app_id))
}

pub async fn clear(db: &DatabaseConnection, app_id: &str) -> Result<bool, StoreError> {
    let res = Entity::delete_by_id(app_id.to_string()).exec(db).await?;
    Ok(res.rows_affected > 0)
}

pub async fn exists(db: &DatabaseConnection, app_id: &str, expire_at: i64) -> Result<bool, StoreError> {
    let n = Entity::find()
        .filter(Column::AppId.eq(app_id))
        .filter(Column::ExpireAt.eq(expire_at))
        .count(db)
        .await?;
    Ok(n > 0)
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, StoreError> {
    Ok(Entity::find().count(db).await?)
}

pub async fn delete_all(db: &DatabaseConnection) -> Result<u64, StoreError> {
    Ok(Entity::delete_many().exec(db).await?.rows_affected)
}
