use sea_orm::{entity::prelude::*, DatabaseConnection, Order, PaginatorTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::enums::{ScalingStatus, ScalingType};
use crate::errors::StoreError;
use crate::range::TimeRange;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "scalinghistory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "appid")]
    pub app_id: String,
    pub timestamp: i64,
    #[sea_orm(column_name = "scalingtype")]
    pub scaling_type: ScalingType,
    pub status: ScalingStatus,
    #[sea_orm(column_name = "oldinstances")]
    pub old_instances: i32,
    #[sea_orm(column_name = "newinstances")]
    pub new_instances: i32,
    pub reason: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub error: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// One scaling decision, including no-op and failed attempts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScalingHistoryRecord {
    pub app_id: String,
    pub timestamp: i64,
    pub scaling_type: ScalingType,
    pub status: ScalingStatus,
    pub old_instances: i32,
    pub new_instances: i32,
    pub reason: String,
    pub message: String,
    pub error: Option<String>,
}

impl From<Model> for ScalingHistoryRecord {
    fn from(m: Model) -> Self {
        Self {
            app_id: m.app_id,
            timestamp: m.timestamp,
            scaling_type: m.scaling_type,
            status: m.status,
            old_instances: m.old_instances,
            new_instances: m.new_instances,
            reason: m.reason,
            message: m.message,
            error: m.error,
        }
    }
}

/// The only steady-state write. Rows are never updated afterwards.
pub async fn append(db: &DatabaseConnection, record: &ScalingHistoryRecord) -> Result<(), StoreError> {
    let am = ActiveModel {
        app_id: Set(record.app_id.clone()),
        timestamp: Set(record.timestamp),
        scaling_type: Set(record.scaling_type),
        status: Set(record.status),
        old_instances: Set(record.old_instances),
        new_instances: Set(record.new_instances),
        reason: Set(record.reason.clone()),
        message: Set(record.message.clone()),
        error: Set(record.error.clone()),
        ..Default::default()
    };
    Entity::insert(am).exec_without_returning(db).await?;
    Ok(())
}

/// History of `app_id` within `range`. Entries sharing a timestamp keep their
/// insertion order in either direction of `order`.
pub async fn retrieve(
    db: &DatabaseConnection,
    app_id: &str,
    range: TimeRange,
    order: Order,
) -> Result<Vec<ScalingHistoryRecord>, StoreError> {
    let rows = Entity::find()
        .filter(Column::AppId.eq(app_id))
        .filter(Column::Timestamp.between(range.start, range.end))
        .order_by(Column::Timestamp, order)
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(ScalingHistoryRecord::from).collect())
}

pub async fn exists(db: &DatabaseConnection, app_id: &str, timestamp: i64) -> Result<bool, StoreError> {
    let n = Entity::find()
        .filter(Column::AppId.eq(app_id))
        .filter(Column::Timestamp.eq(timestamp))
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

pub async fn prune(db: &DatabaseConnection, before: i64) -> Result<u64, StoreError> {
    let res = Entity::delete_many()
        .filter(Column::Timestamp.lt(before))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
