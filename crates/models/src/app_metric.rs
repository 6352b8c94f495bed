use sea_orm::{entity::prelude::*, DatabaseConnection, Order, PaginatorTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;
use crate::range::TimeRange;

/// An aggregated or custom metric sample for a whole app.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "app_metric")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub app_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub metric_type: String,
    pub unit: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub timestamp: i64,
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn insert(db: &DatabaseConnection, sample: &Model) -> Result<(), StoreError> {
    let am = ActiveModel {
        app_id: Set(sample.app_id.clone()),
        metric_type: Set(sample.metric_type.clone()),
        unit: Set(sample.unit.clone()),
        timestamp: Set(sample.timestamp),
        value: Set(sample.value.clone()),
    };
    Entity::insert(am).exec_without_returning(db).await?;
    Ok(())
}

pub async fn exists(db: &DatabaseConnection, app_id: &str, metric_type: &str, timestamp: i64) -> Result<bool, StoreError> {
    let found = Entity::find_by_id((app_id.to_string(), metric_type.to_string(), timestamp))
        .one(db)
        .await?;
    Ok(found.is_some())
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, StoreError> {
    Ok(Entity::find().count(db).await?)
}

pub async fn delete_all(db: &DatabaseConnection) -> Result<u64, StoreError> {
    Ok(Entity::delete_many().exec(db).await?.rows_affected)
}

pub async fn retrieve(
    db: &DatabaseConnection,
    app_id: &str,
    metric_type: &str,
    range: TimeRange,
    order: Order,
) -> Result<Vec<Model>, StoreError> {
    let rows = Entity::find()
        .filter(Column::AppId.eq(app_id))
        .filter(Column::MetricType.eq(metric_type))
        .filter(Column::Timestamp.between(range.start, range.end))
        .order_by(Column::Timestamp, order)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn prune(db: &DatabaseConnection, before: i64) -> Result<u64, StoreError> {
    let res = Entity::delete_many()
        .filter(Column::Timestamp.lt(before))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
