use sea_orm::{entity::prelude::*, DatabaseConnection, Order, PaginatorTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;
use crate::range::TimeRange;

/// One raw sample reported by a single app instance.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appinstancemetrics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "appid")]
    pub app_id: String,
    #[sea_orm(primary_key, auto_increment = false, column_name = "instanceindex")]
    pub instance_index: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
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

/// Insert a sample. A second sample with the same key is rejected with
/// `ConstraintViolation`, never merged.
pub async fn insert(db: &DatabaseConnection, sample: &Model) -> Result<(), StoreError> {
    let am = ActiveModel {
        app_id: Set(sample.app_id.clone()),
        instance_index: Set(sample.instance_index),
        name: Set(sample.name.clone()),
        unit: Set(sample.unit.clone()),
        timestamp: Set(sample.timestamp),
        value: Set(sample.value.clone()),
    };
    Entity::insert(am).exec_without_returning(db).await?;
    Ok(())
}

pub async fn exists(db: &DatabaseConnection, app_id: &str, instance_index: i32, name: &str, timestamp: i64) -> Result<bool, StoreError> {
    let found = Entity::find_by_id((app_id.to_string(), instance_index, name.to_string(), timestamp))
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

/// Samples of one metric for an app within `range`, optionally narrowed to a
/// single instance, ordered by timestamp.
pub async fn retrieve(
    db: &DatabaseConnection,
    app_id: &str,
    instance_index: Option<i32>,
    name: &str,
    range: TimeRange,
    order: Order,
) -> Result<Vec<Model>, StoreError> {
    let mut query = Entity::find()
        .filter(Column::AppId.eq(app_id))
        .filter(Column::Name.eq(name))
        .filter(Column::Timestamp.between(range.start, range.end));
    if let Some(index) = instance_index {
        query = query.filter(Column::InstanceIndex.eq(index));
    }
    let rows = query
        .order_by(Column::Timestamp, order)
        .order_by_asc(Column::InstanceIndex)
        .all(db)
        .await?;
    Ok(rows)
}

/// Retention sweep: drop every sample older than `before`.
pub async fn prune(db: &DatabaseConnection, before: i64) -> Result<u64, StoreError> {
    let res = Entity::delete_many()
        .filter(Column::Timestamp.lt(before))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
