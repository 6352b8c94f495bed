//! Legacy `activeschedule` table: one row per app, keyed by app id.
use std::collections::HashMap;

use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, PaginatorTrait, Set, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;
use crate::schedule::{ActiveSchedule, ScheduleDescriptor};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activeschedule")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "appid")]
    pub app_id: String,
    #[sea_orm(column_name = "scheduleid")]
    pub schedule_id: String,
    #[sea_orm(column_name = "instancemincount")]
    pub instance_min_count: i32,
    #[sea_orm(column_name = "instancemaxcount")]
    pub instance_max_count: i32,
    #[sea_orm(column_name = "initialmininstancecount", nullable)]
    pub initial_min_instance_count: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ActiveSchedule {
    fn from(m: Model) -> Self {
        Self {
            schedule_id: m.schedule_id,
            instance_min_count: m.instance_min_count,
            instance_max_count: m.instance_max_count,
            initial_min_instance_count: m.initial_min_instance_count,
        }
    }
}

fn active_model(app_id: &str, schedule: &ScheduleDescriptor) -> ActiveModel {
    ActiveModel {
        app_id: Set(app_id.to_string()),
        schedule_id: Set(schedule.schedule_id.to_string()),
        instance_min_count: Set(schedule.instance_min_count),
        instance_max_count: Set(schedule.instance_max_count),
        // absent override: leave the column out of the INSERT entirely
        initial_min_instance_count: match schedule.initial_min_override() {
            Some(v) => Set(Some(v)),
            None => NotSet,
        },
    }
}

/// Plain insert. Fails with `ConstraintViolation` if the app already has an
/// active schedule.
pub async fn insert(db: &DatabaseConnection, app_id: &str, schedule: &ScheduleDescriptor) -> Result<(), StoreError> {
    Entity::insert(active_model(app_id, schedule)).exec_without_returning(db).await?;
    Ok(())
}

/// Make `schedule` the active one for `app_id`, replacing any previous row in
/// the same transaction.
pub async fn activate(db: &DatabaseConnection, app_id: &str, schedule: &ScheduleDescriptor) -> Result<(), StoreError> {
    let txn = db.begin().await?;
    Entity::delete_by_id(app_id.to_string()).exec(&txn).await?;
    Entity::insert(active_model(app_id, schedule)).exec_without_returning(&txn).await?;
    txn.commit().await?;
    Ok(())
}

pub async fn get(db: &DatabaseConnection, app_id: &str) -> Result<ActiveSchedule, StoreError> {
    Entity::find_by_id(app_id.to_string())
        .one(db)
        .await?
        .map(ActiveSchedule::from)
        .ok_or_else(|| StoreError::not_found("active schedule", app_id))
}

pub async fn delete(db: &DatabaseConnection, app_id: &str) -> Result<bool, StoreError> {
    let res = Entity::delete_by_id(app_id.to_string()).exec(db).await?;
    Ok(res.rows_affected > 0)
}

pub async fn list(db: &DatabaseConnection) -> Result<HashMap<String, ActiveSchedule>, StoreError> {
    let rows = Entity::find().all(db).await?;
    Ok(rows.into_iter().map(|m| (m.app_id.clone(), ActiveSchedule::from(m))).collect())
}

pub async fn exists(db: &DatabaseConnection, app_id: &str) -> Result<bool, StoreError> {
    Ok(Entity::find_by_id(app_id.to_string()).one(db).await?.is_some())
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, StoreError> {
    Ok(Entity::find().count(db).await?)
}

pub async fn delete_all(db: &DatabaseConnection) -> Result<u64, StoreError> {
    Ok(Entity::delete_many().exec(db).await?.rows_affected)
}
