use sea_orm::{entity::prelude::*, sea_query::OnConflict, DatabaseConnection, PaginatorTrait, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;
use crate::scaling_policy::ScalingPolicy;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "policy_json")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub app_id: String,
    #[sea_orm(column_type = "Text")]
    pub policy_json: String,
    pub guid: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// A decoded policy row. `guid` is returned exactly as the writer stored it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub app_id: String,
    pub policy: ScalingPolicy,
    pub guid: String,
}

impl TryFrom<Model> for PolicyRecord {
    type Error = StoreError;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let policy = ScalingPolicy::from_json(&m.policy_json)
            .map_err(|e| StoreError::SerializationFailure(format!("policy for app {}: {}", m.app_id, e)))?;
        Ok(Self { app_id: m.app_id, policy, guid: m.guid })
    }
}

/// Replace the whole policy document for `app_id` in one statement, so readers
/// see either the old row or the new one.
pub async fn upsert(db: &DatabaseConnection, app_id: &str, policy: &ScalingPolicy, guid: &str) -> Result<(), StoreError> {
    let am = ActiveModel {
        app_id: Set(app_id.to_string()),
        policy_json: Set(policy.to_json()?),
        guid: Set(guid.to_string()),
    };
    Entity::insert(am)
        .on_conflict(
            OnConflict::column(Column::AppId)
                .update_columns([Column::PolicyJson, Column::Guid])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    Ok(())
}

pub async fn get(db: &DatabaseConnection, app_id: &str) -> Result<PolicyRecord, StoreError> {
    let found = Entity::find_by_id(app_id.to_string())
        .one(db)
        .await?
        .ok_or_else(|| StoreError::not_found("policy", app_id))?;
    PolicyRecord::try_from(found)
}

/// Every stored policy. A single malformed document fails the whole read.
pub async fn retrieve_all(db: &DatabaseConnection) -> Result<Vec<PolicyRecord>, StoreError> {
    Entity::find()
        .order_by_asc(Column::AppId)
        .all(db)
        .await?
        .into_iter()
        .map(PolicyRecord::try_from)
        .collect()
}

/// Apps that currently have a policy, in ascending order.
pub async fn app_ids(db: &DatabaseConnection) -> Result<Vec<String>, StoreError> {
    let ids = Entity::find()
        .select_only()
        .column(Column::AppId)
        .order_by_asc(Column::AppId)
        .into_tuple::<String>()
        .all(db)
        .await?;
    Ok(ids)
}

pub async fn delete(db: &DatabaseConnection, app_id: &str) -> Result<bool, StoreError> {
    let res = Entity::delete_by_id(app_id.to_string()).exec(db).await?;
    Ok(res.rows_affected > 0)
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
