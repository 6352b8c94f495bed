use models::cooldown;
use models::enums::ScalingStatus;
use models::{DatabaseConnection, StoreError};
use tracing::debug;

use crate::logged;

/// Per-app suppression windows after a scaling action (`scalingcooldown`).
#[derive(Clone)]
pub struct CooldownStore {
    db: DatabaseConnection,
}

impl CooldownStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    pub async fn record_cooldown(&self, app_id: &str, expire_at: i64, status: ScalingStatus) -> Result<(), StoreError> {
        debug!(app_id = %app_id, expire_at, status = %status, "record cooldown");
        logged("cooldown.record", app_id, cooldown::record(&self.db, app_id, expire_at, status).await)
    }

    /// `now` is the caller's clock; true iff the stored expiry is strictly later.
    pub async fn is_in_cooldown(&self, app_id: &str, now: i64) -> Result<bool, StoreError> {
        logged("cooldown.is_in_cooldown", app_id, cooldown::is_in_cooldown(&self.db, app_id, now).await)
    }

    pub async fn get(&self, app_id: &str) -> Result<cooldown::Model, StoreError> {
        logged("cooldown.get", app_id, cooldown::get(&self.db, app_id).await)
    }

    pub async fn clear(&self, app_id: &str) -> Result<bool, StoreError> {
        debug!(app_id = %app_id, "clear cooldown");
        logged("cooldown.clear", app_id, cooldown::clear(&self.db, app_id).await)
    }

    pub async fn exists(&self, app_id: &str, expire_at: i64) -> Result<bool, StoreError> {
        logged("cooldown.exists", app_id, cooldown::exists(&self.db, app_id, expire_at).await)
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        logged("cooldown.count", "*", cooldown::count(&self.db).await)
    }

    pub async fn delete_all(&self) -> Result<u64, StoreError> {
        logged("cooldown.delete_all", "*", cooldown::delete_all(&self.db).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn cooldown_expiry_and_clear() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let store = CooldownStore::new(db);
        let t = 1_700_000_000_000_000_000_i64;

        store.record_cooldown("app", t, ScalingStatus::Succeeded).await?;
        assert!(store.is_in_cooldown("app", t - 1).await?);
        assert!(!store.is_in_cooldown("app", t + 1).await?);
        assert!(store.exists("app", t).await?);

        assert!(store.clear("app").await?);
        assert!(!store.is_in_cooldown("app", t - 1).await?);
        assert!(store.get("app").await.unwrap_err().is_not_found());
        assert_eq!(store.count().await?, 0);
        Ok(())
    }
}
