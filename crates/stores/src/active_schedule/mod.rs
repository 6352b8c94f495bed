use std::collections::HashMap;

use async_trait::async_trait;
use models::schedule::{ActiveSchedule, ScheduleDescriptor};
use models::StoreError;

pub mod repo;

/// The schedule window currently governing each app's instance bounds.
///
/// Two table generations implement this contract: `activeschedule` and
/// `app_scaling_active_schedule`. Per app the row is either absent or
/// present; `activate` moves it to present and `deactivate` back.
#[async_trait]
pub trait ActiveScheduleStore: Send + Sync {
    /// Raw insertion. Fails with `ConstraintViolation` if the app already has a row.
    async fn insert(&self, app_id: &str, schedule: &ScheduleDescriptor) -> Result<(), StoreError>;
    /// Supersede whatever is active for the app with `schedule`.
    async fn activate(&self, app_id: &str, schedule: &ScheduleDescriptor) -> Result<(), StoreError>;
    async fn get_active(&self, app_id: &str) -> Result<ActiveSchedule, StoreError>;
    /// Returns whether a row was removed.
    async fn deactivate(&self, app_id: &str) -> Result<bool, StoreError>;
    async fn list_active(&self) -> Result<HashMap<String, ActiveSchedule>, StoreError>;
    async fn exists(&self, app_id: &str) -> Result<bool, StoreError>;
    async fn count(&self) -> Result<u64, StoreError>;
    async fn delete_all(&self) -> Result<u64, StoreError>;
}

/// In-memory store for decision-engine tests
pub mod mock {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct MemoryActiveScheduleStore {
        rows: Mutex<HashMap<String, ActiveSchedule>>, // key: app_id
    }

    impl MemoryActiveScheduleStore {
        fn rows(&self) -> MutexGuard<'_, HashMap<String, ActiveSchedule>> {
            self.rows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
        }
    }

    fn to_active(schedule: &ScheduleDescriptor) -> ActiveSchedule {
        ActiveSchedule {
            schedule_id: schedule.schedule_id.to_string(),
            instance_min_count: schedule.instance_min_count,
            instance_max_count: schedule.instance_max_count,
            initial_min_instance_count: schedule.initial_min_override(),
        }
    }

    #[async_trait]
    impl ActiveScheduleStore for MemoryActiveScheduleStore {
        async fn insert(&self, app_id: &str, schedule: &ScheduleDescriptor) -> Result<(), StoreError> {
            let mut rows = self.rows();
            if rows.contains_key(app_id) {
                return Err(StoreError::ConstraintViolation(format!("active schedule for app {} already exists", app_id)));
            }
            rows.insert(app_id.to_string(), to_active(schedule));
            Ok(())
        }

        async fn activate(&self, app_id: &str, schedule: &ScheduleDescriptor) -> Result<(), StoreError> {
            self.rows().insert(app_id.to_string(), to_active(schedule));
            Ok(())
        }

        async fn get_active(&self, app_id: &str) -> Result<ActiveSchedule, StoreError> {
            self.rows()
                .get(app_id)
                .cloned()
                .ok_or_else(|| StoreError::not_found("active schedule", app_id))
        }

        async fn deactivate(&self, app_id: &str) -> Result<bool, StoreError> {
            Ok(self.rows().remove(app_id).is_some())
        }

        async fn list_active(&self) -> Result<HashMap<String, ActiveSchedule>, StoreError> {
            Ok(self.rows().clone())
        }

        async fn exists(&self, app_id: &str) -> Result<bool, StoreError> {
            Ok(self.rows().contains_key(app_id))
        }

        async fn count(&self) -> Result<u64, StoreError> {
            Ok(self.rows().len() as u64)
        }

        async fn delete_all(&self) -> Result<u64, StoreError> {
            let mut rows = self.rows();
            let n = rows.len() as u64;
            rows.clear();
            Ok(n)
        }
    }
}
