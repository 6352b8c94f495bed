use serde::{Deserialize, Serialize};

/// Instance-count bounds in force for an app while a schedule window is open.
///
/// `initial_min_instance_count` is `None` when the window carries no
/// initial-capacity override; it is never defaulted to zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSchedule {
    pub schedule_id: String,
    pub instance_min_count: i32,
    pub instance_max_count: i32,
    pub initial_min_instance_count: Option<i32>,
}

/// What the scheduler hands over when a window opens.
///
/// Both table generations accept the same descriptor: the legacy table keeps
/// `schedule_id` as text and has no job link, the current table uses it as
/// the row id alongside `start_job_identifier`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDescriptor {
    pub schedule_id: i64,
    pub start_job_identifier: i64,
    pub instance_min_count: i32,
    pub instance_max_count: i32,
    pub initial_min_instance_count: Option<i32>,
}

impl ScheduleDescriptor {
    pub fn new(schedule_id: i64, start_job_identifier: i64, instance_min_count: i32, instance_max_count: i32) -> Self {
        Self {
            schedule_id,
            start_job_identifier,
            instance_min_count,
            instance_max_count,
            initial_min_instance_count: None,
        }
    }

    pub fn with_initial_min(mut self, initial_min_instance_count: i32) -> Self {
        self.initial_min_instance_count = Some(initial_min_instance_count);
        self
    }

    /// The value to persist in the nullable column. Zero and negative counts
    /// mean "no override" and are written as an absent column.
    pub fn initial_min_override(&self) -> Option<i32> {
        self.initial_min_instance_count.filter(|v| *v > 0)
    }
}
