//! The structured policy document persisted as JSON text in `policy_json`.
//!
//! Field names follow the policy JSON accepted by the autoscaler API so that
//! documents written by other components round-trip unchanged.
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScalingPolicy {
    pub instance_min_count: i32,
    pub instance_max_count: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scaling_rules: Vec<ScalingRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedules: Option<ScalingSchedules>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScalingRule {
    pub metric_type: String,
    #[serde(default)]
    pub breach_duration_secs: i32,
    pub threshold: i64,
    pub operator: String,
    #[serde(default)]
    pub cool_down_secs: i32,
    pub adjustment: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScalingSchedules {
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recurring_schedule: Vec<RecurringSchedule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specific_date: Vec<SpecificDate>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecurringSchedule {
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_week: Vec<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_month: Vec<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub instance_min_count: i32,
    pub instance_max_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_min_instance_count: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpecificDate {
    pub start_date_time: String,
    pub end_date_time: String,
    pub instance_min_count: i32,
    pub instance_max_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_min_instance_count: Option<i32>,
}

impl ScalingPolicy {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_policy_with_rules_and_schedules() {
        let raw = r#"{
            "instance_min_count": 1,
            "instance_max_count": 5,
            "scaling_rules": [{
                "metric_type": "memoryused",
                "breach_duration_secs": 300,
                "threshold": 30,
                "operator": "<",
                "cool_down_secs": 300,
                "adjustment": "-1"
            }],
            "schedules": {
                "timezone": "Asia/Shanghai",
                "recurring_schedule": [{
                    "start_time": "10:00",
                    "end_time": "18:00",
                    "days_of_week": [1, 2, 3],
                    "instance_min_count": 1,
                    "instance_max_count": 10,
                    "initial_min_instance_count": 5
                }],
                "specific_date": [{
                    "start_date_time": "2015-06-02T10:00",
                    "end_date_time": "2015-06-15T13:59",
                    "instance_min_count": 1,
                    "instance_max_count": 4
                }]
            }
        }"#;
        let policy = ScalingPolicy::from_json(raw).unwrap();
        assert_eq!(policy.scaling_rules.len(), 1);
        assert_eq!(policy.scaling_rules[0].adjustment, "-1");
        let schedules = policy.schedules.as_ref().unwrap();
        assert_eq!(schedules.recurring_schedule[0].initial_min_instance_count, Some(5));
        assert_eq!(schedules.specific_date[0].initial_min_instance_count, None);
    }

    #[test]
    fn absent_optional_fields_are_not_serialized() {
        let policy = ScalingPolicy {
            instance_min_count: 1,
            instance_max_count: 2,
            scaling_rules: vec![],
            schedules: None,
        };
        let json = policy.to_json().unwrap();
        assert_eq!(json, r#"{"instance_min_count":1,"instance_max_count":2}"#);
    }

    #[test]
    fn malformed_document_is_rejected() {
        assert!(ScalingPolicy::from_json(r#"{"instance_min_count":"one"}"#).is_err());
    }
}
