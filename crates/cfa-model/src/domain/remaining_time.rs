use serde::{Deserialize, Serialize};

use crate::RemainingDuration;

/// Body of `GET /tech/orders/{id}/remaining_time`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemainingTimeResponse {
    pub remaining_time: RemainingTimeComponents,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_time_utc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_time_utc: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RemainingTimeComponents {
    #[serde(default)]
    pub hours_remaining: Option<u32>,
    #[serde(default)]
    pub minutes_remaining: Option<u32>,
}

impl RemainingTimeResponse {
    /// Missing components count as zero.
    pub fn duration(&self) -> RemainingDuration {
        RemainingDuration::new(
            self.remaining_time.hours_remaining.unwrap_or(0),
            self.remaining_time.minutes_remaining.unwrap_or(0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_body() {
        let body: RemainingTimeResponse = serde_json::from_str(
            r#"{
                "remaining_time": {"hours_remaining": 26, "minutes_remaining": 5},
                "current_time_utc": "2025-02-10T10:00:00Z",
                "scheduled_time_utc": "2025-02-11T12:05:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(body.duration(), RemainingDuration::new(26, 5));
        assert_eq!(body.scheduled_time_utc.as_deref(), Some("2025-02-11T12:05:00Z"));
    }

    #[test]
    fn missing_or_null_components_default_to_zero() {
        let body: RemainingTimeResponse =
            serde_json::from_str(r#"{"remaining_time": {"hours_remaining": null}}"#).unwrap();
        assert_eq!(body.duration(), RemainingDuration::new(0, 0));
    }
}
