use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Status transitions a technician can trigger on a scheduled order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusChange {
    /// Technician is driving to the service address.
    OnTheWay,
    /// Technician cannot make the scheduled slot.
    HaveToReschedule,
    /// Service finished.
    Completed,
}

impl StatusChange {
    pub const ALL: [StatusChange; 3] = [
        StatusChange::OnTheWay,
        StatusChange::HaveToReschedule,
        StatusChange::Completed,
    ];

    /// Human label, as offered to the technician.
    pub fn label(&self) -> &'static str {
        match self {
            StatusChange::OnTheWay => "On the Way",
            StatusChange::HaveToReschedule => "Have to reschedule",
            StatusChange::Completed => "Completed",
        }
    }

    /// Code stored by the backend: the label lower-cased, spaces replaced by underscores.
    pub fn code(&self) -> &'static str {
        match self {
            StatusChange::OnTheWay => "on_the_way",
            StatusChange::HaveToReschedule => "have_to_reschedule",
            StatusChange::Completed => "completed",
        }
    }
}

impl fmt::Display for StatusChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusChange {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match norm.as_str() {
            "on_the_way" | "en_route" => Ok(StatusChange::OnTheWay),
            "have_to_reschedule" | "reschedule" | "rescheduled" => {
                Ok(StatusChange::HaveToReschedule)
            }
            "completed" | "complete" => Ok(StatusChange::Completed),
            _ => Err(ModelError::UnknownStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_label_lowercased_with_underscores() {
        for status in StatusChange::ALL {
            let derived = status.label().to_lowercase().replace(' ', "_");
            assert_eq!(status.code(), derived);
        }
    }

    #[test]
    fn parses_codes_labels_and_aliases() {
        assert_eq!("on_the_way".parse::<StatusChange>(), Ok(StatusChange::OnTheWay));
        assert_eq!("On the Way".parse::<StatusChange>(), Ok(StatusChange::OnTheWay));
        assert_eq!("en-route".parse::<StatusChange>(), Ok(StatusChange::OnTheWay));
        assert_eq!("reschedule".parse::<StatusChange>(), Ok(StatusChange::HaveToReschedule));
        assert_eq!("Have to reschedule".parse::<StatusChange>(), Ok(StatusChange::HaveToReschedule));
        assert_eq!(" COMPLETE ".parse::<StatusChange>(), Ok(StatusChange::Completed));
    }

    #[test]
    fn rejects_unknown_status() {
        let err = "cancelled".parse::<StatusChange>().unwrap_err();
        assert_eq!(err, ModelError::UnknownStatus("cancelled".to_string()));
    }

    #[test]
    fn serde_uses_backend_code() {
        let json = serde_json::to_string(&StatusChange::HaveToReschedule).unwrap();
        assert_eq!(json, r#""have_to_reschedule""#);

        let back: StatusChange = serde_json::from_str(r#""on_the_way""#).unwrap();
        assert_eq!(back, StatusChange::OnTheWay);
    }
}
