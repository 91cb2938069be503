use serde::{Deserialize, Serialize};
use time::UtcOffset;

use crate::{GuestAddress, OrderId, date, labels, pay};

/// Read-only projection of a service order as returned by the backend.
///
/// Every field is optional on the wire. Keys are snake_case, with camelCase
/// accepted for the billing and timing fields. Equality is by `id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    #[serde(default, alias = "guestEmail", skip_serializing_if = "Option::is_none")]
    pub guest_email: Option<String>,
    #[serde(default, alias = "guestName", skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    #[serde(default, alias = "guestPhoneNumber", skip_serializing_if = "Option::is_none")]
    pub guest_phone_number: Option<String>,
    #[serde(default, alias = "paymentStatus", skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technician: Option<String>,
    #[serde(default, alias = "selectedServices", skip_serializing_if = "Option::is_none")]
    pub selected_services: Option<Vec<String>>,
    #[serde(default, alias = "seniorRvDiscount", skip_serializing_if = "Option::is_none")]
    pub senior_rv_discount: Option<bool>,
    /// ISO 8601 timestamp of the scheduled service.
    #[serde(default, alias = "serviceDate", skip_serializing_if = "Option::is_none")]
    pub service_date: Option<String>,
    #[serde(default, alias = "servicePackage", skip_serializing_if = "Option::is_none")]
    pub service_package: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Gross amount billed for services.
    #[serde(default, alias = "servicesTotal", skip_serializing_if = "Option::is_none")]
    pub services_total: Option<f64>,
    #[serde(default, alias = "techCompensationStatus", skip_serializing_if = "Option::is_none")]
    pub tech_compensation_status: Option<String>,
    #[serde(default, alias = "finalPrice", skip_serializing_if = "Option::is_none")]
    pub final_price: Option<f64>,
    #[serde(default, alias = "vehicleSize", skip_serializing_if = "Option::is_none")]
    pub vehicle_size: Option<String>,
    #[serde(default, alias = "clientSecret", skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(default, alias = "guestAddress", skip_serializing_if = "Option::is_none")]
    pub guest_address: Option<GuestAddress>,
    /// Travel surcharge; the technician receives half of it.
    #[serde(default, alias = "travelFee", skip_serializing_if = "Option::is_none")]
    pub travel_fee: Option<f64>,
    /// Predicted job duration in minutes.
    #[serde(default, alias = "estimatedMinutes", skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<f64>,
}

impl Order {
    /// Order with only an id set; mostly useful for building fixtures.
    pub fn with_id(id: impl Into<OrderId>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn tech_pay(&self) -> f64 {
        pay::tech_pay(self)
    }

    pub fn hourly_rate(&self) -> Option<f64> {
        pay::hourly_rate(self)
    }

    /// `"$X.XX/hr"` or `"N/A"`.
    pub fn formatted_hourly_rate(&self) -> String {
        pay::format_hourly_rate(self)
    }

    pub fn estimated_duration(&self) -> String {
        pay::format_estimated_duration(self.estimated_minutes)
    }

    /// Pay headline shown on an available order: `"$130.00 - Estimated $86.67/hr"`.
    pub fn pay_line(&self) -> String {
        format!(
            "{} - Estimated {}",
            pay::format_currency(self.tech_pay()),
            self.formatted_hourly_rate()
        )
    }

    pub fn displayed_selected_services(&self) -> String {
        match self.selected_services.as_deref() {
            Some(codes) if !codes.is_empty() => codes
                .iter()
                .map(|code| labels::service_label(code))
                .collect::<Vec<_>>()
                .join(", "),
            _ => pay::NOT_AVAILABLE.to_string(),
        }
    }

    pub fn displayed_vehicle_size(&self) -> String {
        self.vehicle_size
            .as_deref()
            .map(labels::vehicle_size_label)
            .unwrap_or_else(|| pay::NOT_AVAILABLE.to_string())
    }

    /// Current backend status in human form, e.g. `on_the_way` -> `On The Way`.
    pub fn displayed_status(&self) -> String {
        self.status
            .as_deref()
            .map(labels::humanize)
            .unwrap_or_else(|| pay::NOT_AVAILABLE.to_string())
    }

    /// Compensation status, `"Pending"` until the backend reports otherwise.
    pub fn displayed_compensation_status(&self) -> &str {
        self.tech_compensation_status.as_deref().unwrap_or("Pending")
    }

    /// Service date rendered as `"Feb 10, 2025 at 3:00 PM"` in `offset`.
    pub fn formatted_service_date(&self, offset: UtcOffset) -> Option<String> {
        self.service_date
            .as_deref()
            .map(|raw| date::format_service_datetime(raw, offset))
    }

    /// Service day rendered as `"February 10th, 2025"` in `offset`.
    pub fn formatted_service_day(&self, offset: UtcOffset) -> Option<String> {
        self.service_date
            .as_deref()
            .map(|raw| date::format_long_date(raw, offset))
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
