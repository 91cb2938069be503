//! Technician compensation derived from an order's billing and timing fields.
//!
//! All functions are pure: they read an [`Order`] snapshot and never touch it.

use crate::Order;

/// Sentinel shown wherever a value is undefined (e.g. rate without an estimate).
pub const NOT_AVAILABLE: &str = "N/A";

const MINUTES_PER_HOUR: f64 = 60.0;

/// Whole-unit services total (floored) plus half of the travel fee.
///
/// Absent fields count as zero.
pub fn tech_pay(order: &Order) -> f64 {
    let base_pay = order.services_total.unwrap_or(0.0).floor();
    let extra_pay = order.travel_fee.unwrap_or(0.0) / 2.0;
    base_pay + extra_pay
}

/// Pay per hour of estimated work, `tech_pay * 60 / estimated_minutes`.
///
/// `None` when the estimate is absent or not positive.
pub fn hourly_rate(order: &Order) -> Option<f64> {
    match order.estimated_minutes {
        Some(minutes) if minutes > 0.0 => Some(tech_pay(order) * MINUTES_PER_HOUR / minutes),
        _ => None,
    }
}

/// `"$X.XX/hr"`, or [`NOT_AVAILABLE`] when the rate is undefined.
pub fn format_hourly_rate(order: &Order) -> String {
    match hourly_rate(order) {
        Some(rate) => format!("{}/hr", format_currency(rate)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Dollar amount with exactly two decimals.
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

/// `"1h 30m"` from 60 minutes up, `"45 min"` below; absent is `"0 min"`.
///
/// Fractional minutes are truncated.
pub fn format_estimated_duration(minutes: Option<f64>) -> String {
    let total = minutes.unwrap_or(0.0);
    let whole = total as i64;
    if total >= MINUTES_PER_HOUR {
        format!("{}h {}m", whole / 60, whole % 60)
    } else {
        format!("{whole} min")
    }
}
