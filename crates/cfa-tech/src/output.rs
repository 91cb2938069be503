//! Human and JSON renderings of command results.

use cfa_core::{CompensationSummary, RemainingState, ScheduleBoard};
use cfa_model::{Order, pay::format_currency};
use serde_json::{Value, json};
use time::UtcOffset;

pub trait Outputable {
    fn to_json(&self) -> Value;

    fn to_human(&self) -> String;
}

pub fn print_output<T: Outputable>(value: &T, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&value.to_json())
                .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize: {e}\"}}"))
        );
    } else {
        println!("{}", value.to_human());
    }
}

pub fn print_success(message: &str, json: bool) {
    if json {
        println!("{}", json!({ "status": "success", "message": message }));
    } else {
        println!("{message}");
    }
}

fn order_id(order: &Order) -> &str {
    order.id.as_ref().map(|id| id.as_str()).unwrap_or("-")
}

pub struct OrdersOutput {
    pub orders: Vec<Order>,
    pub offset: UtcOffset,
}

impl Outputable for OrdersOutput {
    fn to_json(&self) -> Value {
        Value::Array(
            self.orders
                .iter()
                .map(|o| {
                    json!({
                        "order": o,
                        "tech_pay": o.tech_pay(),
                        "hourly_rate": o.hourly_rate(),
                        "estimated_duration": o.estimated_duration(),
                    })
                })
                .collect(),
        )
    }

    fn to_human(&self) -> String {
        if self.orders.is_empty() {
            return "No orders available.".to_string();
        }
        self.orders
            .iter()
            .map(|o| {
                let address = o
                    .guest_address
                    .as_ref()
                    .map(|a| a.one_line())
                    .filter(|line| !line.is_empty())
                    .unwrap_or_else(|| "N/A".to_string());
                let date = o
                    .formatted_service_date(self.offset)
                    .unwrap_or_else(|| "N/A".to_string());
                format!(
                    "{}  {}\n    When:     {}\n    Services: {}\n    Vehicle:  {}\n    Duration: {}\n    Address:  {}",
                    order_id(o),
                    o.pay_line(),
                    date,
                    o.displayed_selected_services(),
                    o.displayed_vehicle_size(),
                    o.estimated_duration(),
                    address,
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

pub struct ScheduleOutput<'a> {
    pub board: &'a ScheduleBoard,
    pub offset: UtcOffset,
}

fn remaining_human(state: &RemainingState) -> String {
    match state {
        RemainingState::Pending => "...".to_string(),
        RemainingState::Known(d) => format!("{} ({})", d.describe(), d.compact()),
        RemainingState::Failed(reason) => format!("unavailable: {reason}"),
    }
}

impl Outputable for ScheduleOutput<'_> {
    fn to_json(&self) -> Value {
        Value::Array(
            self.board
                .entries()
                .iter()
                .map(|e| {
                    let remaining = match &e.remaining {
                        RemainingState::Pending => json!({ "state": "pending" }),
                        RemainingState::Known(d) => json!({
                            "state": "known",
                            "hours_remaining": d.hours_remaining,
                            "minutes_remaining": d.minutes_remaining,
                            "text": d.describe(),
                            "compact": d.compact(),
                        }),
                        RemainingState::Failed(reason) => {
                            json!({ "state": "failed", "reason": reason })
                        }
                    };
                    json!({ "order": e.order, "remaining": remaining })
                })
                .collect(),
        )
    }

    fn to_human(&self) -> String {
        if self.board.is_empty() {
            return "Nothing scheduled.".to_string();
        }
        self.board
            .entries()
            .iter()
            .map(|e| {
                format!(
                    "{}  {}  [{}]\n    {}",
                    order_id(&e.order),
                    e.order
                        .formatted_service_date(self.offset)
                        .unwrap_or_else(|| "N/A".to_string()),
                    e.order.displayed_status(),
                    remaining_human(&e.remaining),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub struct CompensationOutput(pub CompensationSummary);

impl Outputable for CompensationOutput {
    fn to_json(&self) -> Value {
        let rows: Vec<Value> = self
            .0
            .rows
            .iter()
            .map(|r| {
                json!({
                    "order_id": r.order_id,
                    "service_date": r.service_date,
                    "service_day": r.service_day,
                    "pay": r.pay,
                    "status": r.status,
                })
            })
            .collect();
        json!({
            "rows": rows,
            "total_pay": self.0.total_pay,
            "pending_pay": self.0.pending_pay,
        })
    }

    fn to_human(&self) -> String {
        let mut lines: Vec<String> = self
            .0
            .rows
            .iter()
            .map(|r| {
                format!(
                    "{}  {}",
                    r.service_day.as_deref().unwrap_or("N/A"),
                    r.pay_line()
                )
            })
            .collect();
        lines.push(format!(
            "Total: {}  (pending {})",
            format_currency(self.0.total_pay),
            format_currency(self.0.pending_pay)
        ));
        lines.join("\n")
    }
}
