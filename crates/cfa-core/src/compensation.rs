use cfa_model::{Order, OrderId, pay::format_currency};
use time::UtcOffset;

/// One scheduled order as seen on the compensation screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CompensationRow {
    pub order_id: Option<OrderId>,
    /// Formatted service date and time, if the order has one.
    pub service_date: Option<String>,
    /// Service day with an ordinal, e.g. `"February 10th, 2025"`.
    pub service_day: Option<String>,
    pub pay: f64,
    pub status: String,
}

impl CompensationRow {
    pub fn from_order(order: &Order, offset: UtcOffset) -> Self {
        Self {
            order_id: order.id.clone(),
            service_date: order.formatted_service_date(offset),
            service_day: order.formatted_service_day(offset),
            pay: order.tech_pay(),
            status: order.displayed_compensation_status().to_string(),
        }
    }

    /// `"$139.00 - Pending"`.
    pub fn pay_line(&self) -> String {
        format!("{} - {}", format_currency(self.pay), self.status)
    }

    pub fn is_pending(&self) -> bool {
        self.status.eq_ignore_ascii_case("pending")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompensationSummary {
    pub rows: Vec<CompensationRow>,
    pub total_pay: f64,
    /// Share of `total_pay` not yet paid out.
    pub pending_pay: f64,
}

impl CompensationSummary {
    pub fn from_orders(orders: &[Order], offset: UtcOffset) -> Self {
        let rows: Vec<CompensationRow> = orders
            .iter()
            .map(|order| CompensationRow::from_order(order, offset))
            .collect();
        let total_pay = rows.iter().map(|r| r.pay).sum();
        let pending_pay = rows.iter().filter(|r| r.is_pending()).map(|r| r.pay).sum();

        Self {
            rows,
            total_pay,
            pending_pay,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
