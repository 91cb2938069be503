use serde::{Deserialize, Serialize};

use crate::Order;

/// List envelope returned by the order listing endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderPage {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, alias = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(default, alias = "totalOrders", skip_serializing_if = "Option::is_none")]
    pub total_orders: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_paged_listing() {
        let page: OrderPage = serde_json::from_str(
            r#"{"orders":[{"_id":"a"},{"_id":"b"}],"page":1,"per_page":20,"total_orders":2}"#,
        )
        .unwrap();
        assert_eq!(page.orders.len(), 2);
        assert_eq!(page.per_page, Some(20));
        assert_eq!(page.total_orders, Some(2));
    }

    #[test]
    fn pagination_fields_are_optional() {
        let page: OrderPage = serde_json::from_str(r#"{"orders":[]}"#).unwrap();
        assert!(page.orders.is_empty());
        assert!(page.page.is_none());
    }
}
