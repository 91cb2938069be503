use std::{
    collections::HashMap,
    sync::Mutex,
    time::Duration,
};

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use cfa_model::{Order, OrderId, RemainingDuration, StatusChange};

use crate::{ApiError, TechApi};

/// Unsigned JWT-shaped token with an optional `sub` claim.
pub fn token_for(subject: Option<&str>) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = match subject {
        Some(sub) => format!(r#"{{"sub":"{sub}","exp":1900000000}}"#),
        None => r#"{"exp":1900000000}"#.to_string(),
    };
    format!("{header}.{}.signature", URL_SAFE_NO_PAD.encode(claims))
}

pub fn order(id: &str, services_total: f64, travel_fee: f64) -> Order {
    Order {
        services_total: Some(services_total),
        travel_fee: Some(travel_fee),
        service_date: Some("2025-02-10T15:00:00Z".to_string()),
        ..Order::with_id(id)
    }
}

/// Scripted in-process backend.
#[derive(Default)]
pub struct FakeApi {
    pub token: Option<String>,
    pub available: Vec<Order>,
    pub scheduled: Vec<Order>,
    /// Per-order answer and artificial latency.
    pub remaining: HashMap<OrderId, (Result<RemainingDuration, ApiError>, Duration)>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_remaining(
        mut self,
        id: &str,
        answer: Result<RemainingDuration, ApiError>,
        delay_ms: u64,
    ) -> Self {
        self.remaining
            .insert(OrderId::from(id), (answer, Duration::from_millis(delay_ms)));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl TechApi for FakeApi {
    async fn login(&self, username: &str, _password: &str) -> Result<String, ApiError> {
        self.record(format!("login {username}"));
        self.token.clone().ok_or(ApiError::Status {
            status: 401,
            message: "Unauthorized".to_string(),
        })
    }

    async fn available_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.record("available".to_string());
        Ok(self.available.clone())
    }

    async fn scheduled_orders(&self, technician: &str) -> Result<Vec<Order>, ApiError> {
        self.record(format!("scheduled {technician}"));
        Ok(self.scheduled.clone())
    }

    async fn remaining_time(&self, order: &OrderId) -> Result<RemainingDuration, ApiError> {
        let Some((answer, delay)) = self.remaining.get(order).cloned() else {
            return Err(ApiError::Status {
                status: 404,
                message: "Not Found".to_string(),
            });
        };
        tokio::time::sleep(delay).await;
        answer
    }

    async fn claim_order(&self, order: &OrderId, technician: &str) -> Result<(), ApiError> {
        self.record(format!("claim {order} {technician}"));
        Ok(())
    }

    async fn update_status(&self, order: &OrderId, status: StatusChange) -> Result<(), ApiError> {
        self.record(format!("status {order} {}", status.code()));
        Ok(())
    }
}
