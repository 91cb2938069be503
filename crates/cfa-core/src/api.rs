use async_trait::async_trait;
use cfa_model::{Order, OrderId, RemainingDuration, StatusChange};

use crate::error::ApiError;

/// Technician-facing backend operations.
///
/// This trait is the seam between client logic and transport, allowing:
/// - the HTTP implementation in `cfa-client`
/// - in-process fakes for tests
#[async_trait]
pub trait TechApi: Send + Sync + 'static {
    /// Exchange credentials for a bearer token.
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError>;

    /// Orders open for claiming.
    async fn available_orders(&self) -> Result<Vec<Order>, ApiError>;

    /// Orders already claimed by `technician`.
    async fn scheduled_orders(&self, technician: &str) -> Result<Vec<Order>, ApiError>;

    /// Time left until the order's scheduled service, as of now.
    async fn remaining_time(&self, order: &OrderId) -> Result<RemainingDuration, ApiError>;

    /// Assign `order` to `technician`.
    async fn claim_order(&self, order: &OrderId, technician: &str) -> Result<(), ApiError>;

    async fn update_status(&self, order: &OrderId, status: StatusChange) -> Result<(), ApiError>;
}
