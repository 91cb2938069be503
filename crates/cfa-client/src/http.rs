use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Method, RequestBuilder, Url,
    header::{CACHE_CONTROL, PRAGMA},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use cfa_core::{ApiError, SecretStore, TOKEN_KEY, TechApi};
use cfa_model::{Order, OrderId, OrderPage, RemainingDuration, RemainingTimeResponse, StatusChange};

use crate::{ClientConfig, ClientError};

/// [`TechApi`] over the REST backend.
///
/// The bearer token is read from the credential store on every call, so a
/// login or logout through a shared store takes effect immediately.
pub struct HttpTechApi<S> {
    client: reqwest::Client,
    base: Url,
    store: S,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Serialize)]
struct ClaimRequest<'a> {
    technician: &'a str,
}

#[derive(Serialize)]
struct StatusRequest {
    status: StatusChange,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl<S> HttpTechApi<S>
where
    S: SecretStore,
{
    pub fn new(config: &ClientConfig, store: S) -> Result<Self, ClientError> {
        let base = Url::parse(config.base_url.trim_end_matches('/')).map_err(|e| {
            ClientError::InvalidConfig(format!("base url {}: {e}", config.base_url))
        })?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidConfig(format!(
                "base url {} cannot carry paths",
                config.base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base,
            store,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Base url with `segments` appended, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidConfig(format!("base url {} cannot carry paths", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn bearer(&self) -> Result<String, ClientError> {
        self.store.get(TOKEN_KEY)?.ok_or(ClientError::Unauthenticated)
    }

    /// Authenticated request with caching disabled.
    fn authed(&self, method: Method, url: Url) -> Result<RequestBuilder, ClientError> {
        let token = self.bearer()?;
        Ok(self
            .client
            .request(method, url)
            .bearer_auth(token)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache"))
    }

    async fn send(&self, request: RequestBuilder) -> Result<String, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().clone();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unexpected status").to_string());
            warn!(%url, status = status.as_u16(), %message, "request rejected");
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        debug!(%url, status = status.as_u16(), bytes = body.len(), "response received");
        Ok(body)
    }

    async fn fetch_json<T>(&self, request: RequestBuilder) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let body = self.send(request).await?;
        serde_json::from_str(&body).map_err(|e| {
            ClientError::InvalidResponse(format!("failed to parse response: {e}, body: {body}"))
        })
    }

    async fn list_orders(&self, url: Url) -> Result<Vec<Order>, ClientError> {
        let page: OrderPage = self.fetch_json(self.authed(Method::GET, url)?).await?;
        debug!(count = page.orders.len(), total = ?page.total_orders, "orders listed");
        Ok(page.orders)
    }
}

fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .filter(|m| !m.trim().is_empty())
}

#[async_trait]
impl<S> TechApi for HttpTechApi<S>
where
    S: SecretStore,
{
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        debug!(username, "sending login request");
        let url = self.endpoint(&["login"])?;
        let request = self
            .client
            .post(url)
            .json(&LoginRequest { username, password });

        let response: LoginResponse = self.fetch_json(request).await?;
        response
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::InvalidResponse("login response carries no token".to_string()))
    }

    async fn available_orders(&self) -> Result<Vec<Order>, ApiError> {
        let url = self.endpoint(&["tech", "orders_with_downpayment"])?;
        Ok(self.list_orders(url).await?)
    }

    async fn scheduled_orders(&self, technician: &str) -> Result<Vec<Order>, ApiError> {
        let mut url = self.endpoint(&["tech", "scheduled_orders"])?;
        url.query_pairs_mut().append_pair("technician", technician);
        Ok(self.list_orders(url).await?)
    }

    async fn remaining_time(&self, order: &OrderId) -> Result<RemainingDuration, ApiError> {
        let url = self.endpoint(&["tech", "orders", order.as_str(), "remaining_time"])?;
        let body: RemainingTimeResponse = self.fetch_json(self.authed(Method::GET, url)?).await?;
        Ok(body.duration())
    }

    async fn claim_order(&self, order: &OrderId, technician: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["tech", "orders", order.as_str()])?;
        let request = self
            .authed(Method::PATCH, url)?
            .json(&ClaimRequest { technician });
        self.send(request).await?;
        Ok(())
    }

    async fn update_status(&self, order: &OrderId, status: StatusChange) -> Result<(), ApiError> {
        let url = self.endpoint(&["tech", "orders", order.as_str(), "status"])?;
        let request = self
            .authed(Method::PATCH, url)?
            .json(&StatusRequest { status });
        self.send(request).await?;
        Ok(())
    }
}
