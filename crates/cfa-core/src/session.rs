use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use cfa_model::TechnicianId;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{error::CoreError, secret::SecretStore};

/// Store key holding the bearer token.
pub const TOKEN_KEY: &str = "userToken";
/// Store key holding the technician id decoded from the token.
pub const USER_ID_KEY: &str = "userId";

/// Logged-in state kept in an injected [`SecretStore`].
pub struct Session<S> {
    store: S,
}

impl<S> Session<S>
where
    S: SecretStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist a freshly issued token and the technician id carried in its `sub` claim.
    ///
    /// A token without a readable subject still counts as logged in; any
    /// previously stored id is dropped so it cannot leak into the new session.
    pub fn store_login(&self, token: &str) -> Result<Option<TechnicianId>, CoreError> {
        self.store.put(TOKEN_KEY, token)?;

        match jwt_subject(token) {
            Ok(Some(subject)) => {
                self.store.put(USER_ID_KEY, &subject)?;
                debug!(user_id = %subject, "technician id stored");
                Ok(Some(subject))
            }
            Ok(None) => {
                warn!("login token has no subject claim");
                self.store.delete(USER_ID_KEY)?;
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "login token could not be decoded");
                self.store.delete(USER_ID_KEY)?;
                Ok(None)
            }
        }
    }

    pub fn token(&self) -> Result<Option<String>, CoreError> {
        Ok(self.store.get(TOKEN_KEY)?)
    }

    pub fn user_id(&self) -> Result<Option<TechnicianId>, CoreError> {
        Ok(self.store.get(USER_ID_KEY)?)
    }

    pub fn is_logged_in(&self) -> Result<bool, CoreError> {
        Ok(self.token()?.is_some())
    }

    pub fn require_token(&self) -> Result<String, CoreError> {
        self.token()?.ok_or(CoreError::NotAuthenticated)
    }

    pub fn require_user_id(&self) -> Result<TechnicianId, CoreError> {
        self.user_id()?.ok_or(CoreError::MissingTechnicianId)
    }

    /// Forget both token and technician id.
    pub fn logout(&self) -> Result<(), CoreError> {
        self.store.delete(TOKEN_KEY)?;
        self.store.delete(USER_ID_KEY)?;
        Ok(())
    }
}

#[derive(Deserialize)]
struct Claims {
    #[serde(default)]
    sub: Option<String>,
}

/// Read the `sub` claim of a JWT without verifying its signature.
///
/// Verification is the backend's job; the client only needs the id to address its own orders.
pub fn jwt_subject(token: &str) -> Result<Option<String>, CoreError> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(CoreError::InvalidToken(
            "expected three dot-separated segments".to_string(),
        ));
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| CoreError::InvalidToken(format!("payload is not base64url: {e}")))?;
    let claims: Claims = serde_json::from_slice(&bytes)
        .map_err(|e| CoreError::InvalidToken(format!("payload is not a claims object: {e}")))?;

    Ok(claims.sub.filter(|sub| !sub.is_empty()))
}
