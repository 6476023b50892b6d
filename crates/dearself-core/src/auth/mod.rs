//! Authentication against the hosted auth service (GoTrue) and explicit
//! session state.
//!
//! The session is a plain value handed to whatever needs it - there is no
//! ambient process-wide "current user". Hosts that care about sign-in/out
//! transitions register a listener on [`SessionStore`].

pub mod token_store;

use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;
use uuid::Uuid;

use crate::error::AuthError;

/// A signed-in user identity plus the capability token that scopes every
/// store request to that user's rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub email: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(at) => at <= Utc::now(),
            None => false,
        }
    }
}

/// Client for the auth endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: Client,
    base_url: Url,
    anon_key: String,
}

impl AuthClient {
    /// Create a new client for a project base URL (no `/auth/v1` suffix).
    pub fn new(base_url: Url, anon_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            anon_key,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/auth/v1/{path}")
    }

    /// Register a new account. Returns `None` when the service queued a
    /// confirmation email instead of opening a session right away.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Session>, AuthError> {
        let resp = self
            .http
            .post(self.endpoint("signup"))
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = resp.status();
        let body: serde_json::Value = resp.json().await.map_err(AuthError::Request)?;
        if !status.is_success() {
            return Err(AuthError::SignUpFailed(error_message(&body)));
        }
        if body.get("access_token").is_some() {
            return Ok(Some(parse_session(&body)?));
        }
        Ok(None)
    }

    /// Exchange email + password for a session.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let resp = self
            .http
            .post(self.endpoint("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = resp.status();
        let body: serde_json::Value = resp.json().await.map_err(AuthError::Request)?;
        if !status.is_success() {
            return Err(AuthError::SignInFailed(error_message(&body)));
        }
        parse_session(&body)
    }

    /// Revoke the session's token. A failure here is not fatal - the caller
    /// drops its local session either way.
    pub async fn sign_out(&self, session: &Session) -> Result<(), AuthError> {
        let resp = self
            .http
            .post(self.endpoint("logout"))
            .header("apikey", &self.anon_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        if !resp.status().is_success() {
            log::warn!("sign-out returned HTTP {}", resp.status());
        }
        Ok(())
    }
}

fn error_message(body: &serde_json::Value) -> String {
    body.get("error_description")
        .or_else(|| body.get("msg"))
        .or_else(|| body.get("message"))
        .and_then(|v| v.as_str())
        .unwrap_or("unknown error")
        .to_string()
}

fn parse_session(body: &serde_json::Value) -> Result<Session, AuthError> {
    let access_token = body["access_token"]
        .as_str()
        .ok_or_else(|| AuthError::BadResponse("missing access_token".into()))?
        .to_string();
    let user = &body["user"];
    let user_id = user["id"]
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| AuthError::BadResponse("missing user id".into()))?;
    let email = user["email"].as_str().unwrap_or_default().to_string();
    let refresh_token = body["refresh_token"].as_str().map(String::from);
    let expires_at = body["expires_in"]
        .as_i64()
        .map(|secs| Utc::now() + Duration::seconds(secs));

    Ok(Session {
        user_id,
        email,
        access_token,
        refresh_token,
        expires_at,
    })
}

/// Opaque handle returned by [`SessionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(Option<&Session>) + Send + Sync>;

/// Holds the current session and notifies listeners on every transition.
#[derive(Default)]
pub struct SessionStore {
    current: Option<Session>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            current: Some(session),
            ..Self::default()
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// The session, or `AuthError::NotSignedIn`. Panels gate their data
    /// fetches on this.
    pub fn require(&self) -> Result<&Session, AuthError> {
        self.current.as_ref().ok_or(AuthError::NotSignedIn)
    }

    /// Register a listener for sign-in/sign-out transitions.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(Option<&Session>) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(lid, _)| *lid != id);
    }

    /// Replace the session and notify every listener.
    pub fn set(&mut self, session: Option<Session>) {
        self.current = session;
        for (_, listener) in &self.listeners {
            listener(self.current.as_ref());
        }
    }
}
