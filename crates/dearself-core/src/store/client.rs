//! StoreClient: typed CRUD over the hosted data API.
//!
//! Every request carries the project `apikey` plus the signed-in user's
//! bearer token; row-level security on the backend scopes rows to that user.
//! Requests are fire-and-forget with no retries or timeouts - a failed call
//! surfaces as an error and the caller's view state stays as it was.

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;
use uuid::Uuid;

use super::query::Query;
use crate::auth::Session;
use crate::error::StoreError;

/// Client for the PostgREST data API.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: Client,
    base_url: Url,
    anon_key: String,
}

impl StoreClient {
    /// Create a new client for a project base URL (no `/rest/v1` suffix).
    pub fn new(base_url: Url, anon_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            anon_key,
        }
    }

    fn endpoint(&self, table: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/rest/v1/{table}")
    }

    fn request(&self, method: Method, table: &str, session: &Session) -> RequestBuilder {
        self.http
            .request(method, self.endpoint(table))
            .header("apikey", &self.anon_key)
            .bearer_auth(&session.access_token)
    }

    /// Read rows matching the query.
    pub async fn select<T: DeserializeOwned>(
        &self,
        session: &Session,
        table: &str,
        query: Query,
    ) -> Result<Vec<T>, StoreError> {
        let resp = self
            .request(Method::GET, table, session)
            .query(&query.params(true))
            .send()
            .await?;
        let resp = check_status(resp, table).await?;
        let rows = resp.json::<Vec<T>>().await.map_err(|e| StoreError::BadResponse {
            table: table.to_string(),
            message: e.to_string(),
        })?;
        Ok(rows)
    }

    /// Read at most one row. The limit is applied here rather than trusting a
    /// store-level constraint; callers that want singleton-per-day semantics
    /// must still check before deciding insert-vs-update.
    pub async fn select_one<T: DeserializeOwned>(
        &self,
        session: &Session,
        table: &str,
        query: Query,
    ) -> Result<Option<T>, StoreError> {
        let mut rows = self.select::<T>(session, table, query.limit(1)).await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.remove(0))
        })
    }

    /// Count rows matching the query without fetching them.
    pub async fn count(
        &self,
        session: &Session,
        table: &str,
        query: Query,
    ) -> Result<u64, StoreError> {
        let resp = self
            .request(Method::GET, table, session)
            .header("Prefer", "count=exact")
            .header("Range", "0-0")
            .query(&query.params(true))
            .send()
            .await?;
        let resp = check_status(resp, table).await?;
        // Total arrives as the denominator of Content-Range: "0-0/42".
        let total = resp
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.rsplit('/').next())
            .and_then(|v| v.parse::<u64>().ok());
        total.ok_or(StoreError::MissingCount {
            table: table.to_string(),
        })
    }

    /// Insert one row and return it as the store materialized it.
    pub async fn insert<T: Serialize, R: DeserializeOwned>(
        &self,
        session: &Session,
        table: &str,
        row: &T,
    ) -> Result<R, StoreError> {
        let resp = self
            .request(Method::POST, table, session)
            .header("Prefer", "return=representation")
            .json(&[row])
            .send()
            .await?;
        let resp = check_status(resp, table).await?;
        let mut rows = resp.json::<Vec<R>>().await.map_err(|e| StoreError::BadResponse {
            table: table.to_string(),
            message: e.to_string(),
        })?;
        if rows.is_empty() {
            return Err(StoreError::BadResponse {
                table: table.to_string(),
                message: "insert returned no rows".to_string(),
            });
        }
        Ok(rows.remove(0))
    }

    /// Patch the row with the given id. Last write wins.
    pub async fn update(
        &self,
        session: &Session,
        table: &str,
        id: Uuid,
        patch: &serde_json::Value,
    ) -> Result<(), StoreError> {
        let resp = self
            .request(Method::PATCH, table, session)
            .query(&Query::new().eq("id", id).params(false))
            .json(patch)
            .send()
            .await?;
        check_status(resp, table).await?;
        Ok(())
    }

    /// Remove the row with the given id.
    pub async fn delete(&self, session: &Session, table: &str, id: Uuid) -> Result<(), StoreError> {
        let resp = self
            .request(Method::DELETE, table, session)
            .query(&Query::new().eq("id", id).params(false))
            .send()
            .await?;
        check_status(resp, table).await?;
        Ok(())
    }
}

/// Convert a non-success response into `StoreError::Api`, extracting the
/// PostgREST `message` field when the body carries one.
async fn check_status(resp: reqwest::Response, table: &str) -> Result<reqwest::Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or(body);
    Err(StoreError::Api {
        table: table.to_string(),
        status: status.as_u16(),
        message,
    })
}
