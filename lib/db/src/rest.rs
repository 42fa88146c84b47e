//! PostgREST-style REST client for the hosted database service.
//!
//! Each instance carries exactly one API key; the two authorization
//! levels (standard and elevated) are two separate instances built at
//! the composition root. The key is sent both as the `apikey` header
//! and as a bearer token, which is the wire contract of the hosted
//! service.

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::DbError;
use crate::traits::{DbStore, Filter, Order};

/// Remote table store speaking the hosted service's REST dialect.
pub struct RestStore {
    http: reqwest::Client,
    base: String,
    key: String,
}

impl RestStore {
    /// Build a client for the given endpoint and API key.
    ///
    /// The endpoint must be an absolute http(s) URL; anything else is a
    /// configuration error (fatal at startup for the caller).
    pub fn new(endpoint: &str, key: &str) -> Result<Self, DbError> {
        let parsed = Url::parse(endpoint)
            .map_err(|e| DbError::Config(format!("invalid database endpoint {endpoint:?}: {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(DbError::Config(format!(
                "database endpoint must be http(s), got {:?}",
                parsed.scheme()
            )));
        }
        if key.trim().is_empty() {
            return Err(DbError::Config("database API key is empty".into()));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base: endpoint.trim_end_matches('/').to_string(),
            key: key.to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base, table)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.key).bearer_auth(&self.key)
    }
}

/// Query parameters for a select call.
fn select_params(filter: Option<&Filter>, order: Option<&Order>) -> Vec<(String, String)> {
    let mut params = vec![("select".to_string(), "*".to_string())];
    if let Some(f) = filter {
        params.push((f.column.clone(), format!("eq.{}", f.value)));
    }
    if let Some(o) = order {
        let dir = if o.ascending { "asc" } else { "desc" };
        params.push(("order".to_string(), format!("{}.{}", o.column, dir)));
    }
    params
}

/// Pull the service's error detail out of a failure body.
///
/// The service answers errors as `{"message": "..."}`; anything else is
/// passed through raw so the operator still sees something useful.
fn remote_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string())
}

/// Read a response as a JSON array of rows, mapping failures.
async fn read_rows(resp: reqwest::Response) -> Result<Vec<Value>, DbError> {
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(DbError::Remote {
            status: status.as_u16(),
            message: remote_message(&body),
        });
    }
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&body).map_err(|e| DbError::Decode(e.to_string()))
}

#[async_trait::async_trait]
impl DbStore for RestStore {
    async fn select(
        &self,
        table: &str,
        filter: Option<&Filter>,
        order: Option<&Order>,
    ) -> Result<Vec<Value>, DbError> {
        debug!(table, "select");
        let req = self
            .authed(self.http.get(self.table_url(table)))
            .query(&select_params(filter, order));
        read_rows(req.send().await?).await
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, DbError> {
        debug!(table, "insert");
        let req = self
            .authed(self.http.post(self.table_url(table)))
            .header("Prefer", "return=representation")
            .json(&row);
        let mut rows = read_rows(req.send().await?).await?;
        if rows.is_empty() {
            return Err(DbError::Decode(format!(
                "insert into {table} returned no representation"
            )));
        }
        Ok(rows.remove(0))
    }

    async fn update(&self, table: &str, id: &str, changes: Value) -> Result<Value, DbError> {
        let req = self
            .authed(self.http.patch(self.table_url(table)))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(&changes);
        let mut rows = read_rows(req.send().await?).await?;
        if rows.is_empty() {
            // PATCH on a missing id succeeds with zero affected rows.
            return Err(DbError::NotFound(format!("{table}/{id}")));
        }
        Ok(rows.remove(0))
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), DbError> {
        let req = self
            .authed(self.http.delete(self.table_url(table)))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation");
        let rows = read_rows(req.send().await?).await?;
        if rows.is_empty() {
            return Err(DbError::NotFound(format!("{table}/{id}")));
        }
        Ok(())
    }
}
