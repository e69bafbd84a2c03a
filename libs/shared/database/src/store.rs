use anyhow::{anyhow, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client, Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::profile::UserRow;

/// HTTP client for the identity store, a PostgREST-style data service.
///
/// Rows are addressed with filter paths such as
/// `/rest/v1/users?email=eq.someone@example.com`; writes ask the store to
/// echo the affected rows back with `Prefer: return=representation`.
pub struct StoreClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl StoreClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.database_url.clone(),
            api_key: config.database_api_key.clone(),
        }
    }

    fn headers(&self, representation: bool) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(&self.api_key).unwrap_or(HeaderValue::from_static("")),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if representation {
            headers.insert("Prefer", HeaderValue::from_static("return=representation"));
        }
        headers
    }

    async fn request<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        representation: bool,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Store request: {} {}", method, url);

        let mut req = self
            .client
            .request(method, &url)
            .headers(self.headers(representation));
        if let Some(body) = body {
            req = req.json(&body);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("Store error ({}): {}", status, error_text);
            return Err(anyhow!("store error ({}): {}", status, error_text));
        }

        Ok(response.json::<T>().await?)
    }

    /// Fetch rows matching a filter path.
    pub async fn select<T>(&self, path: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        self.request(Method::GET, path, None, false).await
    }

    /// Insert a row and return it as stored.
    pub async fn insert<T>(&self, path: &str, row: Value) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut rows: Vec<T> = self
            .request(Method::POST, path, Some(row), true)
            .await?;
        if rows.is_empty() {
            return Err(anyhow!("store did not return the inserted row"));
        }
        Ok(rows.remove(0))
    }

    /// Partially update the rows matching a filter path, returning the
    /// first updated row.
    pub async fn update<T>(&self, path: &str, changes: Value) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut rows: Vec<T> = self
            .request(Method::PATCH, path, Some(changes), true)
            .await?;
        if rows.is_empty() {
            return Err(anyhow!("store did not return the updated row"));
        }
        Ok(rows.remove(0))
    }

    /// Resolve an email claim to its identity row, if registered.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        let path = format!("/rest/v1/users?email=eq.{}", urlencoding::encode(email));
        let mut rows: Vec<UserRow> = self.select(&path).await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.remove(0))
        })
    }

    pub async fn find_user_by_id(&self, id: Uuid) -> Result<Option<UserRow>> {
        let path = format!("/rest/v1/users?id=eq.{}", id);
        let mut rows: Vec<UserRow> = self.select(&path).await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.remove(0))
        })
    }
}
