//! Live REST providers for users and vendors
//!
//! Users and vendors are the two categories backed by the real Street10
//! admin API rather than fixture data. Each issues one page request with the
//! query forwarded as the server-side `search` filter, then normalizes the
//! upstream payload into [`SearchHit`] in exactly one place so schema drift
//! stays contained to this module.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{ResultKind, SearchHit};
use crate::error::{Error, Result};

/// Default request timeout for provider calls
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Shared HTTP client for the live admin-API providers
///
/// Thin wrapper around reqwest carrying the API base URL and the optional
/// admin bearer token.
#[derive(Clone)]
pub struct RestClient {
    http_client: HttpClient,
    base_url: String,
    admin_token: Option<String>,
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .field("admin_token", &self.admin_token.is_some())
            .finish()
    }
}

/// Builder for creating a RestClient
#[derive(Default)]
pub struct RestClientBuilder {
    base_url: Option<String>,
    admin_token: Option<String>,
    timeout_secs: Option<u64>,
}

impl RestClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the admin API base URL (required)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the admin bearer token
    pub fn admin_token(mut self, token: impl Into<String>) -> Self {
        self.admin_token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Build the RestClient
    pub fn build(self) -> Result<RestClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("API base URL is required".to_string()))?;

        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(
                self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ))
            .build()
            .map_err(Error::Network)?;

        Ok(RestClient {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            admin_token: self.admin_token,
        })
    }
}

impl RestClient {
    /// Create a new builder for RestClient
    pub fn builder() -> RestClientBuilder {
        RestClientBuilder::new()
    }

    /// Get the configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of records from `{base}/{path}?search=<q>&page=1&limit=<n>`
    async fn fetch_page<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, path);

        debug!(provider = path, query = %query, limit, "Fetching provider page");

        let mut request = self.http_client.get(&url).query(&[
            ("search", query),
            ("page", "1"),
            ("limit", &limit.to_string()),
        ]);
        if let Some(token) = &self.admin_token {
            request = request.bearer_auth(token);
        }

        // Transport failures and non-2xx statuses both mean the same thing
        // to the aggregator: this provider is unavailable for this query.
        let response = request
            .send()
            .await
            .map_err(|e| Error::provider_unavailable(path, e.to_string()))?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ProviderUnavailable {
                provider: path.to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let page: Page<T> = response.json().await.map_err(|e| Error::ResponseParse {
            provider: path.to_string(),
            message: e.to_string(),
        })?;

        Ok(page.into_records())
    }
}

/// Paginated response envelope. Some admin endpoints wrap the page in a
/// `data` field, older ones return the bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Page<T> {
    Wrapped { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> Page<T> {
    fn into_records(self) -> Vec<T> {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(records) => records,
        }
    }
}

/// Entity id as the backend sends it; numeric and string ids both occur.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawId {
    Num(u64),
    Text(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            Self::Num(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

/// Upstream user payload
#[derive(Debug, Deserialize)]
struct UserRecord {
    id: RawId,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

fn normalize_user(record: UserRecord) -> SearchHit {
    let id = record.id.into_string();
    let title = record
        .name
        .clone()
        .or_else(|| record.email.clone())
        .unwrap_or_else(|| format!("User {}", id));
    let subtitle = record.email.or(record.phone);

    let mut hit = SearchHit::new(ResultKind::User, id, title);
    if let Some(subtitle) = subtitle {
        hit = hit.with_subtitle(subtitle);
    }
    hit
}

/// Upstream vendor payload. The owner arrives either flat (`ownerName`) or
/// nested under `user`, depending on the endpoint version.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VendorRecord {
    id: RawId,
    /// Business name
    name: Option<String>,
    email: Option<String>,
    owner_name: Option<String>,
    user: Option<VendorOwner>,
}

#[derive(Debug, Deserialize)]
struct VendorOwner {
    name: Option<String>,
    email: Option<String>,
}

fn normalize_vendor(record: VendorRecord) -> SearchHit {
    let id = record.id.into_string();
    let owner_name = record
        .owner_name
        .or_else(|| record.user.as_ref().and_then(|u| u.name.clone()));
    let email = record
        .email
        .or_else(|| record.user.as_ref().and_then(|u| u.email.clone()));

    let title = record
        .name
        .or_else(|| owner_name.clone())
        .unwrap_or_else(|| format!("Vendor {}", id));
    let subtitle = owner_name.or(email);

    let mut hit = SearchHit::new(ResultKind::Vendor, id, title);
    if let Some(subtitle) = subtitle {
        hit = hit.with_subtitle(subtitle);
    }
    hit
}

/// Live provider for marketplace users
#[derive(Debug, Clone)]
pub struct UsersProvider {
    client: RestClient,
}

impl UsersProvider {
    /// Create a users provider over the given client
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl super::SearchProvider for UsersProvider {
    fn kind(&self) -> ResultKind {
        ResultKind::User
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        let records: Vec<UserRecord> = self.client.fetch_page("users", query, limit).await?;
        Ok(records.into_iter().map(normalize_user).collect())
    }
}

/// Live provider for registered vendors
#[derive(Debug, Clone)]
pub struct VendorsProvider {
    client: RestClient,
}

impl VendorsProvider {
    /// Create a vendors provider over the given client
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl super::SearchProvider for VendorsProvider {
    fn kind(&self) -> ResultKind {
        ResultKind::Vendor
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        let records: Vec<VendorRecord> = self.client.fetch_page("vendors", query, limit).await?;
        Ok(records.into_iter().map(normalize_vendor).collect())
    }
}
