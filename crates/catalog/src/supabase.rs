use std::fmt;
use std::time::Duration;

use reqwest::header::CONTENT_RANGE;
use reqwest::{Client, Method, RequestBuilder, Response};
use roulette_shared::FoodItem;
use serde::Deserialize;
use url::Url;

use crate::{CatalogSource, FetchError};

/// Reads the foods table through the Supabase REST (PostgREST) endpoint.
#[derive(Clone)]
pub struct SupabaseSource {
    client: Client,
    base_url: Url,
    anon_key: String,
    table: String,
}

/// Error body returned by PostgREST
#[derive(Deserialize)]
struct ApiError {
    message: String,
}

impl SupabaseSource {
    pub fn new(
        url: &str,
        anon_key: impl Into<String>,
        table: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let mut base_url = Url::parse(url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            anon_key: anon_key.into(),
            table: table.into(),
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Connection test: succeeds when the table is reachable with the
    /// configured key and returns its exact row count when the service
    /// reports one.
    pub async fn check(&self) -> Result<Option<u64>, FetchError> {
        let response = self
            .request(Method::HEAD, "count")?
            .header("Prefer", "count=exact")
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let count = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_content_range);

        tracing::debug!(table = %self.table, count = ?count, "data service reachable");

        Ok(count)
    }

    fn request(&self, method: Method, select: &str) -> Result<RequestBuilder, FetchError> {
        let endpoint = self.base_url.join(&format!("rest/v1/{}", self.table))?;

        Ok(self
            .client
            .request(method, endpoint)
            .query(&[("select", select)])
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key))
    }
}

impl fmt::Debug for SupabaseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseSource")
            .field("base_url", &self.base_url.as_str())
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl CatalogSource for SupabaseSource {
    async fn fetch_all(&self) -> Result<Vec<FoodItem>, FetchError> {
        tracing::debug!(table = %self.table, "fetching foods");

        let response = self.request(Method::GET, "*")?.send().await?;
        let response = ensure_success(response).await?;
        let body = response.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }
}

async fn ensure_success(response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiError>(&body)
        .map(|err| err.message)
        .ok()
        .filter(|message| !message.is_empty())
        .or_else(|| Some(body.trim().to_owned()).filter(|body| !body.is_empty()))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_owned());

    Err(FetchError::Status {
        status: status.as_u16(),
        message,
    })
}

/// `0-9/42` or `*/42` -> 42; `*/*` -> None
fn parse_content_range(value: &str) -> Option<u64> {
    value.rsplit('/').next()?.trim().parse().ok()
}
