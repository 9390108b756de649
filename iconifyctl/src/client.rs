//! HTTP client for the Iconify API.

use anyhow::{Context, Result};
use iconify_core::{CollectionsResponse, Config, SearchResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Request timeout used when building a client from [`Config`]
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Retry attempts used when building a client from [`Config`]
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Normalize a server URL by removing trailing slashes.
fn normalize_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Percent-encode each value and join them with commas.
fn encode_list(values: &[String]) -> String {
    values
        .iter()
        .map(|v| urlencoding::encode(v).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

/// HTTP client for the Iconify REST API.
///
/// Requests that fail because the server could not be reached (connection
/// errors, timeouts) are retried with a linearly growing delay. HTTP error
/// statuses are returned immediately.
///
/// # Examples
///
/// ```no_run
/// use iconifyctl::client::IconifyClient;
/// use std::time::Duration;
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = IconifyClient::with_config(
///     "https://api.iconify.design".to_string(),
///     10,  // timeout in seconds
///     3,   // max retries
///     Duration::from_millis(500),  // initial retry delay
/// )?;
///
/// let svg = client.download_icon("mdi", "home").await?;
/// println!("{}", svg);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IconifyClient {
    client: Client,
    base_url: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl IconifyClient {
    /// Create a client for the API host and port in `config`.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_config(
            config.api_base_url(),
            DEFAULT_TIMEOUT_SECS,
            DEFAULT_MAX_RETRIES,
            Duration::from_millis(500),
        )
    }

    /// Create a client with custom connection settings.
    ///
    /// # Arguments
    ///
    /// * `server_url` - Base URL of the API (e.g., "https://api.iconify.design")
    /// * `timeout_secs` - Request timeout in seconds
    /// * `max_retries` - Maximum number of retry attempts for failed requests
    /// * `retry_delay` - Initial delay between retries
    pub fn with_config(
        server_url: String,
        timeout_secs: u64,
        max_retries: u32,
        retry_delay: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("iconify-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: normalize_url(&server_url),
            max_retries,
            retry_delay,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check the status of an HTTP response and return its body.
    async fn handle_response(response: Response, endpoint: &str) -> Result<String> {
        let status = response.status();
        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", endpoint))?;

        if !status.is_success() {
            let error_msg = match status {
                StatusCode::NOT_FOUND => format!("Endpoint {} not found", endpoint),
                StatusCode::BAD_REQUEST => format!("Bad request to {}: {}", endpoint, text),
                StatusCode::FORBIDDEN => format!("Access forbidden to {}", endpoint),
                StatusCode::TOO_MANY_REQUESTS => format!("Rate limited at {}", endpoint),
                StatusCode::INTERNAL_SERVER_ERROR => {
                    format!("Server error at {}: {}", endpoint, text)
                }
                StatusCode::SERVICE_UNAVAILABLE => format!("Service unavailable at {}", endpoint),
                _ => format!("HTTP {} error at {}: {}", status, endpoint, text),
            };
            return Err(anyhow::anyhow!(error_msg));
        }

        Ok(text)
    }

    /// GET `path` (relative to the base URL), retrying on connection errors.
    async fn get_with_retry(&self, path: &str, endpoint: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            debug!(url = %url, attempt, "GET");
            match self.client.get(&url).send().await {
                Ok(response) => {
                    return Self::handle_response(response, endpoint).await;
                }
                Err(e) => {
                    // Only retry when the request never got an answer
                    let should_retry = e.is_connect() || e.is_timeout() || e.is_request();
                    debug!(error = %e, should_retry, "Request failed");
                    last_error = Some(e);

                    if attempt < self.max_retries && should_retry {
                        tokio::time::sleep(self.retry_delay * (attempt + 1)).await;
                        continue;
                    } else {
                        break;
                    }
                }
            }
        }

        Err(anyhow::anyhow!(
            "Failed to reach {} after {} attempts: {}",
            endpoint,
            self.max_retries + 1,
            last_error.map(|e| e.to_string()).unwrap_or_default()
        ))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, endpoint: &str) -> Result<T> {
        let text = self.get_with_retry(path, endpoint).await?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse JSON response from {}", endpoint))
    }

    /// Retrieve information about icon collections.
    ///
    /// # Arguments
    ///
    /// * `prefixes` - Only return these collections; all collections when empty
    ///
    /// # Returns
    ///
    /// Returns collection info keyed by prefix, in the order the API sent it.
    pub async fn get_collections(&self, prefixes: &[String]) -> Result<CollectionsResponse> {
        let path = if prefixes.is_empty() {
            "/collections".to_string()
        } else {
            format!("/collections?prefixes={}", encode_list(prefixes))
        };

        self.get_json(&path, "/collections").await
    }

    /// Search icons by keyword.
    ///
    /// # Arguments
    ///
    /// * `query` - Search keyword
    /// * `prefixes` - Restrict the search to these collections
    /// * `limit` - Maximum number of results
    /// * `offset` - Index of the first result
    pub async fn search_icons(
        &self,
        query: &str,
        prefixes: &[String],
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<SearchResult> {
        let mut path = format!("/search?query={}", urlencoding::encode(query));
        if !prefixes.is_empty() {
            path.push_str(&format!("&prefixes={}", encode_list(prefixes)));
        }
        if let Some(limit) = limit {
            path.push_str(&format!("&limit={}", limit));
        }
        if let Some(offset) = offset.filter(|&o| o > 0) {
            path.push_str(&format!("&start={}", offset));
        }

        self.get_json(&path, "/search").await
    }

    /// Download the SVG markup of `prefix:name`.
    pub async fn download_icon(&self, prefix: &str, name: &str) -> Result<String> {
        let path = format!(
            "/{}/{}.svg",
            urlencoding::encode(prefix),
            urlencoding::encode(name)
        );

        self.get_with_retry(&path, &path).await
    }
}
