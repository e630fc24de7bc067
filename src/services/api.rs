use crate::models::{
    entry::{Entry, Feed},
    error::AppError,
};

// CONSTANTS
const FEED_URL: &str = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json";

// FEED CONFIGURATION
/// Configuration for the APOD feed client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    feed_url: String,
}

impl FeedConfig {
    /// Creates a builder for constructing a `FeedConfig`.
    pub fn builder() -> FeedConfigBuilder {
        FeedConfigBuilder::default()
    }

    /// Returns the feed URL configured for this client.
    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfigBuilder::default().build()
    }
}

// FEED CONFIGURATION BUILDER
/// Builder for constructing a `FeedConfig` with custom settings.
#[derive(Debug, Default)]
pub struct FeedConfigBuilder {
    feed_url: Option<String>,
}

impl FeedConfigBuilder {
    /// Sets a custom feed URL (primarily for testing).
    pub fn feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed_url = Some(url.into());
        self
    }

    /// Builds the `FeedConfig`.
    pub fn build(self) -> FeedConfig {
        FeedConfig {
            feed_url: self.feed_url.unwrap_or_else(|| FEED_URL.to_string()),
        }
    }
}

// FEED CLIENT
/// HTTP client for the APOD JSON feed.
pub struct FeedClient {
    http: reqwest::Client,
    config: FeedConfig,
}

impl FeedClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(FeedConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: FeedConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Fetches the whole feed. One shot, no retry: a failure here is
    /// terminal until the next page load.
    pub async fn fetch_feed(&self) -> Result<Feed, AppError> {
        let response = self
            .http
            .get(self.config.feed_url())
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        let entries: Vec<Entry> = response
            .json()
            .await
            .map_err(|e| AppError::ParseError(format!("Failed to parse feed: {e}")))?;

        Ok(Feed::new(entries))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::FetchError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::FetchError(format!("Request error: {error}"))
        } else {
            AppError::FetchError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::FetchError(format!("Feed not found: {body}")),
            400..=499 => AppError::FetchError(format!("Client error {status}: {body}")),
            500..=599 => AppError::FetchError(format!("Server error {status}: {body}")),
            _ => AppError::FetchError(format!("Unexpected status {status}: {body}")),
        }
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default client")
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the feed using default configuration.
pub async fn fetch_feed() -> Result<Feed, AppError> {
    FeedClient::new()?.fetch_feed().await
}
