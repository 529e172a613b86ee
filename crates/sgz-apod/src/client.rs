//! HTTP client for the Astronomy Picture of the Day service.

use std::future::Future;
use std::time::Duration;

use chrono::NaiveDate;

use crate::{date::format_date, error::ApodError, model::ApodEntry};

/// Public endpoint of the APOD service.
pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const APOD_PATH: &str = "/planetary/apod";

/// Something that can look up the entry published on a given day.
pub trait EntrySource {
    fn fetch_entry(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<ApodEntry, ApodError>> + Send;
}

#[derive(Clone, Debug)]
pub struct ApodClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ApodClient {
    /// Build a client for `base_url` (scheme and host, no trailing path).
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ApodError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: format!("{}{APOD_PATH}", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl EntrySource for ApodClient {
    async fn fetch_entry(&self, date: NaiveDate) -> Result<ApodEntry, ApodError> {
        let date = format_date(date);
        tracing::debug!(%date, "Fetching APOD entry");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("api_key", self.api_key.as_str()), ("date", date.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%date, %status, "APOD service returned an error status");
            return Err(ApodError::Status(status));
        }

        Ok(response.json::<ApodEntry>().await?)
    }
}
