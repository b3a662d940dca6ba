use std::time::Duration;

use async_trait::async_trait;
use log::info;
use reqwest::{Client, Url};

use super::Reader;
use crate::config::Settings;
use crate::error::ReciformatError;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Fetches documents over HTTP(S)
pub struct UrlReader {
    client: Client,
}

impl UrlReader {
    pub fn new(settings: &Settings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout))
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl Reader for UrlReader {
    fn handles(&self, location: &str) -> bool {
        Url::parse(location)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false)
    }

    async fn read(&self, location: &str) -> Result<String, ReciformatError> {
        info!("Making a request to {location}");
        let response = self.client.get(location).send().await?;
        info!("Status: {}", response.status());
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}
