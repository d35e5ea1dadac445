//! HTTP implementation of [`JsonSource`].
//!
//! Issues a plain `GET <base_url>/api` with no headers and no body.
//! Status is checked before the body is touched, so an error page is never
//! fed to the JSON parser.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;

use crate::fetch::{FetchError, JsonSource};

/// Fixed path of the queried resource, relative to the configured origin.
const API_PATH: &str = "/api";

pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Self {
        let url = format!("{}{}", base_url.trim_end_matches('/'), API_PATH);
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl JsonSource for HttpSource {
    fn endpoint(&self) -> &str {
        &self.url
    }

    async fn fetch_json(&self) -> Result<Value, FetchError> {
        info!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        debug!("{} responded with {}", self.url, status);

        if !status.is_success() {
            warn!("Non-success status from {}: {}", self.url, status);
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        debug!("Read {} body bytes", body.len());

        serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}
