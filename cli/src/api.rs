//! Typed `reqwest` client for the buddy matching backend.
//!
//! Paths come from `models::endpoints`, so the CLI and the browser client
//! always agree on routes. Responses decode into the shared view-models and
//! non-2xx answers become [`ApiError::Status`].

use models::endpoints::{Endpoint, Method};
use models::error::decode_body;
use models::validation::Validate;
use models::ApiError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::CliError;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, CliError> {
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, CliError> {
        self.send(endpoint, None).await
    }

    /// Validate `body`, then send it.
    pub async fn send_valid<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T, CliError>
    where
        B: Serialize + Validate,
        T: DeserializeOwned,
    {
        body.validate()?;
        self.send_json(endpoint, body).await
    }

    pub async fn send_json<B: Serialize, T: DeserializeOwned>(&self, endpoint: Endpoint, body: &B) -> Result<T, CliError> {
        let body = serde_json::to_value(body)?;
        self.send(endpoint, Some(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, endpoint: Endpoint, body: Option<Value>) -> Result<T, CliError> {
        let url = endpoint.url(&self.base_url);
        let builder = match endpoint.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
        };
        let builder = match body {
            Some(body) => builder.json(&body),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &text).into());
        }
        Ok(decode_body(&text)?)
    }
}

/// Trimmed base URL without a trailing slash; must be absolute http(s).
pub fn normalize_base_url(raw: &str) -> Result<String, CliError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    if has_host {
        Ok(trimmed.to_owned())
    } else {
        Err(CliError::InvalidApiUrl(raw.to_owned()))
    }
}
