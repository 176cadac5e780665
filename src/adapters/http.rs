use crate::core::{ConfigProvider, HttpClient, HttpStatus};
use crate::utils::error::{PageError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// 以 reqwest 實作的 `HttpClient`，路徑相對於應用程式 origin 解析
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    base_url: Url,
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new(base_url: &str, timeout_seconds: u64, session_cookie: Option<&str>) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| PageError::InvalidConfigValueError {
            field: "server.base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        let mut headers = HeaderMap::new();
        if let Some(cookie) = session_cookie {
            let mut value =
                HeaderValue::from_str(cookie).map_err(|e| PageError::InvalidConfigValueError {
                    field: "server.session_cookie".to_string(),
                    value: "<redacted>".to_string(),
                    reason: e.to_string(),
                })?;
            value.set_sensitive(true);
            headers.insert(COOKIE, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .default_headers(headers)
            .build()?;

        Ok(Self { base_url, client })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(
            config.base_url(),
            config.timeout_seconds(),
            config.session_cookie(),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn resolve(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| PageError::InvalidConfigValueError {
                field: "routes".to_string(),
                value: path.to_string(),
                reason: format!("Cannot resolve against {}: {}", self.base_url, e),
            })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post(&self, path: &str) -> Result<HttpStatus> {
        let url = self.resolve(path)?;

        tracing::debug!("Making API request to: POST {}", url);
        let response = self.client.post(url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        Ok(HttpStatus(response.status().as_u16()))
    }
}
