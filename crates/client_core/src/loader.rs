use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{Course, COURSES_PATH};
use tracing::{info, warn};
use url::Url;

use crate::{catalog::Catalog, error::FetchError};

/// Anything able to produce the full course collection once.
#[async_trait]
pub trait CourseSource: Send + Sync {
    async fn load(&self) -> Result<Catalog, FetchError>;
}

/// Retrieves the catalog from `GET {server}/api/courses`.
pub struct HttpCatalogLoader {
    http: Client,
    endpoint: Url,
}

impl HttpCatalogLoader {
    pub fn new(server_url: &str) -> Result<Self, FetchError> {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_timeout(server_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Transport)?;
        Self::with_client(http, server_url)
    }

    pub fn with_client(http: Client, server_url: &str) -> Result<Self, FetchError> {
        let endpoint = endpoint_url(server_url, COURSES_PATH).map_err(|source| {
            FetchError::InvalidBaseUrl {
                url: server_url.to_string(),
                source,
            }
        })?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn fetch(&self) -> Result<Catalog, FetchError> {
        let res = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(FetchError::Transport)?;
        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        let body = res.bytes().await.map_err(FetchError::Transport)?;
        let courses: Vec<Course> = serde_json::from_slice(&body).map_err(FetchError::Malformed)?;
        Ok(Catalog::new(courses))
    }
}

#[async_trait]
impl CourseSource for HttpCatalogLoader {
    async fn load(&self) -> Result<Catalog, FetchError> {
        match self.fetch().await {
            Ok(catalog) => {
                info!(endpoint = %self.endpoint, courses = catalog.len(), "catalog loaded");
                Ok(catalog)
            }
            Err(err) => {
                warn!(endpoint = %self.endpoint, "catalog load failed: {err}");
                Err(err)
            }
        }
    }
}

/// Joins an absolute API path onto the server base, keeping any path prefix the base has.
pub(crate) fn endpoint_url(server_url: &str, path: &str) -> Result<Url, url::ParseError> {
    let trimmed = server_url.trim().trim_end_matches('/');
    let base = Url::parse(&format!("{trimmed}/"))?;
    base.join(path.trim_start_matches('/'))
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
