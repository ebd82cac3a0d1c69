/// Upstream Solar System OpenData client
use crate::domain::{BodiesEnvelope, RawBodyRecord};
use crate::errors::{ApiError, ApiResult};
use reqwest::{Client, Response, Url};
use std::time::Duration;
use tracing::debug;

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("space-explorer/0.1")
            .build()
            .map_err(|e| ApiError::Internal(format!("cannot build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// Client for the `/bodies` collection and per-body endpoints
pub struct BodiesClient {
    http_client: HttpClient,
    base_url: Url,
}

impl BodiesClient {
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::Internal(format!("invalid bodies API URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Internal(format!(
                "bodies API URL '{base_url}' cannot take a path"
            )));
        }
        Ok(Self {
            http_client: HttpClient::new(timeout)?,
            base_url,
        })
    }

    /// Get base URL
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Fetch every body the upstream knows about
    pub async fn fetch_bodies(&self) -> ApiResult<Vec<RawBodyRecord>> {
        let url = self.url_for("");
        debug!("GET {}", url);

        let resp = self.http_client.get_client().get(url).send().await?;
        let envelope: BodiesEnvelope = ensure_success(resp)?.json().await?;
        Ok(envelope.bodies)
    }

    /// Fetch one body by its upstream identifier or name
    pub async fn fetch_body(&self, name: &str) -> ApiResult<RawBodyRecord> {
        let url = self.url_for(name);
        debug!("GET {}", url);

        let resp = self.http_client.get_client().get(url).send().await?;
        let record: Option<RawBodyRecord> = ensure_success(resp)?.json().await?;

        match record {
            Some(record) if !record.is_blank() => Ok(record),
            _ => Err(ApiError::NotFound(format!("Celestial object '{name}'"))),
        }
    }

    fn url_for(&self, segment: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(segment);
        }
        url
    }
}

fn ensure_success(resp: Response) -> ApiResult<Response> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::FetchFailure(format!(
            "upstream returned {status} for {}",
            resp.url()
        )));
    }
    Ok(resp)
}
