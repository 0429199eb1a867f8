//! HTTP client for the detection backend.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ClientError, Result};
use crate::model::{
    BackendHealth, BackendMetrics, EventFilter, FilteredEvents, MediaAsset, PersonEvent,
    VehicleEvent,
};
use crate::source::EventSource;

/// Limit used by the recent-event endpoints when the caller has no preference.
pub const DEFAULT_RECENT_LIMIT: u32 = 10;

/// Build the fetchable URL of a media asset.
///
/// Returns `None` when there is no asset to resolve. The URL is not checked
/// against the server; a missing file surfaces as a 404 when it is loaded.
pub fn media_url(base_url: &str, asset: Option<&MediaAsset>) -> Option<String> {
    let asset = asset?;
    Some(format!(
        "{}/media/{}",
        base_url.trim_end_matches('/'),
        asset.id
    ))
}

/// Backend client translating typed requests into HTTP calls.
///
/// No retries, no backoff and no explicit timeout: every failure is returned
/// to the caller as-is.
#[derive(Clone, Debug)]
pub struct EventClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl EventClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    pub fn with_http_client(config: &ApiConfig, http_client: reqwest::Client) -> Self {
        Self {
            base_url: config.trimmed_base_url().to_string(),
            http_client,
        }
    }

    /// Base URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Most recent person detections, in server order.
    pub async fn fetch_recent_persons(&self, limit: u32) -> Result<Vec<PersonEvent>> {
        self.get_recent("/persons/recent", limit).await
    }

    /// Most recent vehicle detections, in server order.
    pub async fn fetch_recent_vehicles(&self, limit: u32) -> Result<Vec<VehicleEvent>> {
        self.get_recent("/vehicles/recent", limit).await
    }

    /// Run a filtered query over historical events.
    pub async fn filter_events(&self, filter: &EventFilter) -> Result<FilteredEvents> {
        let url = self.endpoint("/events/filter");
        tracing::debug!("Filtering events: {:?}", filter);

        let request = self.http_client.post(&url).json(filter);
        let result: FilteredEvents = send_json(request, url).await?;

        tracing::debug!(
            "Filter returned {} person and {} vehicle events",
            result.person_events.len(),
            result.vehicle_events.len()
        );
        Ok(result)
    }

    pub async fn health(&self) -> Result<BackendHealth> {
        let url = self.endpoint("/admin/health");
        send_json(self.http_client.get(&url), url).await
    }

    pub async fn metrics(&self) -> Result<BackendMetrics> {
        let url = self.endpoint("/admin/metrics");
        send_json(self.http_client.get(&url), url).await
    }

    pub fn media_url(&self, asset: Option<&MediaAsset>) -> Option<String> {
        media_url(&self.base_url, asset)
    }

    async fn get_recent<T>(&self, path: &str, limit: u32) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        let limit = limit.max(1);
        tracing::trace!("GET {}?limit={}", url, limit);

        let request = self.http_client.get(&url).query(&[("limit", limit)]);
        send_json(request, url).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Send a request and decode its JSON body.
///
/// The body is read as text first so decode failures can be reported against
/// the URL that produced them.
async fn send_json<T>(request: reqwest::RequestBuilder, url: String) -> Result<T>
where
    T: DeserializeOwned,
{
    let response = match request.send().await {
        Ok(response) => response,
        Err(source) => return Err(ClientError::Transport { url, source }),
    };

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::Http { url, status, body });
    }

    let text = match response.text().await {
        Ok(text) => text,
        Err(source) => return Err(ClientError::Transport { url, source }),
    };

    serde_json::from_str(&text).map_err(|source| ClientError::Decode { url, source })
}

#[async_trait]
impl EventSource for EventClient {
    async fn recent_persons(&self, limit: u32) -> Result<Vec<PersonEvent>> {
        self.fetch_recent_persons(limit).await
    }

    async fn recent_vehicles(&self, limit: u32) -> Result<Vec<VehicleEvent>> {
        self.fetch_recent_vehicles(limit).await
    }

    async fn filter_events(&self, filter: &EventFilter) -> Result<FilteredEvents> {
        EventClient::filter_events(self, filter).await
    }

    async fn health(&self) -> Result<BackendHealth> {
        EventClient::health(self).await
    }

    async fn metrics(&self) -> Result<BackendMetrics> {
        EventClient::metrics(self).await
    }

    fn media_url(&self, asset: Option<&MediaAsset>) -> Option<String> {
        EventClient::media_url(self, asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(id: &str) -> MediaAsset {
        MediaAsset {
            id: id.to_string(),
            media_type: "image".to_string(),
            path: format!("crops/{id}.jpg"),
            attributes: None,
            created_at: "2024-05-01T08:00:00Z".to_string(),
        }
    }

    #[test]
    fn media_url_is_none_without_asset() {
        assert_eq!(media_url("http://host:8000", None), None);
    }

    #[test]
    fn media_url_strips_trailing_slash() {
        let url = media_url("http://host:8000/", Some(&asset("abc123")));
        assert_eq!(url.as_deref(), Some("http://host:8000/media/abc123"));
    }

    #[test]
    fn media_url_ignores_storage_path() {
        let url = media_url("http://host:8000", Some(&asset("crop-1"))).unwrap();
        assert!(!url.contains("crops/"));
    }

    #[test]
    fn client_trims_configured_base_url() {
        let client = EventClient::new(&ApiConfig::new("http://host:8000//"));
        assert_eq!(client.base_url(), "http://host:8000");
        assert_eq!(
            client.media_url(Some(&asset("abc123"))).as_deref(),
            Some("http://host:8000/media/abc123")
        );
    }
}
