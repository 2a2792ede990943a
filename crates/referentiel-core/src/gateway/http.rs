//! reqwest-backed gateway
//!
//! Provides the async HTTP client used by the list controllers:
//! - JSON request/response bodies through serde
//! - Configurable request timeout
//! - Server error messages extracted from failed responses

use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::RecordGateway;
use crate::catalogue::Catalogue;
use crate::error::{Error, Result};

/// Default API base URL
pub const DEFAULT_API_URL: &str = "http://localhost:9090/api";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP gateway for one catalogue
pub struct HttpGateway<K> {
    /// HTTP client for making requests
    http_client: HttpClient,
    /// Collection endpoint, `{api_url}/{K::PATH}`
    endpoint: String,
    _catalogue: PhantomData<fn() -> K>,
}

impl<K> Clone for HttpGateway<K> {
    fn clone(&self) -> Self {
        Self {
            http_client: self.http_client.clone(),
            endpoint: self.endpoint.clone(),
            _catalogue: PhantomData,
        }
    }
}

impl<K> std::fmt::Debug for HttpGateway<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGateway")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Builder for creating an HttpGateway
pub struct HttpGatewayBuilder<K> {
    api_url: Option<String>,
    timeout_secs: Option<u64>,
    _catalogue: PhantomData<fn() -> K>,
}

impl<K: Catalogue> Default for HttpGatewayBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Catalogue> HttpGatewayBuilder<K> {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            api_url: None,
            timeout_secs: None,
            _catalogue: PhantomData,
        }
    }

    /// Set the API base URL (defaults to the local backend)
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Build the HttpGateway
    pub fn build(self) -> Result<HttpGateway<K>> {
        let api_url = self.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = api_url.trim_end_matches('/');
        if api_url.is_empty() {
            return Err(Error::ConfigError("API base URL is empty".to_string()));
        }

        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(
                self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ))
            .build()
            .map_err(Error::NetworkError)?;

        Ok(HttpGateway {
            http_client,
            endpoint: format!("{}/{}", api_url, K::PATH),
            _catalogue: PhantomData,
        })
    }
}

impl<K: Catalogue> HttpGateway<K> {
    /// Create a gateway against the given API base URL
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        HttpGatewayBuilder::new().api_url(api_url).build()
    }

    /// Create a new builder for HttpGateway
    pub fn builder() -> HttpGatewayBuilder<K> {
        HttpGatewayBuilder::new()
    }

    /// Collection endpoint of this gateway
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.endpoint, id)
    }

    /// Send a request and check its status
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = request.send().await.map_err(Error::NetworkError)?;
        let status = response.status();

        if !status.is_success() {
            return handle_error_response(status, response).await;
        }
        Ok(response)
    }

    /// Send a request and decode its JSON body
    async fn send_json<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        self.send(request)
            .await?
            .json()
            .await
            .map_err(|e| Error::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl<K: Catalogue> RecordGateway<K> for HttpGateway<K> {
    async fn list(&self) -> Result<Vec<K::Record>> {
        debug!(endpoint = %self.endpoint, "Fetching records");
        let records: Vec<K::Record> = self.send_json(self.http_client.get(&self.endpoint)).await?;
        debug!(endpoint = %self.endpoint, count = records.len(), "Records fetched");
        Ok(records)
    }

    async fn create(&self, draft: &K::Draft) -> Result<K::Record> {
        debug!(endpoint = %self.endpoint, ?draft, "Creating record");
        self.send_json(self.http_client.post(&self.endpoint).json(draft))
            .await
    }

    async fn update(&self, id: i64, draft: &K::Draft) -> Result<K::Record> {
        debug!(endpoint = %self.endpoint, id, ?draft, "Updating record");
        self.send_json(self.http_client.put(self.item_url(id)).json(draft))
            .await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        debug!(endpoint = %self.endpoint, id, "Deleting record");
        self.send(self.http_client.delete(self.item_url(id)))
            .await?;
        Ok(())
    }
}

/// Handle error responses from the API
async fn handle_error_response<T>(
    status: reqwest::StatusCode,
    response: reqwest::Response,
) -> Result<T> {
    let body = response.text().await.unwrap_or_default();
    let message = extract_server_message(&body);

    warn!(status = status.as_u16(), message = ?message, "Backend rejected request");

    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

/// Extract the human-readable message from an error body
///
/// Accepts a bare JSON string, a JSON object with a `message` or `error`
/// field, or plain text.
fn extract_server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let message = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(message)) => Some(message),
        Ok(serde_json::Value::Object(fields)) => ["message", "error"]
            .iter()
            .filter_map(|key| fields.get(*key).and_then(|v| v.as_str()))
            .find(|s| !s.trim().is_empty())
            .map(str::to_string),
        Ok(_) => None,
        Err(_) => Some(body.to_string()),
    };
    message.filter(|message| !message.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{JobSkills, Skills};

    #[test]
    fn test_gateway_builder() {
        let gateway = HttpGateway::<Skills>::builder()
            .api_url("https://example.com/api")
            .timeout_secs(5)
            .build()
            .unwrap();

        assert_eq!(gateway.endpoint(), "https://example.com/api/competences");
    }

    #[test]
    fn test_gateway_default_url() {
        let gateway = HttpGateway::<Skills>::builder().build().unwrap();
        assert_eq!(gateway.endpoint(), "http://localhost:9090/api/competences");
    }

    #[test]
    fn test_gateway_trims_trailing_slash() {
        let gateway = HttpGateway::<JobSkills>::new("http://backend/api/").unwrap();
        assert_eq!(gateway.endpoint(), "http://backend/api/competences-poste");
        assert_eq!(gateway.item_url(12), "http://backend/api/competences-poste/12");
    }

    #[test]
    fn test_gateway_rejects_empty_url() {
        let result = HttpGateway::<Skills>::new("/");
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_gateway_debug() {
        let gateway = HttpGateway::<Skills>::new("http://backend/api").unwrap();
        let debug = format!("{:?}", gateway);
        assert!(debug.contains("HttpGateway"));
        assert!(debug.contains("competences"));
    }

    #[test]
    fn test_gateway_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpGateway<Skills>>();
    }

    #[test]
    fn test_extract_server_message() {
        assert_eq!(
            extract_server_message(r#""Cette compétence existe déjà""#),
            Some("Cette compétence existe déjà".to_string())
        );
        assert_eq!(
            extract_server_message(r#"{"status": 400, "error": "Bad Request", "message": "nom invalide"}"#),
            Some("nom invalide".to_string())
        );
        assert_eq!(
            extract_server_message(r#"{"error": "Conflict", "message": ""}"#),
            Some("Conflict".to_string())
        );
        assert_eq!(
            extract_server_message("plain failure"),
            Some("plain failure".to_string())
        );
        assert_eq!(extract_server_message(r#"{"status": 500}"#), None);
        assert_eq!(extract_server_message("[1, 2]"), None);
        assert_eq!(extract_server_message("   "), None);
    }
}
