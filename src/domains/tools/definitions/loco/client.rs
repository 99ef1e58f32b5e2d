//! HTTP adapter for the Loco REST API.
//!
//! `LocoClient` is the single outbound seam shared by every tool: it builds
//! endpoint URLs from percent-encoded path segments, attaches the
//! `Authorization: Loco <key>` header, and normalizes responses into
//! [`ApiBody`]. One request per call - no retries, no backoff.

use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::core::config::Config;
use crate::domains::tools::ToolError;

/// A normalized Loco API response body.
///
/// The API mixes JSON envelopes with plain-text payloads (raw translation
/// strings, csv/xliff/po exports), so the adapter reads every body as text
/// and attempts a single JSON parse. Handlers pattern-match on the variant
/// instead of guessing the content type.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiBody {
    /// The body parsed as JSON.
    Json(Value),
    /// The body is not JSON; kept verbatim.
    Text(String),
}

impl ApiBody {
    /// Render the body as readable text: pretty-printed when structured,
    /// verbatim when raw.
    pub fn to_pretty_text(&self) -> String {
        match self {
            Self::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Self::Text(text) => text.clone(),
        }
    }

    /// Get the parsed JSON value, or an error naming what was expected.
    pub fn into_json(self) -> Result<Value, ToolError> {
        match self {
            Self::Json(value) => Ok(value),
            Self::Text(text) => Err(ToolError::unexpected_payload(format!(
                "expected JSON, got: {}",
                text.chars().take(120).collect::<String>()
            ))),
        }
    }
}

/// Client for one Loco project, resolved from configuration per tool call.
#[derive(Debug)]
pub struct LocoClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl LocoClient {
    /// Build a client from configuration.
    ///
    /// Fails with [`ToolError::MissingApiKey`] before any network activity
    /// when the key is absent or empty.
    pub fn from_config(config: &Config) -> Result<Self, ToolError> {
        let api_key = config
            .credentials
            .loco_api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ToolError::MissingApiKey)?
            .to_string();

        let base_url = Url::parse(&config.api.base_url)
            .map_err(|e| ToolError::InvalidBaseUrl(format!("{}: {}", config.api.base_url, e)))?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        })
    }

    /// Build an endpoint URL from path segments and query pairs.
    ///
    /// Each segment is percent-encoded, so user-supplied identifiers may
    /// contain reserved characters (an asset id `a/b` becomes `a%2Fb`).
    pub fn endpoint(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<Url, ToolError> {
        let mut url = self.base_url.clone();

        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ToolError::InvalidBaseUrl(self.base_url.to_string()))?;
            path.pop_if_empty();
            path.extend(segments);
        }

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// GET an endpoint.
    pub async fn get(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<ApiBody, ToolError> {
        let url = self.endpoint(segments, query)?;
        debug!("GET {}", url);
        self.send(self.http.get(url)).await
    }

    /// POST a JSON body to an endpoint.
    pub async fn post_json(
        &self,
        segments: &[&str],
        body: &Value,
    ) -> Result<ApiBody, ToolError> {
        let url = self.endpoint(segments, &[])?;
        debug!("POST {} (json)", url);
        self.send(self.http.post(url).json(body)).await
    }

    /// POST an opaque string body to an endpoint.
    ///
    /// Used for endpoints whose wire format is a bare string (translation
    /// writes); no content type is added.
    pub async fn post_raw(
        &self,
        segments: &[&str],
        body: String,
    ) -> Result<ApiBody, ToolError> {
        let url = self.endpoint(segments, &[])?;
        debug!("POST {} (raw)", url);
        self.send(self.http.post(url).body(body)).await
    }

    /// Issue one request and normalize the response.
    ///
    /// The full body is read as text first so JSON and plain-text successes
    /// share a code path; a non-success status keeps the body for the caller.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<ApiBody, ToolError> {
        let response = request
            .header(AUTHORIZATION, format!("Loco {}", self.api_key))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ToolError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(match serde_json::from_str::<Value>(&body) {
            Ok(value) => ApiBody::Json(value),
            Err(_) => ApiBody::Text(body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str, api_key: Option<&str>) -> Config {
        let mut config = Config::default();
        config.api.base_url = base_url.to_string();
        config.credentials.loco_api_key = api_key.map(str::to_string);
        config
    }

    #[test]
    fn test_missing_api_key_fails_before_any_request() {
        let config = test_config("https://localise.biz/api", None);
        let err = LocoClient::from_config(&config).unwrap_err();
        assert!(matches!(err, ToolError::MissingApiKey));
    }

    #[test]
    fn test_empty_api_key_fails() {
        let config = test_config("https://localise.biz/api", Some(""));
        assert!(LocoClient::from_config(&config).is_err());
    }

    #[test]
    fn test_endpoint_percent_encodes_segments() {
        let config = test_config("https://localise.biz/api", Some("k"));
        let client = LocoClient::from_config(&config).unwrap();

        let url = client
            .endpoint(&["translations", "a/b", "fr"], &[])
            .unwrap();
        assert_eq!(url.path(), "/api/translations/a%2Fb/fr");
    }

    #[test]
    fn test_endpoint_with_query_and_trailing_slash_base() {
        let config = test_config("https://localise.biz/api/", Some("k"));
        let client = LocoClient::from_config(&config).unwrap();

        let url = client.endpoint(&["assets"], &[("filter", "home")]).unwrap();
        assert_eq!(url.path(), "/api/assets");
        assert_eq!(url.query(), Some("filter=home"));
    }

    #[tokio::test]
    async fn test_authorization_header_attached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/locales"))
            .and(header("Authorization", "Loco secret_key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let config = test_config(&server.uri(), Some("secret_key"));
        let client = LocoClient::from_config(&config).unwrap();

        let body = client.get(&["locales"], &[]).await.unwrap();
        assert_eq!(body, ApiBody::Json(serde_json::json!([])));
    }

    #[tokio::test]
    async fn test_error_status_keeps_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/locales"))
            .respond_with(ResponseTemplate::new(403).set_body_string("Project not authorized"))
            .mount(&server)
            .await;

        let config = test_config(&server.uri(), Some("k"));
        let client = LocoClient::from_config(&config).unwrap();

        match client.get(&["locales"], &[]).await {
            Err(ToolError::Api { status, body }) => {
                assert_eq!(status, 403);
                assert_eq!(body, "Project not authorized");
            }
            other => panic!("expected Api error, got {:?}", other.map(|b| b.to_pretty_text())),
        }
    }

    #[tokio::test]
    async fn test_non_json_success_returns_raw_text() {
        let server = MockServer::start().await;
        let csv = "id,fr\nhome.title,Accueil\n";
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(csv, "text/csv"))
            .mount(&server)
            .await;

        let config = test_config(&server.uri(), Some("k"));
        let client = LocoClient::from_config(&config).unwrap();

        let body = client.get(&["export", "locale", "fr.csv"], &[]).await.unwrap();
        assert_eq!(body, ApiBody::Text(csv.to_string()));
        assert_eq!(body.to_pretty_text(), csv);
    }

    #[tokio::test]
    async fn test_post_raw_sends_opaque_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translations/home.title/fr"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let config = test_config(&server.uri(), Some("k"));
        let client = LocoClient::from_config(&config).unwrap();

        client
            .post_raw(&["translations", "home.title", "fr"], "Accueil".to_string())
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].body, b"Accueil");
        // The raw body must not be JSON-wrapped or given a JSON content type.
        let content_type = requests[0]
            .headers
            .get("content-type")
            .map(|v| v.to_str().unwrap_or_default().to_string());
        assert_ne!(content_type.as_deref(), Some("application/json"));
    }

    #[tokio::test]
    async fn test_post_json_sets_json_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/assets"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": "x"})))
            .mount(&server)
            .await;

        let config = test_config(&server.uri(), Some("k"));
        let client = LocoClient::from_config(&config).unwrap();

        client
            .post_json(&["assets"], &serde_json::json!({"id": "x"}))
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let content_type = requests[0]
            .headers
            .get("content-type")
            .map(|v| v.to_str().unwrap_or_default().to_string());
        assert_eq!(content_type.as_deref(), Some("application/json"));
    }
}
