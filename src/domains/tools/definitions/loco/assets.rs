//! Asset (translation key) tools.
//!
//! `list_assets` queries the project's translation keys with an optional
//! server-side filter; `create_asset` registers a new key.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::{error, info};

use crate::core::config::Config;
use crate::domains::tools::ToolError;

use super::client::LocoClient;
use super::common::{error_result, success_result};

/// One asset summary as returned by the Loco listing endpoint.
///
/// The remote objects carry more fields than this; unknown fields are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub context: Option<String>,
}

// ============================================================================
// list_assets
// ============================================================================

/// Parameters for the asset listing tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListAssetsParams {
    /// Optional text filter applied server-side to asset ids and notes.
    #[schemars(description = "Optional text filter applied by the server")]
    #[serde(default)]
    pub filter: Option<String>,
}

/// Asset listing tool implementation.
#[derive(Debug, Clone)]
pub struct ListAssetsTool;

impl ListAssetsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_assets";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List translation assets (keys) in the Loco project, optionally narrowed by a server-side text filter.";

    /// Execute the tool logic.
    pub async fn execute(params: &ListAssetsParams, config: &Config) -> CallToolResult {
        info!("Listing assets (filter: {:?})", params.filter);

        let client = match LocoClient::from_config(config) {
            Ok(client) => client,
            Err(e) => return error_result(&e.to_string()),
        };

        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(filter) = params.filter.as_deref() {
            query.push(("filter", filter));
        }

        let body = match client.get(&["assets"], &query).await {
            Ok(body) => body,
            Err(e) => {
                error!("Asset listing failed: {}", e);
                return error_result(&e.to_string());
            }
        };

        let assets: Vec<AssetSummary> = match body.into_json().and_then(|value| {
            serde_json::from_value(value)
                .map_err(|e| ToolError::unexpected_payload(e.to_string()))
        }) {
            Ok(assets) => assets,
            Err(e) => {
                error!("Could not decode asset listing: {}", e);
                return error_result(&e.to_string());
            }
        };

        if assets.is_empty() {
            return success_result("No assets found.".to_string());
        }

        let mut output = format!("Found {} asset(s):", assets.len());
        for asset in &assets {
            output.push_str(&format!(
                "\n- {} [{}]",
                asset.id,
                asset.kind.as_deref().unwrap_or("text")
            ));
            if let Some(context) = asset.context.as_deref().filter(|c| !c.is_empty()) {
                output.push_str(&format!(" ({})", context));
            }
        }

        success_result(output)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListAssetsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the transport router.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: ListAssetsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// create_asset
// ============================================================================

/// Parameters for the asset creation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateAssetParams {
    /// Unique, path-like asset id (e.g. "home.welcome_title").
    #[schemars(description = "Unique asset id, e.g. 'home.welcome_title'")]
    pub id: String,

    /// Initial source-language text.
    #[schemars(description = "Initial source-language text")]
    #[serde(default)]
    pub text: Option<String>,

    /// Content type of the asset: text, html, or xml.
    #[schemars(description = "Asset content type: 'text', 'html', or 'xml'")]
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    /// Disambiguation context shown to translators.
    #[schemars(description = "Disambiguation context for translators")]
    #[serde(default)]
    pub context: Option<String>,

    /// Free-form notes for translators.
    #[schemars(description = "Notes for translators")]
    #[serde(default)]
    pub notes: Option<String>,
}

/// Asset creation tool implementation.
#[derive(Debug, Clone)]
pub struct CreateAssetTool;

impl CreateAssetTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_asset";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Create a new translation asset (key) in the Loco project. Optional fields are only sent when supplied.";

    /// Build the request body, inserting only the fields that were supplied.
    ///
    /// Absent optionals are omitted entirely, never sent as null.
    fn request_body(params: &CreateAssetParams) -> Value {
        let mut body = Map::new();
        body.insert("id".to_string(), json!(params.id));
        if let Some(text) = &params.text {
            body.insert("text".to_string(), json!(text));
        }
        if let Some(kind) = &params.kind {
            body.insert("type".to_string(), json!(kind));
        }
        if let Some(context) = &params.context {
            body.insert("context".to_string(), json!(context));
        }
        if let Some(notes) = &params.notes {
            body.insert("notes".to_string(), json!(notes));
        }
        Value::Object(body)
    }

    /// Execute the tool logic.
    pub async fn execute(params: &CreateAssetParams, config: &Config) -> CallToolResult {
        info!("Creating asset '{}'", params.id);

        let client = match LocoClient::from_config(config) {
            Ok(client) => client,
            Err(e) => return error_result(&e.to_string()),
        };

        let body = Self::request_body(params);
        match client.post_json(&["assets"], &body).await {
            Ok(response) => success_result(format!(
                "Created asset '{}':\n{}",
                params.id,
                response.to_pretty_text()
            )),
            Err(e) => {
                error!("Asset creation failed: {}", e);
                error_result(&e.to_string())
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateAssetParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the transport router.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: CreateAssetParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> Config {
        let mut config = Config::default();
        config.api.base_url = base_url.to_string();
        config.credentials.loco_api_key = Some("k".to_string());
        config
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_list_params_filter_defaults_to_none() {
        let params: ListAssetsParams = serde_json::from_str("{}").unwrap();
        assert!(params.filter.is_none());
    }

    #[test]
    fn test_create_params_require_id() {
        let result: Result<CreateAssetParams, _> =
            serde_json::from_str(r#"{"text": "Hello"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_body_omits_absent_optionals() {
        let params = CreateAssetParams {
            id: "home.title".to_string(),
            text: Some("Welcome".to_string()),
            kind: None,
            context: None,
            notes: None,
        };
        let body = CreateAssetTool::request_body(&params);
        let obj = body.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["id"], "home.title");
        assert_eq!(obj["text"], "Welcome");
        assert!(!obj.contains_key("type"));
        assert!(!obj.contains_key("context"));
        assert!(!obj.contains_key("notes"));
    }

    #[tokio::test]
    async fn test_list_assets_with_filter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/assets"))
            .and(query_param("filter", "home"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "home.title", "type": "text"},
                {"id": "home.body", "type": "html", "context": "landing page"}
            ])))
            .mount(&server)
            .await;

        let config = test_config(&server.uri());
        let params = ListAssetsParams {
            filter: Some("home".to_string()),
        };
        let result = ListAssetsTool::execute(&params, &config).await;

        assert!(!result.is_error.unwrap_or(false));
        let text = text_of(&result);
        assert!(text.contains("Found 2 asset(s)"));
        assert!(text.contains("home.title [text]"));
        assert!(text.contains("home.body [html] (landing page)"));
    }

    #[tokio::test]
    async fn test_list_assets_empty_renders_no_assets_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/assets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let config = test_config(&server.uri());
        let result = ListAssetsTool::execute(&ListAssetsParams { filter: None }, &config).await;

        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "No assets found.");
    }

    #[tokio::test]
    async fn test_create_asset_sends_only_supplied_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/assets"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "home.title", "type": "text"
            })))
            .mount(&server)
            .await;

        let config = test_config(&server.uri());
        let params = CreateAssetParams {
            id: "home.title".to_string(),
            text: Some("Welcome".to_string()),
            kind: None,
            context: None,
            notes: None,
        };
        let result = CreateAssetTool::execute(&params, &config).await;

        assert!(!result.is_error.unwrap_or(false));
        assert!(text_of(&result).contains("Created asset 'home.title'"));

        let requests = server.received_requests().await.unwrap();
        let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
        let obj = sent.as_object().unwrap();
        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("text"));
        assert!(!obj.contains_key("notes"));
        assert!(!obj.contains_key("context"));
        assert!(!obj.contains_key("type"));
    }

    #[tokio::test]
    async fn test_create_asset_conflict_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/assets"))
            .respond_with(ResponseTemplate::new(409).set_body_string("Asset already exists"))
            .mount(&server)
            .await;

        let config = test_config(&server.uri());
        let params = CreateAssetParams {
            id: "home.title".to_string(),
            text: None,
            kind: None,
            context: None,
            notes: None,
        };
        let result = CreateAssetTool::execute(&params, &config).await;

        assert!(result.is_error.unwrap_or(false));
        let text = text_of(&result);
        assert!(text.contains("409"));
        assert!(text.contains("Asset already exists"));
    }
}
