//! Translation read/write tools.
//!
//! `translate` writes one locale's text for an asset; `get_translations`
//! reads every locale's text for an asset.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::core::config::Config;
use crate::domains::tools::ToolError;

use super::client::LocoClient;
use super::common::{error_result, success_result};

/// Placeholder rendered for locales whose translation is absent or empty.
const EMPTY_PLACEHOLDER: &str = "(empty)";

// ============================================================================
// translate
// ============================================================================

/// Parameters for the translation write tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TranslateParams {
    /// Id of the asset to translate.
    #[schemars(description = "Asset id to translate")]
    pub asset_id: String,

    /// Target locale code (e.g. "fr", "de-DE").
    #[schemars(description = "Target locale code, e.g. 'fr'")]
    pub locale: String,

    /// The translated text.
    #[schemars(description = "Translated text for this asset and locale")]
    pub translation: String,
}

/// Translation write tool implementation.
#[derive(Debug, Clone)]
pub struct TranslateTool;

impl TranslateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "translate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Write the translation of one asset for one locale. Overwrites any existing text for that pair.";

    /// Execute the tool logic.
    ///
    /// The endpoint expects the bare translation string as the request body,
    /// not a JSON envelope. Asset id and locale go into the path and are
    /// percent-encoded by the client.
    pub async fn execute(params: &TranslateParams, config: &Config) -> CallToolResult {
        info!(
            "Writing {} translation of '{}'",
            params.locale, params.asset_id
        );

        let client = match LocoClient::from_config(config) {
            Ok(client) => client,
            Err(e) => return error_result(&e.to_string()),
        };

        match client
            .post_raw(
                &["translations", &params.asset_id, &params.locale],
                params.translation.clone(),
            )
            .await
        {
            Ok(_) => success_result(format!(
                "Saved {} translation of '{}': {}",
                params.locale, params.asset_id, params.translation
            )),
            Err(e) => {
                error!("Translation write failed: {}", e);
                error_result(&e.to_string())
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TranslateParams>(),
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
                let params: TranslateParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// get_translations
// ============================================================================

/// Parameters for the translation read tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTranslationsParams {
    /// Id of the asset whose translations to fetch.
    #[schemars(description = "Asset id whose translations to fetch")]
    pub asset_id: String,
}

/// Translation read tool implementation.
#[derive(Debug, Clone)]
pub struct GetTranslationsTool;

impl GetTranslationsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_translations";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get the translations of one asset across all locales. Locales without a translation show as '(empty)'.";

    /// Execute the tool logic.
    pub async fn execute(params: &GetTranslationsParams, config: &Config) -> CallToolResult {
        info!("Fetching translations of '{}'", params.asset_id);

        let client = match LocoClient::from_config(config) {
            Ok(client) => client,
            Err(e) => return error_result(&e.to_string()),
        };

        let endpoint = format!("{}.json", params.asset_id);
        let body = match client.get(&["translations", &endpoint], &[]).await {
            Ok(body) => body,
            Err(e) => {
                error!("Translation fetch failed: {}", e);
                return error_result(&e.to_string());
            }
        };

        let value = match body.into_json() {
            Ok(value) => value,
            Err(e) => return error_result(&e.to_string()),
        };
        let Some(map) = value.as_object() else {
            return error_result(
                &ToolError::unexpected_payload("expected a locale-to-translation object")
                    .to_string(),
            );
        };

        let mut output = format!("Translations of '{}':", params.asset_id);
        for (locale, entry) in map {
            let text = entry
                .get("translation")
                .and_then(|t| t.as_str())
                .unwrap_or("");
            let rendered = if text.is_empty() {
                EMPTY_PLACEHOLDER
            } else {
                text
            };
            output.push_str(&format!("\n{}: {}", locale, rendered));
        }

        success_result(output)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetTranslationsParams>(),
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
                let params: GetTranslationsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}
