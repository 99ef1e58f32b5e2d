//! Batch translation tool.
//!
//! Creates an asset and writes its translations for several locales in one
//! call. The workflow is best-effort, not transactional: the asset is created
//! first, then one translation write per locale runs sequentially in the
//! order the mapping was supplied. Failed locales do not roll back earlier
//! writes; each step's outcome is reported in the structured result.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type, schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::core::config::Config;

use super::client::LocoClient;
use super::common::error_result;

/// Parameters for the batch translation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BatchTranslateParams {
    /// Unique, path-like asset id (e.g. "home.welcome_title").
    #[schemars(description = "Unique asset id, e.g. 'home.welcome_title'")]
    pub id: String,

    /// Source-language text the asset is created with.
    #[schemars(description = "Source-language text for the new asset")]
    pub source_text: String,

    /// Mapping of locale code to translated text. Writes run in the order
    /// the entries are supplied.
    #[schemars(description = "Mapping of locale code to translated text")]
    pub translations: Map<String, Value>,

    /// Disambiguation context shown to translators.
    #[schemars(description = "Disambiguation context for translators")]
    #[serde(default)]
    pub context: Option<String>,
}

/// Outcome of one per-locale translation write.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct LocaleWriteStatus {
    pub locale: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Structured result of a batch translation.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct BatchTranslateResult {
    pub asset_id: String,
    pub succeeded: usize,
    pub failed: usize,
    pub results: Vec<LocaleWriteStatus>,
}

/// Batch translation tool implementation.
#[derive(Debug, Clone)]
pub struct BatchTranslateTool;

impl BatchTranslateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "batch_translate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Create a translation asset with its source text, then write translations for several \
         locales sequentially. Best-effort: locales that fail are reported individually and do \
         not undo earlier writes.";

    /// Execute the tool logic.
    pub async fn execute(params: &BatchTranslateParams, config: &Config) -> CallToolResult {
        info!(
            "Batch-translating '{}' into {} locale(s)",
            params.id,
            params.translations.len()
        );

        // All per-locale values must be strings; checked before the first
        // network call so malformed input has no side effects.
        let mut pairs: Vec<(String, String)> = Vec::with_capacity(params.translations.len());
        for (locale, value) in &params.translations {
            match value.as_str() {
                Some(text) => pairs.push((locale.clone(), text.to_string())),
                None => {
                    return error_result(&format!(
                        "Invalid arguments: translation for locale '{}' must be a string",
                        locale
                    ));
                }
            }
        }

        let client = match LocoClient::from_config(config) {
            Ok(client) => client,
            Err(e) => return error_result(&e.to_string()),
        };

        // Step 1: create the asset. A failure here aborts the whole batch
        // before any translation write.
        let mut body = Map::new();
        body.insert("id".to_string(), json!(params.id));
        body.insert("text".to_string(), json!(params.source_text));
        if let Some(context) = &params.context {
            body.insert("context".to_string(), json!(context));
        }

        if let Err(e) = client.post_json(&["assets"], &Value::Object(body)).await {
            error!("Batch aborted, asset creation failed: {}", e);
            return error_result(&format!("Asset creation failed: {}", e));
        }

        // Step 2: one write per locale, strictly sequential, insertion order.
        let mut results = Vec::with_capacity(pairs.len());
        for (locale, text) in pairs {
            match client
                .post_raw(&["translations", &params.id, &locale], text)
                .await
            {
                Ok(_) => results.push(LocaleWriteStatus {
                    locale,
                    success: true,
                    error: None,
                }),
                Err(e) => {
                    warn!("Translation write for '{}' failed: {}", locale, e);
                    results.push(LocaleWriteStatus {
                        locale,
                        success: false,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        let succeeded = results.iter().filter(|r| r.success).count();
        let failed = results.len() - succeeded;

        let mut summary = format!(
            "Created asset '{}'; wrote {} of {} translation(s)",
            params.id,
            succeeded,
            results.len()
        );
        for status in &results {
            match &status.error {
                None => summary.push_str(&format!("\n{}: ok", status.locale)),
                Some(error) => {
                    summary.push_str(&format!("\n{}: failed ({})", status.locale, error))
                }
            }
        }

        let result = BatchTranslateResult {
            asset_id: params.id.clone(),
            succeeded,
            failed,
            results,
        };

        CallToolResult {
            content: vec![Content::text(summary)],
            structured_content: serde_json::to_value(&result).ok(),
            is_error: Some(failed > 0),
            meta: None,
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<BatchTranslateParams>(),
            annotations: None,
            output_schema: Some(schema_for_type::<BatchTranslateResult>().into()),
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
                let params: BatchTranslateParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}
