//! Locale export tool.
//!
//! Fetches a snapshot of all translations for one locale in a chosen
//! serialization format. The payload structure is an opaque pass-through:
//! structured results are pretty-printed, everything else is rendered
//! verbatim.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::core::config::Config;

use super::client::LocoClient;
use super::common::{error_result, success_result};

/// Export formats accepted by the remote endpoint.
const EXPORT_FORMATS: [&str; 5] = ["json", "xml", "csv", "xliff", "po"];

fn default_format() -> String {
    "json".to_string()
}

/// Parameters for the locale export tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExportLocaleParams {
    /// Locale code to export (e.g. "fr").
    #[schemars(description = "Locale code to export, e.g. 'fr'")]
    pub locale: String,

    /// Export format: json, xml, csv, xliff, or po (default: json).
    #[schemars(description = "Export format: json, xml, csv, xliff, or po (default: json)")]
    #[serde(default = "default_format")]
    pub format: String,
}

/// Locale export tool implementation.
#[derive(Debug, Clone)]
pub struct ExportLocaleTool;

impl ExportLocaleTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "export_locale";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Export all translations for one locale as json, xml, csv, xliff, or po.";

    /// Execute the tool logic.
    pub async fn execute(params: &ExportLocaleParams, config: &Config) -> CallToolResult {
        info!(
            "Exporting locale '{}' as {}",
            params.locale, params.format
        );

        // Reject unknown formats before touching the network.
        if !EXPORT_FORMATS.contains(&params.format.as_str()) {
            warn!("Invalid export format: {}", params.format);
            return error_result(&format!(
                "Invalid export format '{}' (use json, xml, csv, xliff, or po)",
                params.format
            ));
        }

        let client = match LocoClient::from_config(config) {
            Ok(client) => client,
            Err(e) => return error_result(&e.to_string()),
        };

        let bundle = format!("{}.{}", params.locale, params.format);
        match client.get(&["export", "locale", &bundle], &[]).await {
            Ok(body) => success_result(body.to_pretty_text()),
            Err(e) => {
                error!("Locale export failed: {}", e);
                error_result(&e.to_string())
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ExportLocaleParams>(),
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
                let params: ExportLocaleParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}
