//! Locale listing tool.
//!
//! Lists the locales configured in the Loco project.

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

/// Parameters for the locale listing tool. Takes no arguments.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListLocalesParams {}

/// One project locale as returned by the Loco API.
#[derive(Debug, Clone, Deserialize)]
pub struct Locale {
    pub code: String,
    pub name: String,
}

/// Locale listing tool implementation.
#[derive(Debug, Clone)]
pub struct ListLocalesTool;

impl ListLocalesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_locales";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List all locales (language/region codes and display names) configured in the Loco project.";

    /// Execute the tool logic.
    pub async fn execute(_params: &ListLocalesParams, config: &Config) -> CallToolResult {
        info!("Listing project locales");

        let client = match LocoClient::from_config(config) {
            Ok(client) => client,
            Err(e) => return error_result(&e.to_string()),
        };

        let body = match client.get(&["locales"], &[]).await {
            Ok(body) => body,
            Err(e) => {
                error!("Locale listing failed: {}", e);
                return error_result(&e.to_string());
            }
        };

        let locales: Vec<Locale> = match body.into_json().and_then(|value| {
            serde_json::from_value(value).map_err(|e| ToolError::unexpected_payload(e.to_string()))
        }) {
            Ok(locales) => locales,
            Err(e) => {
                error!("Could not decode locale listing: {}", e);
                return error_result(&e.to_string());
            }
        };

        let mut output = format!("Found {} locale(s):", locales.len());
        for locale in &locales {
            output.push_str(&format!("\n- {} — {}", locale.code, locale.name));
        }

        success_result(output)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListLocalesParams>(),
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
                let params: ListLocalesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}
