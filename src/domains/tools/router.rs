//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for the STDIO/TCP transports by
//! delegating to the tool definitions themselves. Each tool knows how to
//! create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{
    BatchTranslateTool, CreateAssetTool, ExportLocaleTool, GetTranslationsTool, ListAssetsTool,
    ListLocalesTool, TranslateTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ListLocalesTool::create_route(config.clone()))
        .with_route(ListAssetsTool::create_route(config.clone()))
        .with_route(CreateAssetTool::create_route(config.clone()))
        .with_route(TranslateTool::create_route(config.clone()))
        .with_route(GetTranslationsTool::create_route(config.clone()))
        .with_route(ExportLocaleTool::create_route(config.clone()))
        .with_route(BatchTranslateTool::create_route(config))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        let tools = router.list_all();
        assert_eq!(tools.len(), 7);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"list_locales"));
        assert!(names.contains(&"list_assets"));
        assert!(names.contains(&"create_asset"));
        assert!(names.contains(&"translate"));
        assert!(names.contains(&"get_translations"));
        assert!(names.contains(&"export_locale"));
        assert!(names.contains(&"batch_translate"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
