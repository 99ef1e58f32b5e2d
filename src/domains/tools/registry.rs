//! Tool Registry - central registration point for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Tool metadata for listing

use rmcp::model::Tool;

use super::definitions::{
    BatchTranslateTool, CreateAssetTool, ExportLocaleTool, GetTranslationsTool, ListAssetsTool,
    ListLocalesTool, TranslateTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This is the single source of truth for tool names and metadata; the
/// transport router is checked against it in tests.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            ListLocalesTool::NAME,
            ListAssetsTool::NAME,
            CreateAssetTool::NAME,
            TranslateTool::NAME,
            GetTranslationsTool::NAME,
            ExportLocaleTool::NAME,
            BatchTranslateTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            ListLocalesTool::to_tool(),
            ListAssetsTool::to_tool(),
            CreateAssetTool::to_tool(),
            TranslateTool::to_tool(),
            GetTranslationsTool::to_tool(),
            ExportLocaleTool::to_tool(),
            BatchTranslateTool::to_tool(),
        ]
    }
}
