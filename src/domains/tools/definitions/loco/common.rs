//! Common utilities shared across Loco tools.
//!
//! This module provides shared response formatting and error handling
//! helpers.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_error_result_marks_error() {
        let result = error_result("boom");
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "boom");
    }

    #[test]
    fn test_success_result_is_not_error() {
        let result = success_result("done".to_string());
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "done");
    }
}
