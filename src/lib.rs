//! Loco MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes the
//! Loco translation management REST API as callable tools, so an AI agent can
//! manipulate a localization project conversationally.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the main server, and the transport layer
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: The Loco tools (locale listing, asset CRUD, translation
//!     get/set, export, batch creation) and the HTTP adapter they share
//!
//! # Example
//!
//! ```rust,no_run
//! use loco_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
