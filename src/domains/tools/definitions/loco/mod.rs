//! Loco tools module.
//!
//! This module provides the tools for manipulating a Loco localization
//! project:
//! - `locales`: list the project's locales
//! - `assets`: list and create translation assets (keys)
//! - `translations`: read and write per-locale translations
//! - `export`: export a locale bundle in a chosen format
//! - `batch`: create an asset together with several translations
//!
//! All tools share the HTTP adapter in `client`.

pub mod assets;
pub mod batch;
pub mod client;
pub mod common;
pub mod export;
pub mod locales;
pub mod translations;

pub use assets::{CreateAssetParams, CreateAssetTool, ListAssetsParams, ListAssetsTool};
pub use batch::{BatchTranslateParams, BatchTranslateTool};
pub use client::{ApiBody, LocoClient};
pub use export::{ExportLocaleParams, ExportLocaleTool};
pub use locales::{ListLocalesParams, ListLocalesTool};
pub use translations::{
    GetTranslationsParams, GetTranslationsTool, TranslateParams, TranslateTool,
};
