//! Transkey - translation keys for hardcoded UI text
//!
//! Transkey turns a piece of UI text into a namespaced translation key and a
//! replacement call like `t('components.pages.saveChanges')`, and keeps a set
//! of JSON translation files in sync with it. New keys can be machine
//! translated into every target language through an OpenAI-compatible API.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and validation
//! - `keys`: Key generation from text and file paths
//! - `logging`: Diagnostic output setup
//! - `mcp`: Model Context Protocol server implementation
//! - `ops`: Generate, add, remove and lookup operations
//! - `store`: JSON translation file reading and writing
//! - `translate`: Machine translation client
//! - `workspace`: Project root, config and translation file resolution

pub mod cli;
pub mod config;
pub mod keys;
pub mod logging;
pub mod mcp;
pub mod ops;
pub mod store;
pub mod translate;
pub mod workspace;
