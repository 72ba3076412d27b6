use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{config::Config, store::RemoveFallback};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project, where the config file search starts
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateKeyParams {
    /// Absolute path of the project, where the config file search starts
    pub project_root_path: String,
    /// The selected UI text
    pub text: String,
    /// File the text was selected in, absolute or relative to the project root.
    /// Its directories become the key namespace.
    #[serde(default)]
    pub file_path: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddTranslationParams {
    /// Absolute path of the project, where the config file search starts
    pub project_root_path: String,
    /// The selected UI text, stored as the source value
    pub text: String,
    /// File the text was selected in, absolute or relative to the project root
    #[serde(default)]
    pub file_path: Option<String>,
    /// Override `autoTranslateEnabled` from the config file
    #[serde(default)]
    pub auto_translate: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoveTranslationParams {
    /// Absolute path of the project, where the config file search starts
    pub project_root_path: String,
    /// The selected call, e.g. "t('components.pages.saveChanges')"
    pub selection: String,
    /// Override `removeFallback` from the config file
    #[serde(default)]
    pub fallback: Option<RemoveFallback>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupKeyParams {
    /// Absolute path of the project, where the config file search starts
    pub project_root_path: String,
    /// A dotted key or a call like "t('key')"
    pub key: String,
}

// ============================================================
// Tool Results
// ============================================================

/// An operation summary with its overall outcome.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolOutcome<T> {
    /// True when every translation file was updated
    pub success: bool,
    #[serde(flatten)]
    pub summary: T,
}

/// Configuration DTO for MCP
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config_path: Option<String>,
    /// The API key is masked.
    pub config: Config,
}

const MASKED_API_KEY: &str = "********";

impl ConfigDto {
    pub fn new(mut config: Config, config_path: Option<String>) -> Self {
        if !config.open_ai_api_key.is_empty() {
            config.open_ai_api_key = MASKED_API_KEY.to_string();
        }
        Self {
            from_file: config_path.is_some(),
            config_path,
            config,
        }
    }
}
