use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::store::RemoveFallback;

pub const CONFIG_FILE_NAME: &str = ".transkeyrc.json";

/// Environment variable that overrides `openAiApiKey`.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Translation files, relative to the project root or absolute.
    #[serde(default)]
    pub translation_file_paths: Vec<String>,
    #[serde(default = "default_translation_function")]
    pub translation_function: String,
    #[serde(default)]
    pub auto_translate_enabled: bool,
    #[serde(default)]
    pub open_ai_api_key: String,
    /// The file holding the untranslated source text. Empty means none.
    #[serde(default)]
    pub source_language_file: String,
    /// Language code per translation file path.
    #[serde(default)]
    pub language_file_languages: BTreeMap<String, String>,
    /// Namespace used when no file is given or the file yields no segments.
    #[serde(default = "default_namespace")]
    pub default_namespace: Vec<String>,
    #[serde(default)]
    pub ignored_directories: Vec<String>,
    #[serde(default)]
    pub remove_fallback: RemoveFallback,
    #[serde(default)]
    pub open_ai: OpenAiConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenAiConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_translation_function() -> String {
    "t".to_string()
}

fn default_namespace() -> Vec<String> {
    ["components", "pages"].map(String::from).to_vec()
}

fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translation_file_paths: Vec::new(),
            translation_function: default_translation_function(),
            auto_translate_enabled: false,
            open_ai_api_key: String::new(),
            source_language_file: String::new(),
            language_file_languages: BTreeMap::new(),
            default_namespace: default_namespace(),
            ignored_directories: Vec::new(),
            remove_fallback: RemoveFallback::default(),
            open_ai: OpenAiConfig::default(),
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects a blank translation function, namespace segments that are
    /// empty or dotted, a source file that is not listed in
    /// `translationFilePaths`, and non-positive retry or timeout settings.
    pub fn validate(&self) -> Result<()> {
        if self.translation_function.trim().is_empty() {
            bail!("'translationFunction' must not be empty");
        }

        for segment in &self.default_namespace {
            if segment.is_empty() || segment.contains('.') {
                bail!(
                    "Invalid segment in 'defaultNamespace': \"{}\" (segments must be non-empty and contain no '.')",
                    segment
                );
            }
        }

        if !self.source_language_file.is_empty()
            && !self
                .translation_file_paths
                .iter()
                .any(|p| same_path(p, &self.source_language_file))
        {
            bail!(
                "'sourceLanguageFile' \"{}\" is not listed in 'translationFilePaths'",
                self.source_language_file
            );
        }

        if self.open_ai.max_retries == 0 {
            bail!("'openAi.maxRetries' must be at least 1");
        }
        if self.open_ai.timeout_secs == 0 {
            bail!("'openAi.timeoutSecs' must be at least 1");
        }

        Ok(())
    }
}

/// Compare two configured paths ignoring `./` prefixes and separator style.
pub fn same_path(a: &str, b: &str) -> bool {
    fn normalize(p: &str) -> String {
        let p = p.replace('\\', "/");
        p.trim_start_matches("./").to_string()
    }
    normalize(a) == normalize(b)
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Location of the config file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
