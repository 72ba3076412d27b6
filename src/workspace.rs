//! Project context shared by every operation.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::{
    config::{Config, load_config, same_path},
    keys::namespace_for,
    translate::infer_language,
};

/// A configured translation file with its resolved location and language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationFile {
    /// The path as written in `translationFilePaths`.
    pub configured: String,
    #[serde(skip)]
    pub path: PathBuf,
    pub language: Option<String>,
    pub is_source: bool,
}

/// Project root plus the configuration loaded for it.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    config: Config,
    config_path: Option<PathBuf>,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
            config_path: None,
        }
    }

    /// Load the workspace for `start_dir`.
    ///
    /// The root is the directory holding the config file, or `start_dir` when
    /// no config file was found.
    pub fn load(start_dir: &Path) -> Result<Self> {
        let loaded = load_config(start_dir)?;
        if !loaded.from_file() {
            debug!(start = %start_dir.display(), "no config file found, using defaults");
        }
        let root = loaded
            .path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| start_dir.to_path_buf());

        Ok(Self {
            root,
            config: loaded.config,
            config_path: loaded.path,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Resolve a path from the config or the command line against the root.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// All configured translation files, in configuration order.
    pub fn translation_files(&self) -> Vec<TranslationFile> {
        self.config
            .translation_file_paths
            .iter()
            .map(|configured| {
                let path = self.resolve(configured);
                TranslationFile {
                    language: self.language_of(configured),
                    is_source: self.is_source(configured),
                    configured: configured.clone(),
                    path,
                }
            })
            .collect()
    }

    /// Translation files with the source file moved to the front.
    pub fn files_source_first(&self) -> Vec<TranslationFile> {
        let mut files = self.translation_files();
        files.sort_by_key(|f| !f.is_source);
        files
    }

    /// Language code of the source file, when one is configured and its
    /// language is known.
    pub fn source_language(&self) -> Option<String> {
        self.translation_files()
            .into_iter()
            .find(|f| f.is_source)
            .and_then(|f| f.language)
    }

    /// Namespace segments for a key generated in `active_file`, falling back
    /// to `defaultNamespace`.
    pub fn namespace_for(&self, active_file: Option<&Path>) -> Vec<String> {
        let segments = active_file
            .map(|file| {
                namespace_for(
                    &self.resolve(file),
                    Some(&self.root),
                    &self.config.ignored_directories,
                )
            })
            .unwrap_or_default();

        if segments.is_empty() {
            self.config.default_namespace.clone()
        } else {
            segments
        }
    }

    fn is_source(&self, configured: &str) -> bool {
        !self.config.source_language_file.is_empty()
            && same_path(configured, &self.config.source_language_file)
    }

    fn language_of(&self, configured: &str) -> Option<String> {
        self.config
            .language_file_languages
            .iter()
            .find(|(file, _)| same_path(file, configured))
            .map(|(_, code)| code.clone())
            .filter(|code| !code.trim().is_empty())
            .or_else(|| infer_language(Path::new(configured)))
    }
}
