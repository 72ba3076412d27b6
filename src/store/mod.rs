//! JSON translation files: upsert, remove, and cached lookup.

mod cache;
mod document;
mod json_file;

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::keys::TranslationKey;

use cache::LookupCache;
pub use document::{KeyAction, RemoveFallback, Removed, insert_nested, lookup, remove_nested};
pub use json_file::{JsonFile, LoadState};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("translation file path does not resolve to a file: {}", path.display())]
    FileUnresolvable { path: PathBuf },
    #[error("failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize JSON")]
    Serialize(#[from] serde_json::Error),
    #[error("written content of {} could not be verified", path.display())]
    WriteVerificationFailed { path: PathBuf },
}

/// Result of writing one key into one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpsertOutcome {
    pub action: KeyAction,
    /// The previous content was invalid and has been replaced.
    pub reset: bool,
    /// The file did not exist before.
    pub created: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    Removed(Removed),
    NotFound,
}

/// A value found by [`TranslationStore::find`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundValue {
    pub path: PathBuf,
    pub value: String,
}

/// Entry point for all translation file access.
///
/// Writes always read the file fresh and invalidate its cache entry; only
/// [`get`](Self::get) and [`find`](Self::find) go through the cache.
#[derive(Debug, Default)]
pub struct TranslationStore {
    cache: LookupCache,
}

impl TranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value` in the file at `path`, creating the file and any
    /// intermediate objects when needed.
    pub fn upsert(
        &mut self,
        path: &Path,
        key: &TranslationKey,
        value: &str,
    ) -> Result<UpsertOutcome, StoreError> {
        let mut file = JsonFile::open(path)?;
        let created = *file.state() == LoadState::Missing;
        let reset = matches!(file.state(), LoadState::Invalid(_));

        let action = insert_nested(file.data_mut(), key, Value::String(value.to_string()));
        let saved = file.save();
        self.cache.invalidate(path);
        saved?;

        info!(
            path = %path.display(),
            key = %key,
            action = action.as_str(),
            "wrote translation"
        );
        Ok(UpsertOutcome {
            action,
            reset,
            created,
        })
    }

    /// Remove `key` from the file at `path`.
    ///
    /// Missing or unparseable files are left untouched and reported as
    /// [`RemoveOutcome::NotFound`].
    pub fn remove(
        &mut self,
        path: &Path,
        key: &TranslationKey,
        fallback: RemoveFallback,
    ) -> Result<RemoveOutcome, StoreError> {
        let mut file = JsonFile::open(path)?;
        if *file.state() != LoadState::Parsed {
            debug!(path = %path.display(), state = ?file.state(), "nothing to remove");
            return Ok(RemoveOutcome::NotFound);
        }

        let Some(removed) = remove_nested(file.data_mut(), key, fallback) else {
            debug!(path = %path.display(), key = %key, "key not present");
            return Ok(RemoveOutcome::NotFound);
        };

        let saved = file.save();
        self.cache.invalidate(path);
        saved?;

        info!(
            path = %path.display(),
            key = %key,
            matched = %removed.matched_key,
            "removed translation"
        );
        Ok(RemoveOutcome::Removed(removed))
    }

    /// Look up `key` in a single file.
    pub fn get(&mut self, path: &Path, key: &TranslationKey) -> Option<String> {
        let root = self.cache.get_or_load(path)?;
        lookup(root, key).map(str::to_string)
    }

    /// Look up `key` in every file, in order. Files that are missing,
    /// unparseable, or lack the key are skipped.
    pub fn find(&mut self, key: &TranslationKey, files: &[PathBuf]) -> Vec<FoundValue> {
        files
            .iter()
            .filter_map(|path| {
                self.get(path, key).map(|value| FoundValue {
                    path: path.clone(),
                    value,
                })
            })
            .collect()
    }
}
