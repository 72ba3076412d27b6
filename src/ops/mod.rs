//! The operations behind every command and tool.
//!
//! - `generate`: selected text → key and replacement call
//! - `add`: generate, then write the key into every translation file
//! - `remove`: replacement call → original text, key removed everywhere
//! - `lookup`: key → value in every translation file

mod add;
mod generate;
mod lookup;
mod remove;

use std::error::Error as StdError;

use serde::Serialize;
use thiserror::Error;

use crate::{keys::KeyError, store::KeyAction, workspace::TranslationFile};

pub use add::{AddSummary, add_translation, translator_for};
pub use generate::{GeneratedKey, generate_key};
pub use lookup::{FoundTranslation, LookupSummary, lookup_key};
pub use remove::{RemoveSummary, remove_translation};

#[derive(Debug, Error)]
pub enum OpError {
    #[error("no text selected")]
    NoSelection,
    #[error("selected text is already a translation call")]
    AlreadyTranslated,
    #[error("selected text is not a translation call like t('key')")]
    NotATranslationCall,
    #[error("no translation files configured, add paths to 'translationFilePaths'")]
    NoTranslationFilesConfigured,
    #[error(transparent)]
    Key(#[from] KeyError),
}

/// Outcome of an operation on one translation file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum FileStatus {
    Written {
        action: KeyAction,
        value: String,
        translated: bool,
        /// The file held invalid JSON and was replaced.
        reset: bool,
    },
    Removed {
        #[serde(rename = "matchedKey")]
        matched_key: String,
        value: Option<String>,
        fallback: bool,
    },
    NotFound,
    Skipped {
        reason: String,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResult {
    pub file: String,
    pub language: Option<String>,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileResult {
    fn new(file: &TranslationFile, status: FileStatus) -> Self {
        Self {
            file: file.configured.clone(),
            language: file.language.clone(),
            status,
        }
    }

    /// The file's content was changed.
    pub fn is_updated(&self) -> bool {
        matches!(
            self.status,
            FileStatus::Written { .. } | FileStatus::Removed { .. }
        )
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, FileStatus::Failed { .. })
    }
}

fn updated_count(files: &[FileResult]) -> usize {
    files.iter().filter(|f| f.is_updated()).count()
}

/// Render an error with its sources, `outer: inner: root`.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}
