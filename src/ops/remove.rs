use serde::Serialize;

use super::{FileResult, FileStatus, OpError, error_chain, updated_count};
use crate::{
    keys::{TranslationKey, extract_key},
    store::{RemoveOutcome, TranslationStore},
    workspace::Workspace,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveSummary {
    pub key: TranslationKey,
    /// Text that replaces the call: the stored value, or the key's last
    /// segment when no value was found.
    pub restored_text: String,
    /// A stored value was found for the key.
    pub found: bool,
    pub files: Vec<FileResult>,
    pub updated_count: usize,
    pub warnings: Vec<String>,
}

impl RemoveSummary {
    pub fn is_success(&self) -> bool {
        self.updated_count > 0 && !self.files.iter().any(FileResult::is_failed)
    }
}

/// Remove the key referenced by the call in `selection` from every
/// translation file and recover the text it stood for.
///
/// The source file is searched for the original value first.
pub fn remove_translation(
    workspace: &Workspace,
    store: &mut TranslationStore,
    selection: &str,
) -> Result<RemoveSummary, OpError> {
    let selection = selection.trim();
    if selection.is_empty() {
        return Err(OpError::NoSelection);
    }
    let key: TranslationKey = extract_key(selection)
        .ok_or(OpError::NotATranslationCall)?
        .parse()?;

    let ordered = workspace.files_source_first();
    if ordered.is_empty() {
        return Err(OpError::NoTranslationFilesConfigured);
    }
    let original = ordered.iter().find_map(|file| store.get(&file.path, &key));

    let fallback = workspace.config().remove_fallback;
    let mut removed_texts: Vec<(bool, String)> = Vec::new();
    let mut results = Vec::new();

    for file in workspace.translation_files() {
        let status = match store.remove(&file.path, &key, fallback) {
            Ok(RemoveOutcome::Removed(removed)) => {
                let value = removed.text().map(str::to_string);
                if let Some(text) = &value {
                    removed_texts.push((file.is_source, text.clone()));
                }
                FileStatus::Removed {
                    matched_key: removed.matched_key,
                    value,
                    fallback: removed.fallback,
                }
            }
            Ok(RemoveOutcome::NotFound) => FileStatus::NotFound,
            Err(e) => FileStatus::Failed {
                error: error_chain(&e),
            },
        };
        results.push(FileResult::new(&file, status));
    }

    // Values matched only through a removal fallback still beat the bare key segment.
    let recovered = original.or_else(|| {
        removed_texts
            .iter()
            .find(|(is_source, _)| *is_source)
            .or(removed_texts.first())
            .map(|(_, text)| text.clone())
    });

    let mut warnings = Vec::new();
    let updated_count = updated_count(&results);
    if updated_count == 0 {
        warnings.push(format!("key '{}' was not found in any translation file", key));
    }
    if recovered.is_none() {
        warnings.push(format!(
            "no stored text for '{}', restored the last key segment",
            key
        ));
    }

    Ok(RemoveSummary {
        found: recovered.is_some(),
        restored_text: recovered.unwrap_or_else(|| key.last().to_string()),
        key,
        files: results,
        updated_count,
        warnings,
    })
}
