use std::path::PathBuf;

use serde::Serialize;

use super::OpError;
use crate::{
    keys::{TranslationKey, extract_key},
    store::TranslationStore,
    workspace::Workspace,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundTranslation {
    pub file: String,
    pub language: Option<String>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupSummary {
    pub key: TranslationKey,
    /// One entry per file holding the key, source file first.
    pub translations: Vec<FoundTranslation>,
    pub files_searched: usize,
}

/// Find the values stored for a key, given either as a bare dotted key or as
/// a call like `t('key')`.
pub fn lookup_key(
    workspace: &Workspace,
    store: &mut TranslationStore,
    input: &str,
) -> Result<LookupSummary, OpError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(OpError::NoSelection);
    }
    let key: TranslationKey = extract_key(input).unwrap_or(input).parse()?;

    let files = workspace.files_source_first();
    if files.is_empty() {
        return Err(OpError::NoTranslationFilesConfigured);
    }

    let paths: Vec<PathBuf> = files.iter().map(|f| f.path.clone()).collect();
    let translations = store
        .find(&key, &paths)
        .into_iter()
        .filter_map(|found| {
            let file = files.iter().find(|f| f.path == found.path)?;
            Some(FoundTranslation {
                file: file.configured.clone(),
                language: file.language.clone(),
                value: found.value,
            })
        })
        .collect();

    Ok(LookupSummary {
        key,
        translations,
        files_searched: files.len(),
    })
}
