use std::path::Path;

use serde::Serialize;

use super::OpError;
use crate::{
    keys::{TranslationKey, compose, format_call, generate_segment, is_translation_call},
    workspace::Workspace,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedKey {
    pub key: TranslationKey,
    /// The call that replaces the selection, e.g. `t('components.pages.save')`.
    pub replacement: String,
    /// The selection with surrounding whitespace removed; stored as the value.
    pub text: String,
}

/// Build the key and replacement call for `text` selected in `active_file`.
pub fn generate_key(
    workspace: &Workspace,
    text: &str,
    active_file: Option<&Path>,
) -> Result<GeneratedKey, OpError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(OpError::NoSelection);
    }
    if is_translation_call(text) {
        return Err(OpError::AlreadyTranslated);
    }

    let namespace = workspace.namespace_for(active_file);
    let key = compose(&namespace, &generate_segment(text))?;
    let replacement = format_call(&workspace.config().translation_function, &key);

    Ok(GeneratedKey {
        key,
        replacement,
        text: text.to_string(),
    })
}
