use std::path::Path;

use serde::Serialize;
use tracing::warn;

use super::{FileResult, FileStatus, OpError, error_chain, generate_key, updated_count};
use crate::{
    keys::TranslationKey,
    store::TranslationStore,
    translate::{OpenAiTranslator, TranslateError, Translator},
    workspace::Workspace,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSummary {
    pub key: TranslationKey,
    pub replacement: String,
    pub files: Vec<FileResult>,
    pub updated_count: usize,
    pub warnings: Vec<String>,
}

impl AddSummary {
    /// Every file was written. Translation fallbacks and resets still count
    /// as written.
    pub fn is_success(&self) -> bool {
        self.updated_count > 0 && self.updated_count == self.files.len()
    }
}

/// The translator to use for `workspace`, or `None` when auto-translate is
/// disabled.
pub fn translator_for(
    workspace: &Workspace,
) -> Result<Option<OpenAiTranslator>, TranslateError> {
    let config = workspace.config();
    if !config.auto_translate_enabled {
        return Ok(None);
    }
    OpenAiTranslator::new(config.open_ai_api_key.clone(), &config.open_ai).map(Some)
}

/// Generate a key for `text` and write it into every translation file.
///
/// Non-source files with a known language different from the source language
/// receive a machine translation when a translator is given and
/// auto-translate is enabled. A rejected API key leaves that file and every
/// later target untouched; any other translation failure writes the source
/// text instead and records a warning.
pub async fn add_translation(
    workspace: &Workspace,
    store: &mut TranslationStore,
    translator: Option<&dyn Translator>,
    text: &str,
    active_file: Option<&Path>,
) -> Result<AddSummary, OpError> {
    let generated = generate_key(workspace, text, active_file)?;
    let files = workspace.translation_files();
    if files.is_empty() {
        return Err(OpError::NoTranslationFilesConfigured);
    }

    let translator = translator.filter(|_| workspace.config().auto_translate_enabled);
    let source_lang = workspace.source_language();
    let mut warnings = Vec::new();
    if translator.is_some() && source_lang.is_none() {
        warnings.push(
            "auto-translate skipped: no source language file with a known language is configured"
                .to_string(),
        );
    }

    let source_text = generated.text.as_str();
    let key = &generated.key;
    let mut results = Vec::with_capacity(files.len());
    let mut credentials_rejected = false;

    for file in &files {
        let target = match (translator, &source_lang, &file.language) {
            (Some(t), Some(from), Some(to)) if !file.is_source && !to.eq_ignore_ascii_case(from) => {
                Some((t, from, to))
            }
            _ => None,
        };

        let (value, translated) = match target {
            None => (source_text.to_string(), false),
            Some(_) if credentials_rejected => {
                results.push(FileResult::new(
                    file,
                    FileStatus::Skipped {
                        reason: "translation API key was rejected".to_string(),
                    },
                ));
                continue;
            }
            Some((t, from, to)) => match t.translate(source_text, from, to).await {
                Ok(translation) => (translation, true),
                Err(e) if e.is_auth() => {
                    credentials_rejected = true;
                    warn!(file = %file.configured, error = %e, "translation stopped");
                    warnings.push(format!(
                        "{}: {}, remaining translations skipped",
                        file.configured, e
                    ));
                    results.push(FileResult::new(
                        file,
                        FileStatus::Skipped {
                            reason: e.to_string(),
                        },
                    ));
                    continue;
                }
                Err(e) => {
                    warn!(file = %file.configured, language = %to, error = %e, "translation failed");
                    warnings.push(format!(
                        "translation to {} failed ({}), wrote the source text to {}",
                        to, e, file.configured
                    ));
                    (source_text.to_string(), false)
                }
            },
        };

        let status = match store.upsert(&file.path, key, &value) {
            Ok(outcome) => {
                if outcome.reset {
                    warnings.push(format!(
                        "{} did not contain a JSON object and was reset",
                        file.configured
                    ));
                }
                FileStatus::Written {
                    action: outcome.action,
                    value,
                    translated,
                    reset: outcome.reset,
                }
            }
            Err(e) => FileStatus::Failed {
                error: error_chain(&e),
            },
        };
        results.push(FileResult::new(file, status));
    }

    let updated_count = updated_count(&results);
    if updated_count == 0 {
        warnings.push("no translation file was updated".to_string());
    }

    Ok(AddSummary {
        key: generated.key,
        replacement: generated.replacement,
        files: results,
        updated_count,
        warnings,
    })
}
