use std::{path::Path, sync::LazyLock};

use regex::Regex;

static LANGUAGE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z]{2}(-[a-zA-Z]{2})?$").expect("language code pattern is valid")
});

const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("en", "English"),
    ("tr", "Turkish"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("nl", "Dutch"),
    ("sv", "Swedish"),
    ("da", "Danish"),
    ("no", "Norwegian"),
    ("fi", "Finnish"),
    ("pl", "Polish"),
    ("cs", "Czech"),
    ("sk", "Slovak"),
    ("hu", "Hungarian"),
    ("ro", "Romanian"),
    ("bg", "Bulgarian"),
    ("hr", "Croatian"),
    ("sr", "Serbian"),
    ("sl", "Slovenian"),
    ("et", "Estonian"),
    ("lv", "Latvian"),
    ("lt", "Lithuanian"),
    ("uk", "Ukrainian"),
    ("be", "Belarusian"),
    ("mk", "Macedonian"),
    ("mt", "Maltese"),
    ("is", "Icelandic"),
    ("ga", "Irish"),
    ("cy", "Welsh"),
    ("eu", "Basque"),
    ("ca", "Catalan"),
    ("gl", "Galician"),
    ("pt-br", "Brazilian Portuguese"),
    ("zh-cn", "Simplified Chinese"),
    ("zh-tw", "Traditional Chinese"),
];

/// English name for a language code; unknown codes are upper-cased.
pub fn language_name(code: &str) -> String {
    let lower = code.to_lowercase();
    LANGUAGE_NAMES
        .iter()
        .find(|(c, _)| *c == lower)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| code.to_uppercase())
}

/// Guess a file's language from its path: a stem like `tr` or `pt-BR`,
/// otherwise the immediate parent directory (`locales/de/common.json`).
///
/// Only codes whose language is in the known table count, so folders like
/// `js` or `ui` are never taken for a language.
pub fn infer_language(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy();
    if is_known_code(&stem) {
        return Some(stem.to_string());
    }

    let parent = path.parent()?.file_name()?.to_string_lossy();
    is_known_code(&parent).then(|| parent.to_string())
}

/// `xx` or `xx-YY` where `xx` names a language in [`LANGUAGE_NAMES`].
fn is_known_code(candidate: &str) -> bool {
    if !LANGUAGE_CODE.is_match(candidate) {
        return false;
    }
    let base = candidate
        .split('-')
        .next()
        .unwrap_or(candidate)
        .to_lowercase();
    LANGUAGE_NAMES.iter().any(|(code, _)| *code == base)
}
