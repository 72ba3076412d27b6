use std::sync::LazyLock;

use regex::Regex;

use super::TranslationKey;

static CALL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\w+\(['"]([^'"]*)['"]\)"#).expect("translation call pattern is valid")
});

/// Whether the text already contains a translation call like `t('key')`.
pub fn is_translation_call(text: &str) -> bool {
    CALL_PATTERN.is_match(text)
}

/// Extract the raw key from the first `fn('key')` / `fn("key")` call in `text`.
///
/// Returns `None` when there is no call or the quoted key is blank.
pub fn extract_key(text: &str) -> Option<&str> {
    let captures = CALL_PATTERN.captures(text)?;
    let key = captures.get(1)?.as_str();
    if key.trim().is_empty() {
        None
    } else {
        Some(key)
    }
}

/// Format the replacement inserted in place of the selection.
pub fn format_call(function: &str, key: &TranslationKey) -> String {
    format!("{}('{}')", function, key)
}
