//! Text → camelCase key segment.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Maximum number of source characters considered when generating a segment.
pub const MAX_SOURCE_CHARS: usize = 30;

/// Generate a camelCase identifier segment from arbitrary UI text.
///
/// Diacritics are folded (`"İşlem"` → `"islem"`), the text is truncated to
/// [`MAX_SOURCE_CHARS`] characters and split into words on anything that is
/// not ASCII alphanumeric. Returns an empty string when no word survives;
/// [`compose`](super::compose) turns that into [`KeyError::EmptyKey`](super::KeyError::EmptyKey).
///
/// A leading digit is kept as is. Keys only appear as JSON object keys and
/// inside quoted calls like `t('errors.404NotFound')`, never as identifiers.
///
/// # Examples
///
/// ```
/// use transkey::keys::generate_segment;
///
/// assert_eq!(generate_segment("Save Changes"), "saveChanges");
/// assert_eq!(generate_segment("saveChanges"), "saveChanges");
/// assert_eq!(generate_segment("Çıkış yap!"), "cikisYap");
/// assert_eq!(generate_segment("404 Not Found"), "404NotFound");
/// assert_eq!(generate_segment("!!!"), "");
/// ```
pub fn generate_segment(text: &str) -> String {
    let folded: String = fold_diacritics(text).chars().take(MAX_SOURCE_CHARS).collect();
    camel_case(&words(&folded))
}

/// Convert a path component (directory name or file stem) to camelCase.
///
/// Unlike [`generate_segment`] there is no length cap.
pub(crate) fn camel_case_component(component: &str) -> String {
    camel_case(&words(&fold_diacritics(component)))
}

fn fold_diacritics(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.nfd().filter(|c| !is_combining_mark(*c)) {
        match fold_letter(c) {
            Some(base) => out.push_str(base),
            None => out.push(c),
        }
    }
    out
}

/// Latin letters that carry no combining mark after decomposition.
fn fold_letter(c: char) -> Option<&'static str> {
    let base = match c {
        'ı' => "i",
        'ø' => "o",
        'Ø' => "O",
        'ł' => "l",
        'Ł' => "L",
        'đ' => "d",
        'Đ' => "D",
        'ß' => "ss",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        _ => return None,
    };
    Some(base)
}

/// Split into words on non-alphanumeric runs and on an uppercase letter that
/// follows a lowercase letter or digit.
fn words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut boundary_allowed = false;

    for c in text.chars() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            boundary_allowed = false;
            continue;
        }

        if c.is_ascii_uppercase() && boundary_allowed && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        boundary_allowed = c.is_ascii_lowercase() || c.is_ascii_digit();
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn camel_case(words: &[String]) -> String {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        let lower = word.to_ascii_lowercase();
        if i == 0 {
            out.push_str(&lower);
        } else {
            let mut chars = lower.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}
