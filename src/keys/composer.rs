use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The generated tail segment was empty (the text had no usable characters).
    #[error("no key could be generated from the selected text")]
    EmptyKey,
    #[error("translation key '{0}' contains an empty segment")]
    EmptySegment(String),
}

/// A dotted translation key such as `components.pages.dashboard.saveChanges`.
///
/// Always holds at least one segment and never an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationKey {
    segments: Vec<String>,
}

impl TranslationKey {
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The trailing segment, used as the leaf key inside the JSON tree.
    pub fn last(&self) -> &str {
        &self.segments[self.segments.len() - 1]
    }

    pub fn as_dotted(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl Serialize for TranslationKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for TranslationKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(KeyError::EmptyKey);
        }
        let segments: Vec<String> = trimmed.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(KeyError::EmptySegment(trimmed.to_string()));
        }
        Ok(Self { segments })
    }
}

/// Join a namespace and a generated tail into a full key.
///
/// Empty namespace segments are skipped; an empty tail is rejected.
///
/// ```
/// use transkey::keys::compose;
///
/// let ns = ["components".to_string(), "pages".to_string()];
/// let key = compose(&ns, "saveChanges").unwrap();
/// assert_eq!(key.to_string(), "components.pages.saveChanges");
/// ```
pub fn compose(namespace: &[String], tail: &str) -> Result<TranslationKey, KeyError> {
    if tail.is_empty() {
        return Err(KeyError::EmptyKey);
    }

    let segments = namespace
        .iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .chain(std::iter::once(tail.to_string()))
        .collect();

    Ok(TranslationKey { segments })
}
