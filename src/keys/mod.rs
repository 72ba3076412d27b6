//! Translation key generation.
//!
//! - `generator`: selected text → camelCase segment
//! - `path`: active file → namespace segments
//! - `composer`: namespace + segment → [`TranslationKey`]
//! - `selection`: recognizing and formatting `fn('key')` calls

mod composer;
mod generator;
mod path;
mod selection;

pub use composer::{KeyError, TranslationKey, compose};
pub use generator::{MAX_SOURCE_CHARS, generate_segment};
pub use path::{STRUCTURAL_DIRECTORIES, namespace_for};
pub use selection::{extract_key, format_call, is_translation_call};
