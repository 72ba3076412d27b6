//! In-memory operations on a parsed translation tree.
//!
//! Keys are walked segment by segment; every step matches on
//! [`Value::Object`] / [`Value::String`] explicitly.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::keys::TranslationKey;

/// Action taken on a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyAction {
    Added,
    Updated,
}

impl KeyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyAction::Added => "added",
            KeyAction::Updated => "updated",
        }
    }
}

/// How a removal proceeds when the exact leaf key is missing.
///
/// Applied only to the direct children of the object the key's parent path
/// resolves to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
#[value(rename_all = "camelCase")]
pub enum RemoveFallback {
    /// Only the exact key is removed.
    Off,
    /// The first sibling whose name equals the leaf ignoring case.
    #[default]
    IgnoreCase,
    /// The first sibling whose name contains the leaf ignoring case, or whose
    /// string value contains it. Can match unrelated keys.
    Contains,
}

/// A value taken out of the tree by [`remove_nested`].
#[derive(Debug, Clone, PartialEq)]
pub struct Removed {
    /// The leaf key that was actually deleted.
    pub matched_key: String,
    pub value: Value,
    /// True when the leaf was found through a [`RemoveFallback`] strategy.
    pub fallback: bool,
}

impl Removed {
    pub fn text(&self) -> Option<&str> {
        self.value.as_str()
    }
}

/// Set `value` at `key`, creating intermediate objects as needed.
///
/// Intermediate values that are not objects are replaced by empty objects.
pub fn insert_nested(root: &mut Map<String, Value>, key: &TranslationKey, value: Value) -> KeyAction {
    insert_at(root, key.segments(), value)
}

fn insert_at(map: &mut Map<String, Value>, path: &[String], value: Value) -> KeyAction {
    match path {
        [] => KeyAction::Added,
        [last] => {
            let action = match map.get(last.as_str()) {
                Some(Value::Object(children)) => {
                    warn!(
                        key = %last,
                        children = children.len(),
                        "replacing a nested object with a string value"
                    );
                    KeyAction::Updated
                }
                Some(_) => KeyAction::Updated,
                None => KeyAction::Added,
            };
            map.insert(last.clone(), value);
            action
        }
        [head, rest @ ..] => {
            let next = map
                .entry(head.clone())
                .or_insert_with(|| Value::Object(Map::new()));

            if !next.is_object() {
                debug!(segment = %head, "replacing non-object value with an object");
                *next = Value::Object(Map::new());
            }

            let Value::Object(inner) = next else {
                unreachable!("segment was just replaced with an object");
            };
            insert_at(inner, rest, value)
        }
    }
}

/// Remove `key` from the tree.
///
/// Objects on the key's path that become empty are pruned bottom-up; the
/// root itself is kept. Returns `None` when nothing was removed.
pub fn remove_nested(
    root: &mut Map<String, Value>,
    key: &TranslationKey,
    fallback: RemoveFallback,
) -> Option<Removed> {
    remove_at(root, key.segments(), fallback)
}

fn remove_at(map: &mut Map<String, Value>, path: &[String], fallback: RemoveFallback) -> Option<Removed> {
    match path {
        [] => None,
        [last] => remove_leaf(map, last, fallback),
        [head, rest @ ..] => {
            let Some(Value::Object(child)) = map.get_mut(head.as_str()) else {
                return None;
            };
            let removed = remove_at(child, rest, fallback)?;
            if child.is_empty() {
                map.shift_remove(head.as_str());
            }
            Some(removed)
        }
    }
}

fn remove_leaf(map: &mut Map<String, Value>, leaf: &str, fallback: RemoveFallback) -> Option<Removed> {
    if let Some(value) = map.shift_remove(leaf) {
        return Some(Removed {
            matched_key: leaf.to_string(),
            value,
            fallback: false,
        });
    }

    let needle = leaf.to_lowercase();
    let matched = match fallback {
        RemoveFallback::Off => None,
        RemoveFallback::IgnoreCase => map.keys().find(|k| k.to_lowercase() == needle).cloned(),
        RemoveFallback::Contains => map
            .iter()
            .find(|(k, v)| {
                k.to_lowercase().contains(&needle)
                    || matches!(v, Value::String(s) if s.to_lowercase().contains(&needle))
            })
            .map(|(k, _)| k.clone()),
    }?;

    let value = map.shift_remove(&matched)?;
    warn!(
        requested = %leaf,
        matched = %matched,
        strategy = ?fallback,
        "exact key not found, removed a fallback match"
    );
    Some(Removed {
        matched_key: matched,
        value,
        fallback: true,
    })
}

/// Look up the string stored under `key`.
///
/// Tries, in order: the exact nested path, a flat entry named after the whole
/// dotted key, and a walk that matches each segment ignoring case.
pub fn lookup<'a>(root: &'a Map<String, Value>, key: &TranslationKey) -> Option<&'a str> {
    lookup_exact(root, key.segments())
        .or_else(|| root.get(&key.as_dotted()).and_then(Value::as_str))
        .or_else(|| lookup_ignore_case(root, key.segments()))
}

fn lookup_exact<'a>(root: &'a Map<String, Value>, segments: &[String]) -> Option<&'a str> {
    let (last, parents) = segments.split_last()?;
    let mut current = root;
    for segment in parents {
        match current.get(segment.as_str()) {
            Some(Value::Object(next)) => current = next,
            _ => return None,
        }
    }
    current.get(last.as_str()).and_then(Value::as_str)
}

fn lookup_ignore_case<'a>(root: &'a Map<String, Value>, segments: &[String]) -> Option<&'a str> {
    let (last, parents) = segments.split_last()?;
    let mut current = root;
    for segment in parents {
        current = child_object(current, segment)?;
    }
    leaf_string(current, last)
}

fn child_object<'a>(map: &'a Map<String, Value>, segment: &str) -> Option<&'a Map<String, Value>> {
    if let Some(Value::Object(next)) = map.get(segment) {
        return Some(next);
    }
    let needle = segment.to_lowercase();
    map.iter().find_map(|(k, v)| match v {
        Value::Object(next) if k.to_lowercase() == needle => Some(next),
        _ => None,
    })
}

fn leaf_string<'a>(map: &'a Map<String, Value>, segment: &str) -> Option<&'a str> {
    if let Some(Value::String(s)) = map.get(segment) {
        return Some(s);
    }
    let needle = segment.to_lowercase();
    map.iter().find_map(|(k, v)| match v {
        Value::String(s) if k.to_lowercase() == needle => Some(s.as_str()),
        _ => None,
    })
}
