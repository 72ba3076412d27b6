use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::StoreError;

/// What was found on disk when a translation file was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Missing,
    Empty,
    Parsed,
    /// Content that is not a JSON object; carries the reason.
    Invalid(String),
}

/// A translation file loaded for modification.
///
/// Missing, empty, and invalid files all start from an empty object. Saving
/// always writes pretty JSON with 2-space indentation and a trailing newline.
pub struct JsonFile {
    file_path: PathBuf,
    data: Map<String, Value>,
    state: LoadState,
}

impl JsonFile {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if path.is_dir() {
            return Err(StoreError::FileUnresolvable {
                path: path.to_path_buf(),
            });
        }

        let (data, state) = match fs::read(path) {
            Ok(bytes) => decode(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => (Map::new(), LoadState::Missing),
            Err(source) => {
                return Err(StoreError::Io {
                    action: "read",
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        if let LoadState::Invalid(reason) = &state {
            warn!(
                path = %path.display(),
                reason = %reason,
                "translation file is not a JSON object, starting from an empty object"
            );
        }

        Ok(Self {
            file_path: path.to_path_buf(),
            data,
            state,
        })
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.data
    }

    pub fn save(&self) -> Result<(), StoreError> {
        let content = render(&self.data)?;
        write_verified(&self.file_path, &content)
    }
}

/// Parse file content into a root object for read-only use.
///
/// Returns `None` when the content is blank or not a JSON object.
pub fn read_object(path: &Path) -> Option<Map<String, Value>> {
    let bytes = fs::read(path).ok()?;
    match decode(bytes) {
        (data, LoadState::Parsed) => Some(data),
        (_, state) => {
            debug!(path = %path.display(), ?state, "skipping unreadable translation file");
            None
        }
    }
}

fn decode(bytes: Vec<u8>) -> (Map<String, Value>, LoadState) {
    match String::from_utf8(bytes) {
        Ok(content) => parse_object(&content),
        Err(e) => (Map::new(), LoadState::Invalid(format!("not valid UTF-8: {}", e))),
    }
}

fn parse_object(content: &str) -> (Map<String, Value>, LoadState) {
    if content.trim().is_empty() {
        return (Map::new(), LoadState::Empty);
    }
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => (map, LoadState::Parsed),
        Ok(_) => (Map::new(), LoadState::Invalid("root is not an object".to_string())),
        Err(e) => (Map::new(), LoadState::Invalid(e.to_string())),
    }
}

fn render(data: &Map<String, Value>) -> Result<String, StoreError> {
    let content = serde_json::to_string_pretty(data)?;
    Ok(format!("{}\n", content))
}

/// Write `content` to `path` through a temp file in the same directory, then
/// read it back.
///
/// When the read-back differs, a direct write is attempted once and checked
/// again before giving up.
pub(crate) fn write_verified(path: &Path, content: &str) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|source| StoreError::Io {
        action: "create directory",
        path: dir.to_path_buf(),
        source,
    })?;

    if let Err(e) = replace_atomically(dir, path, content) {
        warn!(path = %path.display(), error = %e, "atomic replace failed, writing in place");
        write_direct(path, content)?;
    }

    if read_back_matches(path, content) {
        return Ok(());
    }

    warn!(path = %path.display(), "written content did not verify, retrying with a direct write");
    write_direct(path, content)?;
    if read_back_matches(path, content) {
        Ok(())
    } else {
        Err(StoreError::WriteVerificationFailed {
            path: path.to_path_buf(),
        })
    }
}

fn replace_atomically(dir: &Path, path: &Path, content: &str) -> io::Result<()> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;

    // Keep the existing file's permissions instead of the temp file's 0600.
    if let Ok(meta) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), meta.permissions())?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn write_direct(path: &Path, content: &str) -> Result<(), StoreError> {
    fs::write(path, content).map_err(|source| StoreError::Io {
        action: "write",
        path: path.to_path_buf(),
        source,
    })
}

fn read_back_matches(path: &Path, expected: &str) -> bool {
    fs::read_to_string(path).is_ok_and(|actual| actual == expected)
}
