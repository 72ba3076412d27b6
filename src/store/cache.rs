use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use serde_json::{Map, Value};
use tracing::trace;

use super::json_file::read_object;

/// File identity used to decide whether a cached parse is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Stamp {
    modified: Option<SystemTime>,
    len: u64,
}

impl Stamp {
    fn of(path: &Path) -> Option<Self> {
        let meta = fs::metadata(path).ok()?;
        Some(Self {
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }
}

#[derive(Debug)]
struct CachedFile {
    stamp: Stamp,
    /// `None` when the file could not be parsed as an object.
    root: Option<Map<String, Value>>,
}

/// Parsed translation files keyed by path, for read-only lookups.
///
/// Entries are reused only while the file's modification time and length are
/// unchanged.
#[derive(Debug, Default)]
pub struct LookupCache {
    entries: HashMap<PathBuf, CachedFile>,
}

impl LookupCache {
    pub fn get_or_load(&mut self, path: &Path) -> Option<&Map<String, Value>> {
        let Some(stamp) = Stamp::of(path) else {
            self.entries.remove(path);
            return None;
        };

        let fresh = matches!(self.entries.get(path), Some(cached) if cached.stamp == stamp);
        if !fresh {
            trace!(path = %path.display(), "loading translation file into cache");
            let root = read_object(path);
            self.entries
                .insert(path.to_path_buf(), CachedFile { stamp, root });
        }

        self.entries.get(path).and_then(|cached| cached.root.as_ref())
    }

    pub fn invalidate(&mut self, path: &Path) {
        self.entries.remove(path);
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }
}
