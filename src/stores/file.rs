//! Key-value storage persisted as a single JSON object on disk.
//!
//! The whole file is rewritten on every `set_item`, so data is on disk as soon
//! as the call returns. Writes go to a sibling temp file that is renamed over
//! the store, so a reader sees either the old or the new contents.

use log::debug;
use serde_json::{Map, Value};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::KeyValueStore;
use crate::error::{Error, Result};

#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    items: Map<String, Value>,
}

impl JsonFileStorage {
    /// Opens the storage file at `path`. A missing file is an empty store; it is
    /// only created on the first write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_owned();
        let items = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => Map::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(err) if err.kind() == ErrorKind::NotFound => Map::new(),
            Err(err) => return Err(err.into()),
        };
        debug!("opened {} ({} keys)", path.display(), items.len());
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let text = serde_json::to_string_pretty(&self.items)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(text.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|err| Error::Io(err.error))?;
        debug!("wrote {}", self.path.display());
        Ok(())
    }
}

impl KeyValueStore for JsonFileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match self.items.get(key) {
            None => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(other) => Err(Error::Storage(format!(
                "value under '{}' in {} is not text: {}",
                key,
                self.path.display(),
                other
            ))),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_owned(), Value::String(value.to_owned()));
        self.flush()
    }
}
