use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use rusqlite::Connection;

use crate::db;

/// Durable key-value storage of whole serialized documents.
///
/// `get` never fails: an unreadable backend is reported as an absent value so
/// callers can fall back to their defaults.
pub trait RecordStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, document: &str) -> Result<(), StoreError>;
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &str) -> Result<Self, StoreError> {
        ensure_parent_dir(path)?;
        let conn = db::open_connection(path)?;
        log::debug!("opened record store at {}", path);
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = db::open_in_memory()?;
        Ok(Self { conn })
    }
}

impl RecordStore for SqliteStore {
    fn get(&self, key: &str) -> Option<String> {
        match db::get_document(&self.conn, key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("record store read of '{}' failed: {}", key, err);
                None
            }
        }
    }

    fn put(&mut self, key: &str, document: &str) -> Result<(), StoreError> {
        db::put_document(&self.conn, key, document)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.documents.get(key).cloned()
    }

    fn put(&mut self, key: &str, document: &str) -> Result<(), StoreError> {
        self.documents.insert(key.to_string(), document.to_string());
        Ok(())
    }
}

fn ensure_parent_dir(path: &str) -> Result<(), StoreError> {
    if let Some(parent) = std::path::Path::new(path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Db(rusqlite::Error),
    Json(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "I/O error: {}", err),
            StoreError::Db(err) => write!(f, "database error: {}", err),
            StoreError::Json(err) => write!(f, "document serialization error: {}", err),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            StoreError::Db(err) => Some(err),
            StoreError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        StoreError::Io(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        StoreError::Db(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        StoreError::Json(value)
    }
}
