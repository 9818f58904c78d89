//! In-memory MIME table parsed from a mime-db style JSON document.
//!
//! Document shape: `{ "<mime>": { "extensions": ["ext", ...], ...ignored... }, ... }`.
//! Entries keep the order they appear in the document; extension lookups return the
//! first entry (in that order) that lists the extension.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{MimeDbError, Result};

/// One MIME type's record. Only `extensions` takes part in lookup; other fields
/// (charset, compressible, source, ...) are accepted and dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MimeRecord {
    /// Extensions without leading dot. Missing in the document means none.
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// Parsed MIME table with a precomputed extension index.
#[derive(Debug, Clone, Default)]
pub struct MimeTable {
    entries: Vec<(String, MimeRecord)>,
    by_extension: HashMap<String, usize>,
}

impl MimeTable {
    /// Builds a table from `(mime type, record)` pairs in definition order.
    pub fn from_entries(entries: Vec<(String, MimeRecord)>) -> Self {
        let mut by_extension = HashMap::new();
        for (idx, (_, record)) in entries.iter().enumerate() {
            for ext in &record.extensions {
                by_extension.entry(ext.clone()).or_insert(idx);
            }
        }
        Self {
            entries,
            by_extension,
        }
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Reads and parses a database file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|source| MimeDbError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_slice(&data)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// MIME type for an already-stripped extension (case-sensitive).
    pub fn lookup(&self, extension: &str) -> Option<&str> {
        let idx = *self.by_extension.get(extension)?;
        self.entries.get(idx).map(|(name, _)| name.as_str())
    }

    pub fn record(&self, mime_type: &str) -> Option<&MimeRecord> {
        self.entries
            .iter()
            .find(|(name, _)| name == mime_type)
            .map(|(_, record)| record)
    }

    /// Entries in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MimeRecord)> {
        self.entries.iter().map(|(name, record)| (name.as_str(), record))
    }
}

impl<'de> Deserialize<'de> for MimeTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(TableVisitor)
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = MimeTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of MIME type to record")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries: Vec<(String, MimeRecord)> =
            Vec::with_capacity(map.size_hint().unwrap_or(0));
        let mut positions: HashMap<String, usize> = HashMap::new();

        while let Some((name, record)) = map.next_entry::<String, MimeRecord>()? {
            // Repeated key: later value wins, earlier position is kept.
            match positions.get(&name).and_then(|&idx| entries.get_mut(idx)) {
                Some(slot) => slot.1 = record,
                None => {
                    positions.insert(name.clone(), entries.len());
                    entries.push((name, record));
                }
            }
        }

        Ok(MimeTable::from_entries(entries))
    }
}
