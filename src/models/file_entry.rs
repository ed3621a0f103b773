use serde::{Deserialize, Serialize};
use std::fs::{self, Metadata};
use std::path::Path;

use crate::error::{Result, SchemaError};
use crate::scope_path;

/// Kind of filesystem node. Closed set: nothing else is accepted on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Directory,
}

impl EntryType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntryType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "file" => Ok(Self::File),
            "directory" => Ok(Self::Directory),
            _ => Err(format!("unknown entry type: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub size: u64,
    pub mtime: String,
}

impl FileEntry {
    pub fn new(
        name: impl Into<String>,
        entry_type: EntryType,
        size: u64,
        mtime: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            entry_type,
            size,
            mtime: mtime.into(),
        }
    }

    /// Builds an entry from metadata the caller already holds.
    ///
    /// Directories report a size of 0. `mtime` is RFC 3339 in UTC.
    pub fn from_metadata(name: impl Into<String>, metadata: &Metadata) -> Result<Self> {
        let name = name.into();
        let (entry_type, size) = if metadata.is_dir() {
            (EntryType::Directory, 0)
        } else if metadata.is_file() {
            (EntryType::File, metadata.len())
        } else {
            return Err(SchemaError::UnsupportedEntry(format!(
                "{name} is neither a regular file nor a directory"
            )));
        };

        let mtime = chrono::DateTime::<chrono::Utc>::from(metadata.modified()?).to_rfc3339();

        Ok(Self {
            name,
            entry_type,
            size,
            mtime,
        })
    }

    /// Stats a single path (following symlinks) and describes it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| {
                SchemaError::UnsupportedEntry(format!("path has no base name: {}", path.display()))
            })?;
        let metadata = fs::metadata(path)?;
        Self::from_metadata(name, &metadata)
    }

    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }

    pub fn is_directory(&self) -> bool {
        self.entry_type == EntryType::Directory
    }
}

/// Result of listing one directory. Entry order is whatever the producer
/// supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryListing {
    pub path: String,
    pub entries: Vec<FileEntry>,
}

impl DirectoryListing {
    pub fn new(path: impl Into<String>, entries: Vec<FileEntry>) -> Self {
        Self {
            path: path.into(),
            entries,
        }
    }

    pub fn empty(path: impl Into<String>) -> Self {
        Self::new(path, Vec::new())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn files(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter().filter(|e| e.is_file())
    }

    pub fn directories(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter().filter(|e| e.is_directory())
    }

    pub fn entry_path(&self, entry: &FileEntry) -> String {
        scope_path::join(&self.path, &entry.name)
    }

    /// Copy of the listing with directories first, then names compared
    /// case-insensitively.
    pub fn sorted_for_display(&self) -> Self {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| {
            b.is_directory()
                .cmp(&a.is_directory())
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        Self::new(self.path.clone(), entries)
    }
}
