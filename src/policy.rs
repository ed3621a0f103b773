use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, SchemaError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// `FileEntry.name` must not be empty.
    pub require_non_empty_name: bool,
    /// `FileEntry.name` must not contain `/` or `\`.
    pub reject_path_separators: bool,
    /// `FileEntry.mtime` must parse as RFC 3339.
    pub require_rfc3339_mtime: bool,
    /// `EmailSummary.date` must parse as RFC 3339 or RFC 2822.
    pub require_parseable_date: bool,
    /// `id` and `threadId` must not be empty.
    pub require_non_empty_ids: bool,
}

impl ValidationPolicy {
    pub fn strict() -> Self {
        Self {
            require_non_empty_name: true,
            reject_path_separators: true,
            require_rfc3339_mtime: true,
            require_parseable_date: true,
            require_non_empty_ids: true,
        }
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        serde_json::from_str(data)
            .map_err(|e| SchemaError::Config(format!("invalid validation policy: {e}")))
    }

    /// Reads a policy file. A missing file yields the default policy.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        Self::from_json_str(&data).inspect_err(|e| {
            log::warn!("rejecting policy file {}: {e}", path.display());
        })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_nothing() {
        let policy = ValidationPolicy::default();
        assert!(!policy.require_non_empty_name);
        assert!(!policy.reject_path_separators);
        assert!(!policy.require_rfc3339_mtime);
        assert!(!policy.require_parseable_date);
        assert!(!policy.require_non_empty_ids);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let policy = ValidationPolicy::from_json_str(r#"{"require_rfc3339_mtime": true}"#).unwrap();
        assert!(policy.require_rfc3339_mtime);
        assert!(!policy.require_non_empty_ids);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = ValidationPolicy::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, SchemaError::Config(_)));
    }

    #[test]
    fn load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let policy = ValidationPolicy::load(dir.path().join("policy.json")).unwrap();
        assert_eq!(policy, ValidationPolicy::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.json");
        ValidationPolicy::strict().save(&path).unwrap();
        assert_eq!(ValidationPolicy::load(&path).unwrap(), ValidationPolicy::strict());
    }

    #[test]
    fn load_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.json");
        fs::write(&path, "[1, 2]").unwrap();
        let err = ValidationPolicy::load(&path).unwrap_err();
        assert!(matches!(err, SchemaError::Config(_)));
    }

    #[test]
    fn load_directory_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ValidationPolicy::load(dir.path()).unwrap_err();
        assert!(matches!(err, SchemaError::Io(_)));
    }
}
