use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A candidate value is missing a field, has a field of the wrong
    /// primitive type, or carries an out-of-set enum tag.
    #[error("{shape} shape mismatch: {reason}")]
    ShapeMismatch { shape: &'static str, reason: String },

    /// The value is well-typed but fails an opt-in validation rule.
    #[error("{shape}.{field} rejected by policy: {reason}")]
    PolicyViolation {
        shape: &'static str,
        field: &'static str,
        reason: String,
    },

    #[error("unsupported filesystem entry: {0}")]
    UnsupportedEntry(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl SchemaError {
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. })
    }

    pub fn is_policy_violation(&self) -> bool {
        matches!(self, Self::PolicyViolation { .. })
    }
}

impl Serialize for SchemaError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_display_names_the_shape() {
        let err = SchemaError::ShapeMismatch {
            shape: "FileEntry",
            reason: "missing field `mtime`".to_string(),
        };
        assert_eq!(err.to_string(), "FileEntry shape mismatch: missing field `mtime`");
        assert!(err.is_shape_mismatch());
        assert!(!err.is_policy_violation());
    }

    #[test]
    fn error_serializes_as_its_message() {
        let err = SchemaError::PolicyViolation {
            shape: "FileEntry",
            field: "name",
            reason: "name is empty".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"FileEntry.name rejected by policy: name is empty\"");
    }
}
