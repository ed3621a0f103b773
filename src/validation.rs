use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, SchemaError};
use crate::models::email::{EmailDetail, EmailSummary};
use crate::models::file_entry::{DirectoryListing, FileEntry};
use crate::policy::ValidationPolicy;
use crate::scope_path;

/// A top-level record that can be accepted or rejected as a whole.
pub trait Shape: Serialize + DeserializeOwned {
    /// Name used in error messages and logs.
    const NAME: &'static str;

    /// Applies policy rules beyond the structural typing.
    fn check(&self, policy: &ValidationPolicy) -> Result<()>;
}

fn violation(shape: &'static str, field: &'static str, reason: impl Into<String>) -> SchemaError {
    SchemaError::PolicyViolation {
        shape,
        field,
        reason: reason.into(),
    }
}

fn is_rfc3339(value: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(value).is_ok()
}

fn is_mail_date(value: &str) -> bool {
    is_rfc3339(value) || chrono::DateTime::parse_from_rfc2822(value).is_ok()
}

impl Shape for FileEntry {
    const NAME: &'static str = "FileEntry";

    fn check(&self, policy: &ValidationPolicy) -> Result<()> {
        if policy.require_non_empty_name && self.name.is_empty() {
            return Err(violation(Self::NAME, "name", "name is empty"));
        }
        if policy.reject_path_separators && !scope_path::is_base_name(&self.name) {
            return Err(violation(
                Self::NAME,
                "name",
                format!("name contains a path separator: {}", self.name),
            ));
        }
        if policy.require_rfc3339_mtime && !is_rfc3339(&self.mtime) {
            return Err(violation(
                Self::NAME,
                "mtime",
                format!("not an RFC 3339 timestamp: {}", self.mtime),
            ));
        }
        Ok(())
    }
}

impl Shape for DirectoryListing {
    const NAME: &'static str = "DirectoryListing";

    fn check(&self, policy: &ValidationPolicy) -> Result<()> {
        for (index, entry) in self.entries.iter().enumerate() {
            entry.check(policy).map_err(|e| match e {
                SchemaError::PolicyViolation { field, reason, .. } => violation(
                    Self::NAME,
                    "entries",
                    format!("entry {index} ({field}): {reason}"),
                ),
                other => other,
            })?;
        }
        Ok(())
    }
}

impl Shape for EmailSummary {
    const NAME: &'static str = "EmailSummary";

    fn check(&self, policy: &ValidationPolicy) -> Result<()> {
        if policy.require_non_empty_ids {
            if self.id.is_empty() {
                return Err(violation(Self::NAME, "id", "id is empty"));
            }
            if self.thread_id.is_empty() {
                return Err(violation(Self::NAME, "threadId", "threadId is empty"));
            }
        }
        if policy.require_parseable_date && !is_mail_date(&self.date) {
            return Err(violation(
                Self::NAME,
                "date",
                format!("not an RFC 3339 or RFC 2822 date: {}", self.date),
            ));
        }
        Ok(())
    }
}

impl Shape for EmailDetail {
    const NAME: &'static str = "EmailDetail";

    fn check(&self, policy: &ValidationPolicy) -> Result<()> {
        self.summary.check(policy).map_err(|e| match e {
            SchemaError::PolicyViolation { field, reason, .. } => {
                violation(Self::NAME, field, reason)
            }
            other => other,
        })
    }
}

fn decode_error<T: Shape>(err: serde_json::Error) -> SchemaError {
    if err.is_data() {
        log::debug!("rejected {} value: {err}", T::NAME);
        SchemaError::ShapeMismatch {
            shape: T::NAME,
            reason: err.to_string(),
        }
    } else {
        SchemaError::Serde(err)
    }
}

fn accept<T: Shape>(value: T, policy: &ValidationPolicy) -> Result<T> {
    value.check(policy).inspect_err(|e| {
        log::debug!("rejected {} value: {e}", T::NAME);
    })?;
    Ok(value)
}

/// Decodes JSON text. Malformed JSON is a `Serde` error; well-formed JSON
/// of the wrong shape is a `ShapeMismatch`.
pub fn parse_with_policy<T: Shape>(json: &str, policy: &ValidationPolicy) -> Result<T> {
    let value = serde_json::from_str::<T>(json).map_err(decode_error::<T>)?;
    accept(value, policy)
}

pub fn parse<T: Shape>(json: &str) -> Result<T> {
    parse_with_policy(json, &ValidationPolicy::default())
}

pub fn parse_value_with_policy<T: Shape>(
    value: serde_json::Value,
    policy: &ValidationPolicy,
) -> Result<T> {
    let value = serde_json::from_value::<T>(value).map_err(decode_error::<T>)?;
    accept(value, policy)
}

pub fn parse_value<T: Shape>(value: serde_json::Value) -> Result<T> {
    parse_value_with_policy(value, &ValidationPolicy::default())
}

pub fn parse_file_entry(json: &str) -> Result<FileEntry> {
    parse(json)
}

pub fn parse_directory_listing(json: &str) -> Result<DirectoryListing> {
    parse(json)
}

pub fn parse_email_summary(json: &str) -> Result<EmailSummary> {
    parse(json)
}

pub fn parse_email_detail(json: &str) -> Result<EmailDetail> {
    parse(json)
}

pub fn to_json<T: Shape>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn to_json_pretty<T: Shape>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
