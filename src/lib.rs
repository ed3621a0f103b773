//! Shared file-listing and mail-message data contracts.

pub mod error;
pub mod models;
pub mod policy;
pub(crate) mod scope_path;
pub mod validation;

pub use error::{Result, SchemaError};
pub use models::email::{AttachmentInfo, EmailDetail, EmailSummary};
pub use models::file_entry::{DirectoryListing, EntryType, FileEntry};
pub use policy::ValidationPolicy;
pub use validation::{
    parse, parse_directory_listing, parse_email_detail, parse_email_summary, parse_file_entry,
    parse_value, parse_value_with_policy, parse_with_policy, to_json, to_json_pretty, Shape,
};
