pub mod email;
pub mod file_entry;
