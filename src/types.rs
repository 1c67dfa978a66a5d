use crate::errors::ListError;
use std::path::PathBuf;

/// Label shown in place of a size for directories.
pub const DIR_LABEL: &str = "FOLD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntryRecord {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    pub modified: String,
    pub created: String,
    pub size: u64,
    pub size_display: String,
}

/// An entry that was enumerated but could not be stat'ed.
#[derive(Debug)]
pub struct UnreadableEntry {
    pub name: String,
    pub error: ListError,
}

pub type EntryOutcome = Result<DirectoryEntryRecord, UnreadableEntry>;
