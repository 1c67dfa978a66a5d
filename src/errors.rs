use std::path::PathBuf;
use thiserror::Error;

/// Failures while listing a directory.
#[derive(Debug, Error)]
pub enum ListError {
    /// The target could not be opened as a directory. Always fatal.
    #[error("Failed to open directory {}: {source}", path.display())]
    OpenDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Enumeration broke off partway through. Always fatal.
    #[error("Failed to read directory entries in {}: {source}", path.display())]
    ReadEntry {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to resolve absolute path for {}: {source}", path.display())]
    ResolvePath {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read file or directory {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ListError {
    /// Short cause for inline display, without the path.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::OpenDir { source, .. }
            | Self::ReadEntry { source, .. }
            | Self::ResolvePath { source, .. }
            | Self::Stat { source, .. } => source.to_string(),
        }
    }
}
