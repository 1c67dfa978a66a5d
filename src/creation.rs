use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;

/// Where file creation times come from.
///
/// Only Windows gets `NativeCreationTime`; every other target uses
/// `NoCreationTime`. `PlatformCreationTime` picks one at build time.
pub trait CreationTimeSource {
    /// Creation time of the entry at `path`, if the platform records one.
    fn try_get_creation_time(&self, path: &Path, metadata: &Metadata) -> Option<SystemTime>;
}

/// Reads the creation time the OS stores alongside the file.
#[cfg(windows)]
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeCreationTime;

#[cfg(windows)]
impl CreationTimeSource for NativeCreationTime {
    fn try_get_creation_time(&self, path: &Path, metadata: &Metadata) -> Option<SystemTime> {
        match metadata.created() {
            Ok(t) => Some(t),
            Err(e) => {
                log::debug!("No creation time for {}: {e}", path.display());
                None
            }
        }
    }
}

/// Never reports a creation time.
#[cfg_attr(windows, allow(dead_code))]
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCreationTime;

impl CreationTimeSource for NoCreationTime {
    fn try_get_creation_time(&self, _path: &Path, _metadata: &Metadata) -> Option<SystemTime> {
        None
    }
}

#[cfg(windows)]
pub type PlatformCreationTime = NativeCreationTime;

#[cfg(not(windows))]
pub type PlatformCreationTime = NoCreationTime;
