use crate::creation::CreationTimeSource;
use crate::errors::ListError;
use crate::size::format_bytes;
use crate::timestamp::{MISSING, format_system_time};
use crate::types::{DIR_LABEL, DirectoryEntryRecord, EntryOutcome, UnreadableEntry};
use std::ffi::OsStr;
use std::fs::{self, Metadata};
use std::path::Path;

/// Read the immediate children of `dir`, in the order the OS returns them.
///
/// Failing to open or enumerate `dir` is an error for the whole listing.
/// Failing to stat a single child only marks that child as unreadable.
pub fn read_entries(
    dir: &Path,
    creation: &impl CreationTimeSource,
) -> Result<Vec<EntryOutcome>, ListError> {
    log::debug!("Listing {}", dir.display());

    let entries = fs::read_dir(dir).map_err(|source| ListError::OpenDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut outcomes = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ListError::ReadEntry {
            path: dir.to_path_buf(),
            source,
        })?;
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy().to_string();

        let outcome = match read_entry(dir, &file_name, &name, creation) {
            Ok(record) => Ok(record),
            Err(error) => Err(UnreadableEntry { name, error }),
        };
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

// `file_name` is the raw OS name used for the path; `name` is only for display
fn read_entry(
    dir: &Path,
    file_name: &OsStr,
    name: &str,
    creation: &impl CreationTimeSource,
) -> Result<DirectoryEntryRecord, ListError> {
    let joined = dir.join(file_name);
    let path = std::path::absolute(&joined).map_err(|source| ListError::ResolvePath {
        path: joined.clone(),
        source,
    })?;

    // Follows symlinks, so a dangling link fails here
    let metadata = fs::metadata(&path).map_err(|source| ListError::Stat {
        path: path.clone(),
        source,
    })?;

    let is_dir = determine_type(&metadata);

    let modified = metadata
        .modified()
        .map_or_else(|_| MISSING.to_string(), format_system_time);
    let created = creation
        .try_get_creation_time(&path, &metadata)
        .map_or_else(|| MISSING.to_string(), format_system_time);

    let size = metadata.len();
    let size_display = if is_dir {
        DIR_LABEL.to_string()
    } else {
        format_bytes(size)
    };

    log::debug!("  {name}: dir={is_dir} size={size}");

    Ok(DirectoryEntryRecord {
        path,
        name: name.to_string(),
        is_dir,
        modified,
        created,
        size,
        size_display,
    })
}

/// Directories are `true`. Regular files, devices, sockets and fifos are all `false`.
#[must_use]
pub fn determine_type(metadata: &Metadata) -> bool {
    metadata.file_type().is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creation::NoCreationTime;
    use std::collections::BTreeSet;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime};

    struct FixedCreation(SystemTime);

    impl CreationTimeSource for FixedCreation {
        fn try_get_creation_time(&self, _path: &Path, _metadata: &Metadata) -> Option<SystemTime> {
            Some(self.0)
        }
    }

    fn records(outcomes: Vec<EntryOutcome>) -> Vec<DirectoryEntryRecord> {
        outcomes.into_iter().map(|o| o.unwrap()).collect()
    }

    #[test]
    fn test_one_record_per_child() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"a").unwrap();
        fs::write(dir.path().join("b.bin"), vec![0u8; 2048]).unwrap();
        fs::write(dir.path().join("empty"), b"").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::create_dir(dir.path().join("other")).unwrap();

        let outcomes = read_entries(dir.path(), &NoCreationTime).unwrap();
        assert_eq!(outcomes.len(), 5);

        let names: Vec<String> = records(outcomes).into_iter().map(|r| r.name).collect();
        let unique: BTreeSet<&str> = names.iter().map(String::as_str).collect();
        let expected: BTreeSet<&str> = ["a.txt", "b.bin", "empty", "sub", "other"].into();
        assert_eq!(unique, expected);

        // Same order the OS hands back, no sorting
        let os_order: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, os_order);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_name_is_readable() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let raw = OsStr::from_bytes(b"caf\xe9.txt");
        fs::write(dir.path().join(raw), b"latte").unwrap();

        let outcomes = read_entries(dir.path(), &NoCreationTime).unwrap();
        assert_eq!(outcomes.len(), 1);

        let rec = outcomes.into_iter().next().unwrap().unwrap();
        assert_eq!(rec.name, "caf\u{FFFD}.txt");
        assert_eq!(rec.size, 5);
        assert_eq!(rec.size_display, "5 B");
        assert_eq!(rec.path, dir.path().join(raw));
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let outcomes = read_entries(dir.path(), &NoCreationTime).unwrap();
        assert!(outcomes.is_empty());
    }

    #[test]
    fn test_record_fields() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("notes.txt"), vec![b'x'; 1536]).unwrap();

        let recs = records(read_entries(dir.path(), &NoCreationTime).unwrap());
        let docs = recs.iter().find(|r| r.name == "docs").unwrap();
        let notes = recs.iter().find(|r| r.name == "notes.txt").unwrap();

        assert!(docs.is_dir);
        assert_eq!(docs.size_display, DIR_LABEL);
        assert!(docs.path.is_absolute());
        assert!(docs.path.ends_with("docs"));

        assert!(!notes.is_dir);
        assert_eq!(notes.size, 1536);
        assert_eq!(notes.size_display, "1.5 KB");
        assert_eq!(notes.path, std::path::absolute(dir.path().join("notes.txt")).unwrap());

        let mtime = fs::metadata(dir.path().join("notes.txt")).unwrap().modified().unwrap();
        assert_eq!(notes.modified, format_system_time(mtime));
    }

    #[test]
    fn test_created_sentinel_without_native_support() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("f"), b"data").unwrap();
        fs::create_dir(dir.path().join("d")).unwrap();

        for rec in records(read_entries(dir.path(), &NoCreationTime).unwrap()) {
            assert_eq!(rec.created, MISSING);
        }
    }

    #[cfg(not(windows))]
    #[test]
    fn test_platform_source_reports_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("f"), b"data").unwrap();

        let source = crate::creation::PlatformCreationTime::default();
        let recs = records(read_entries(dir.path(), &source).unwrap());
        assert_eq!(recs[0].created, MISSING);
    }

    #[test]
    fn test_created_uses_source() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("f"), b"data").unwrap();

        let when = SystemTime::UNIX_EPOCH + Duration::from_secs(1_136_214_245);
        let recs = records(read_entries(dir.path(), &FixedCreation(when)).unwrap());
        assert_eq!(recs[0].created, format_system_time(when));
    }

    #[test]
    fn test_missing_directory_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = read_entries(&missing, &NoCreationTime).unwrap_err();
        assert!(matches!(err, ListError::OpenDir { ref path, .. } if *path == missing));
    }

    #[test]
    fn test_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, b"x").unwrap();
        let err = read_entries(&file, &NoCreationTime).unwrap_err();
        assert!(matches!(err, ListError::OpenDir { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ok.txt"), b"fine").unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("broken")).unwrap();

        let outcomes = read_entries(dir.path(), &NoCreationTime).unwrap();
        assert_eq!(outcomes.len(), 2);

        let bad: Vec<&UnreadableEntry> = outcomes.iter().filter_map(|o| o.as_ref().err()).collect();
        assert_eq!(bad.len(), 1);
        assert_eq!(bad[0].name, "broken");
        assert!(matches!(bad[0].error, ListError::Stat { .. }));

        assert!(outcomes.iter().any(|o| matches!(o, Ok(r) if r.name == "ok.txt")));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_directory_is_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        let recs = records(read_entries(dir.path(), &NoCreationTime).unwrap());
        let link = recs.iter().find(|r| r.name == "link").unwrap();
        assert!(link.is_dir);
        assert_eq!(link.path, PathBuf::from(dir.path()).join("link"));
    }
}
