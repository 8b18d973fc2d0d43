//! Persistence of finished calendar documents.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CalPrintError, CalPrintResult};

/// Directory used when no output directory is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "ics_calendar_files";

/// Somewhere a rendered calendar can be written to.
pub trait Sink {
    /// Store `contents` under `destination`, returning where it ended up.
    fn persist(&self, destination: &str, contents: &str) -> CalPrintResult<PathBuf>;
}

/// Writes each destination as a file inside one directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl Default for DirectorySink {
    fn default() -> Self {
        DirectorySink::new(DEFAULT_OUTPUT_DIR)
    }
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirectorySink { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path a destination name resolves to.
    pub fn path_for(&self, destination: &str) -> CalPrintResult<PathBuf> {
        validate_destination(destination)?;
        Ok(self.root.join(destination))
    }
}

impl Sink for DirectorySink {
    fn persist(&self, destination: &str, contents: &str) -> CalPrintResult<PathBuf> {
        let path = self.path_for(destination)?;

        std::fs::create_dir_all(&self.root)?;
        std::fs::write(&path, contents)?;

        debug!(path = %path.display(), bytes = contents.len(), "wrote calendar file");
        Ok(path)
    }
}

/// Destinations are plain file names; they may not climb out of the root.
fn validate_destination(destination: &str) -> CalPrintResult<()> {
    if destination.trim().is_empty() {
        return Err(CalPrintError::InvalidArgument(
            "destination file name is empty".into(),
        ));
    }

    if destination.contains(['/', '\\']) || destination == "." || destination == ".." {
        return Err(CalPrintError::InvalidArgument(format!(
            "invalid destination file name '{}'",
            destination
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persist_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("calendars");
        let sink = DirectorySink::new(&root);

        let path = sink.persist("test_file.ics", "BEGIN:VCALENDAR").unwrap();

        assert_eq!(path, root.join("test_file.ics"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "BEGIN:VCALENDAR");
    }

    #[test]
    fn test_persist_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());

        sink.persist("cal.ics", "first").unwrap();
        let path = sink.persist("cal.ics", "second").unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
    }

    #[test]
    fn test_persist_rejects_bad_destinations() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());

        for destination in ["", "  ", "..", "../escape.ics", "sub/cal.ics", "sub\\cal.ics"] {
            let result = sink.persist(destination, "x");
            assert!(
                matches!(result, Err(CalPrintError::InvalidArgument(_))),
                "'{}' should be rejected, got {:?}",
                destination,
                result
            );
        }
    }

    #[test]
    fn test_persist_surfaces_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the root directory should be.
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let sink = DirectorySink::new(&blocker);

        let result = sink.persist("cal.ics", "x");

        assert!(
            matches!(result, Err(CalPrintError::Io(_))),
            "Expected Io error, got {:?}",
            result
        );
    }

    #[test]
    fn test_default_root() {
        assert_eq!(DirectorySink::default().root(), Path::new(DEFAULT_OUTPUT_DIR));
    }
}
