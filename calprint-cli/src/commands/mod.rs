pub mod config;
pub mod render;
pub mod write;

use std::path::Path;

use anyhow::{Context, Result};
use calprint_core::{CalendarFile, SystemClock};
use tracing::debug;

use crate::events_file::parse_entries;

/// Read an events file and collect its events into a calendar bound to `destination`.
pub fn load_calendar(path: &Path, destination: &str, product_id: &str) -> Result<CalendarFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read events file at {}", path.display()))?;

    let entries = parse_entries(&content)
        .with_context(|| format!("Failed to parse events file at {}", path.display()))?;

    let mut calendar = CalendarFile::with_product_id(destination, product_id);

    for (index, entry) in entries.into_iter().enumerate() {
        let event = entry
            .into_event(&SystemClock)
            .with_context(|| format!("Event #{} in {}", index + 1, path.display()))?;
        calendar.add(event)?;
    }

    debug!(path = %path.display(), events = calendar.len(), "loaded events file");

    Ok(calendar)
}

/// `meetings.toml` -> `meetings.ics`
pub fn default_destination(path: &Path) -> Result<String> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .with_context(|| format!("Cannot derive an output name from {}", path.display()))?;

    Ok(format!("{}.ics", stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_destination() {
        assert_eq!(
            default_destination(Path::new("plans/meetings.toml")).unwrap(),
            "meetings.ics"
        );
        assert_eq!(default_destination(Path::new("holidays")).unwrap(), "holidays.ics");
        assert!(default_destination(Path::new("/")).is_err());
    }

    #[test]
    fn test_load_calendar_keeps_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.toml");
        std::fs::write(
            &path,
            r#"
[[event]]
summary = "First"
start = "2023-03-21T00:00:00-05:00"

[[event]]
summary = "Second"
start = "2023-01-01T00:00:00Z"
"#,
        )
        .unwrap();

        let calendar = load_calendar(&path, "events.ics", "-//Test//EN").unwrap();

        assert_eq!(calendar.len(), 2);
        assert_eq!(calendar.destination(), "events.ics");
        assert_eq!(calendar.events()[0].summary(), Some("First"));
        assert_eq!(calendar.events()[1].summary(), Some("Second"));
        assert!(calendar.render().contains("PRODID:-//Test//EN"));
    }

    #[test]
    fn test_load_calendar_reports_bad_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.toml");
        std::fs::write(&path, "[[event]]\nsummary = \"No start\"\n").unwrap();

        let err = load_calendar(&path, "events.ics", "-//Test//EN").unwrap_err();

        assert!(
            format!("{:#}", err).contains("Event #1"),
            "Unexpected error: {:#}",
            err
        );
    }
}
