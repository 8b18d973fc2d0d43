//! Event list files.
//!
//! An events file is TOML with one `[[event]]` table per event:
//!
//! ```toml
//! [[event]]
//! summary = "Spanish Club Meeting"
//! start = "2023-10-22T15:00:00-05:00"
//! end = "2023-10-22T17:00:00-05:00"
//! language = "es"
//! categories = ["EDUCATION", "BEGINNER"]
//! geo = [41.468729, -81.687597]
//! ```

use calprint_core::{CalPrintError, CalPrintResult, CalendarEvent, Clock, GeoCoordinate};
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EventsFile {
    #[serde(default, rename = "event")]
    pub events: Vec<EventEntry>,
}

/// Status change applied after the event is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusChange {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventEntry {
    pub summary: Option<String>,
    pub start: Option<DateTime<FixedOffset>>,
    pub end: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub tentative: bool,
    #[serde(default)]
    pub transparent: bool,
    pub language: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub location: Option<String>,
    pub geo: Option<[f64; 2]>,
    pub description: Option<String>,
    pub status: Option<StatusChange>,
}

impl EventEntry {
    pub fn into_event(self, clock: &dyn Clock) -> CalPrintResult<CalendarEvent> {
        let mut builder = CalendarEvent::builder()
            .tentative(self.tentative)
            .transparent(self.transparent)
            .categories(self.categories);

        if let Some(summary) = self.summary {
            builder = builder.summary(summary);
        }
        if let Some(start) = self.start {
            builder = builder.start(start);
        }
        if let Some(end) = self.end {
            builder = builder.end(end);
        }
        if let Some(language) = self.language {
            builder = builder.language(language);
        }
        if let Some(location) = self.location {
            builder = builder.location(location);
        }
        if let Some([latitude, longitude]) = self.geo {
            builder = builder.geo(GeoCoordinate::new(latitude, longitude));
        }
        if let Some(description) = self.description {
            builder = builder.description(description);
        }

        let mut event = builder.build_with_clock(clock)?;

        match self.status {
            Some(StatusChange::Confirmed) => event.confirm(),
            Some(StatusChange::Cancelled) => event.cancel(),
            None => {}
        }

        Ok(event)
    }
}

/// Parse an events file into entries without building them.
pub fn parse_entries(content: &str) -> CalPrintResult<Vec<EventEntry>> {
    let file: EventsFile =
        toml::from_str(content).map_err(|e| CalPrintError::EventFile(e.to_string()))?;
    Ok(file.events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calprint_core::{EventStatus, FixedClock, Transparency};
    use chrono::{TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2023, 10, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_parse_full_entry() {
        let content = r#"
[[event]]
summary = "Spanish Club Meeting"
start = "2023-10-22T15:00:00-05:00"
end = "2023-10-22T17:00:00-05:00"
language = "es"
categories = ["EDUCATION", "BEGINNER"]
location = "Room 101"
geo = [41.46872864522275, -81.68759660569253]
description = """
Bring a notebook
and a pen"""
"#;

        let entries = parse_entries(content).unwrap();
        assert_eq!(entries.len(), 1);

        let event = entries.into_iter().next().unwrap().into_event(&clock()).unwrap();
        let ics = event.render();

        assert!(ics.contains("\nSUMMARY:Spanish Club Meeting\n"), "ICS:\n{}", ics);
        assert!(ics.contains("\nDTSTART:20231022T200000Z\n"), "ICS:\n{}", ics);
        assert!(ics.contains("\nDTEND:20231022T220000Z\n"), "ICS:\n{}", ics);
        assert!(ics.contains("\nDTSTAMP:20231001T000000Z\n"), "ICS:\n{}", ics);
        assert!(ics.contains("\nCATEGORIES:EDUCATION,BEGINNER,es\n"), "ICS:\n{}", ics);
        assert!(ics.contains("\nGEO:41.468729;-81.687597\n"), "ICS:\n{}", ics);
        assert!(
            ics.contains("\nDESCRIPTION:Bring a notebook\\nand a pen\n"),
            "ICS:\n{}",
            ics
        );
    }

    #[test]
    fn test_status_change_applied_after_build() {
        let content = r#"
[[event]]
summary = "Maybe"
start = "2023-03-21T00:00:00Z"
tentative = true
transparent = true
status = "confirmed"

[[event]]
summary = "Off"
start = "2023-03-22T00:00:00Z"
status = "cancelled"
"#;

        let events: Vec<CalendarEvent> = parse_entries(content)
            .unwrap()
            .into_iter()
            .map(|entry| entry.into_event(&clock()).unwrap())
            .collect();

        assert_eq!(events[0].status(), EventStatus::Confirmed);
        assert_eq!(events[0].transparency(), Transparency::Opaque);
        assert_eq!(events[1].status(), EventStatus::Cancelled);
        assert_eq!(events[1].transparency(), Transparency::Transparent);
    }

    #[test]
    fn test_missing_start_is_invalid_argument() {
        let entries = parse_entries("[[event]]\nsummary = \"No start\"\n").unwrap();
        let result = entries.into_iter().next().unwrap().into_event(&clock());

        assert!(
            matches!(result, Err(CalPrintError::InvalidArgument(_))),
            "got {:?}",
            result
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = parse_entries("[[event]]\nstart = \"2023-03-21T00:00:00Z\"\nrrule = \"FREQ=DAILY\"\n");
        assert!(matches!(result, Err(CalPrintError::EventFile(_))), "got {:?}", result);
    }

    #[test]
    fn test_empty_file_has_no_entries() {
        assert!(parse_entries("").unwrap().is_empty());
    }
}
