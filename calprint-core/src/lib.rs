//! Core types for calprint.
//!
//! This crate models calendar events and serializes them into iCalendar
//! (RFC 5545) text:
//! - `CalendarEvent` and its `VEVENT` encoding
//! - `CalendarFile`, the `VCALENDAR` document that collects events
//! - `Sink` implementations that persist a finished document

pub mod calendar_file;
pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod geo;
pub mod ics;
pub mod sink;
pub mod status;

pub use calendar_file::CalendarFile;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CalPrintError, CalPrintResult};
pub use event::{CalendarEvent, EventBuilder};
pub use geo::GeoCoordinate;
pub use sink::{DirectorySink, Sink};
pub use status::{EventState, EventStatus, Transparency};
