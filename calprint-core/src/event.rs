//! Calendar event model.
//!
//! A `CalendarEvent` is built once through `EventBuilder`. After that only
//! its status and transparency can change, via `confirm` and `cancel`.

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use regex::Regex;
use tracing::debug;
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::error::{CalPrintError, CalPrintResult};
use crate::geo::GeoCoordinate;
use crate::ics::generate_vevent;
use crate::status::{EventState, EventStatus, Transparency};

static LANGUAGE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]{2,3}(-[A-Z]{2,3}(-[a-zA-Z]{4})?)?$").expect("language tag pattern")
});

/// Whether `tag` looks like `es`, `pt-BR` or `zh-CN-Hans`.
pub fn is_valid_language_tag(tag: &str) -> bool {
    LANGUAGE_TAG.is_match(tag)
}

/// A single calendar event (one VEVENT).
#[derive(Debug, Clone)]
pub struct CalendarEvent {
    uid: Uuid,
    summary: Option<String>,
    sequence: u32,
    state: EventState,
    start: DateTime<FixedOffset>,
    end: Option<DateTime<FixedOffset>>,
    created: DateTime<Utc>,
    language: Option<String>,
    categories: Vec<String>,
    location: Option<String>,
    geo: Option<GeoCoordinate>,
    description: Option<String>,
}

impl CalendarEvent {
    pub fn builder() -> EventBuilder {
        EventBuilder::default()
    }

    pub fn uid(&self) -> Uuid {
        self.uid
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Revision counter (SEQUENCE). Always 0 for events built here.
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    pub fn status(&self) -> EventStatus {
        self.state.status()
    }

    pub fn transparency(&self) -> Transparency {
        self.state.transparency()
    }

    pub fn is_transparent(&self) -> bool {
        self.transparency() == Transparency::Transparent
    }

    pub fn start(&self) -> &DateTime<FixedOffset> {
        &self.start
    }

    /// Exclusive end of the event.
    pub fn end(&self) -> Option<&DateTime<FixedOffset>> {
        self.end.as_ref()
    }

    /// When this event was built (DTSTAMP).
    pub fn created(&self) -> &DateTime<Utc> {
        &self.created
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn geo(&self) -> Option<GeoCoordinate> {
        self.geo
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Mark the event as confirmed. Confirmed events are OPAQUE.
    pub fn confirm(&mut self) {
        self.state.confirm();
    }

    /// Mark the event as cancelled. Cancelled events are TRANSPARENT.
    pub fn cancel(&mut self) {
        self.state.cancel();
    }

    /// Encode as a `BEGIN:VEVENT` ... `END:VEVENT` block.
    pub fn render(&self) -> String {
        generate_vevent(self)
    }
}

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Collects the fields of a new `CalendarEvent`.
#[derive(Debug, Clone, Default)]
pub struct EventBuilder {
    summary: Option<String>,
    start: Option<DateTime<FixedOffset>>,
    end: Option<DateTime<FixedOffset>>,
    tentative: bool,
    transparent: bool,
    language: Option<String>,
    categories: Vec<String>,
    location: Option<String>,
    geo: Option<GeoCoordinate>,
    description: Option<String>,
}

impl EventBuilder {
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Start of the event, in any time zone. Required.
    pub fn start<Tz: TimeZone>(mut self, start: DateTime<Tz>) -> Self {
        self.start = Some(start.fixed_offset());
        self
    }

    pub fn end<Tz: TimeZone>(mut self, end: DateTime<Tz>) -> Self {
        self.end = Some(end.fixed_offset());
        self
    }

    /// Build the event as TENTATIVE instead of CONFIRMED.
    pub fn tentative(mut self, tentative: bool) -> Self {
        self.tentative = tentative;
        self
    }

    pub fn transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    /// Language written as the last CATEGORIES entry.
    /// Tags that are not of the `xx`, `xx-YY` or `xx-YY-Zzzz` form are ignored.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn geo(mut self, geo: GeoCoordinate) -> Self {
        self.geo = Some(geo);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build the event, stamping it with the current wall-clock time.
    pub fn build(self) -> CalPrintResult<CalendarEvent> {
        self.build_with_clock(&SystemClock)
    }

    /// Build the event, taking the creation time from `clock`.
    pub fn build_with_clock(self, clock: &dyn Clock) -> CalPrintResult<CalendarEvent> {
        let start = self
            .start
            .ok_or_else(|| CalPrintError::InvalidArgument("event start is required".into()))?;

        let language = self.language.filter(|tag| {
            let valid = is_valid_language_tag(tag);
            if !valid {
                debug!(tag = %tag, "ignoring invalid language tag");
            }
            valid
        });

        Ok(CalendarEvent {
            uid: Uuid::new_v4(),
            summary: self.summary,
            sequence: 0,
            state: EventState::new(self.tentative, self.transparent),
            start,
            end: self.end,
            created: clock.now(),
            language,
            categories: self.categories,
            location: self.location,
            geo: self.geo,
            description: self.description,
        })
    }
}
