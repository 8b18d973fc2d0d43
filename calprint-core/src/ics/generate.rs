//! ICS generation.

use chrono::{DateTime, TimeZone, Utc};

use crate::event::CalendarEvent;

/// PRODID written when the configuration does not override it.
pub const DEFAULT_PRODUCT_ID: &str = "-//calprint//calprint 1.0//EN";

/// Produces a property value, or `None` to leave the line out.
type PropertyValue = fn(&CalendarEvent) -> Option<String>;

/// VEVENT properties in the order they are written.
const EVENT_PROPERTIES: &[(&str, PropertyValue)] = &[
    ("SUMMARY", summary),
    ("UID", uid),
    ("SEQUENCE", sequence),
    ("STATUS", status),
    ("TRANSP", transparency),
    ("DTSTART", dtstart),
    ("DTEND", dtend),
    ("DTSTAMP", dtstamp),
    ("CATEGORIES", categories),
    ("LOCATION", location),
    ("GEO", geo),
    ("DESCRIPTION", description),
];

fn summary(event: &CalendarEvent) -> Option<String> {
    event.summary().map(str::to_string)
}

fn uid(event: &CalendarEvent) -> Option<String> {
    Some(event.uid().hyphenated().to_string())
}

fn sequence(event: &CalendarEvent) -> Option<String> {
    Some(event.sequence().to_string())
}

fn status(event: &CalendarEvent) -> Option<String> {
    Some(event.status().as_ics_str().to_string())
}

fn transparency(event: &CalendarEvent) -> Option<String> {
    Some(event.transparency().as_ics_str().to_string())
}

fn dtstart(event: &CalendarEvent) -> Option<String> {
    Some(format_utc(event.start()))
}

fn dtend(event: &CalendarEvent) -> Option<String> {
    event.end().map(format_utc)
}

fn dtstamp(event: &CalendarEvent) -> Option<String> {
    Some(format_utc(event.created()))
}

fn categories(event: &CalendarEvent) -> Option<String> {
    join_categories(event.categories(), event.language())
}

fn location(event: &CalendarEvent) -> Option<String> {
    event.location().map(str::to_string)
}

fn geo(event: &CalendarEvent) -> Option<String> {
    event.geo().map(|geo| geo.to_string())
}

fn description(event: &CalendarEvent) -> Option<String> {
    event.description().map(escape_text)
}

/// Generate the `BEGIN:VEVENT` ... `END:VEVENT` block for one event.
pub fn generate_vevent(event: &CalendarEvent) -> String {
    let mut block = String::from("BEGIN:VEVENT");

    for (name, value) in EVENT_PROPERTIES {
        if let Some(value) = value(event) {
            block.push('\n');
            block.push_str(name);
            block.push(':');
            block.push_str(&value);
        }
    }

    block.push_str("\nEND:VEVENT");
    block
}

/// Generate a full VCALENDAR document around the given events.
pub fn generate_calendar<'a>(
    product_id: &str,
    events: impl IntoIterator<Item = &'a CalendarEvent>,
) -> String {
    let mut cal = String::new();
    cal.push_str("BEGIN:VCALENDAR\n");
    cal.push_str("VERSION:2.0\n");
    cal.push_str("PRODID:");
    cal.push_str(product_id);
    cal.push('\n');
    cal.push_str("CALSCALE:GREGORIAN\n");
    cal.push_str("METHOD:PUBLISH\n");

    for event in events {
        cal.push_str(&generate_vevent(event));
    }

    cal.push_str("\nEND:VCALENDAR");
    cal
}

/// Format an instant as an ICS UTC date-time (`YYYYMMDDTHHMMSSZ`).
///
/// The instant is converted to UTC first, so a 00:00 start at -05:00 is
/// written as `T050000Z`.
pub fn format_utc<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    dt.with_timezone(&Utc).format("%Y%m%dT%H%M%SZ").to_string()
}

/// Replace line breaks with the two-character `\n` escape.
pub fn escape_text(text: &str) -> String {
    text.replace("\r\n", "\\n").replace(['\r', '\n'], "\\n")
}

/// Categories in order, followed by the language tag.
/// Returns `None` when there is nothing to write.
pub fn join_categories(categories: &[String], language: Option<&str>) -> Option<String> {
    let all: Vec<&str> = categories
        .iter()
        .map(String::as_str)
        .chain(language)
        .collect();

    if all.is_empty() {
        None
    } else {
        Some(all.join(","))
    }
}
