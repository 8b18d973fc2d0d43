//! A VCALENDAR document assembled from events.

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::error::{CalPrintError, CalPrintResult};
use crate::event::CalendarEvent;
use crate::ics::{DEFAULT_PRODUCT_ID, generate_calendar};
use crate::sink::Sink;

/// An ordered set of events bound to a destination file name.
///
/// Events keep their insertion order and no two share a UID.
#[derive(Debug, Clone)]
pub struct CalendarFile {
    destination: String,
    product_id: String,
    events: Vec<CalendarEvent>,
}

impl CalendarFile {
    pub fn new(destination: impl Into<String>) -> Self {
        Self::with_product_id(destination, DEFAULT_PRODUCT_ID)
    }

    pub fn with_product_id(destination: impl Into<String>, product_id: impl Into<String>) -> Self {
        CalendarFile {
            destination: destination.into(),
            product_id: product_id.into(),
            events: Vec::new(),
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Register an event. Fails if an event with the same UID is already present.
    pub fn add(&mut self, event: CalendarEvent) -> CalPrintResult<()> {
        let uid = event.uid();

        if self.events.iter().any(|e| e.uid() == uid) {
            warn!(%uid, destination = %self.destination, "calendar event already added");
            return Err(CalPrintError::Duplicate(uid));
        }

        debug!(%uid, destination = %self.destination, "adding calendar event");
        self.events.push(event);
        Ok(())
    }

    /// Encode the whole calendar, events in insertion order.
    pub fn render(&self) -> String {
        generate_calendar(&self.product_id, &self.events)
    }

    /// Write the rendered calendar through `sink`.
    ///
    /// Refuses to write an empty calendar. Errors from the sink are returned
    /// unchanged.
    pub fn flush(&self, sink: &dyn Sink) -> CalPrintResult<PathBuf> {
        if self.is_empty() {
            return Err(CalPrintError::NoEvents);
        }

        let path = sink.persist(&self.destination, &self.render())?;

        info!(
            path = %path.display(),
            events = self.events.len(),
            "calendar written"
        );

        Ok(path)
    }
}

impl fmt::Display for CalendarFile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render())
    }
}
