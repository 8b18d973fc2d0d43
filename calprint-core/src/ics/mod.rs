//! ICS text generation.
//!
//! This module turns events and calendars into RFC 5545 style text.
//! Lines are separated by a bare `\n`.

mod generate;

pub use generate::{
    DEFAULT_PRODUCT_ID, escape_text, format_utc, generate_calendar, generate_vevent, join_categories,
};
