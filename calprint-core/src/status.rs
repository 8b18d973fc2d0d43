//! Event status and transparency.
//!
//! The two values only change together, through `EventState::confirm` and
//! `EventState::cancel`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Tentative,
    Confirmed,
    Cancelled,
}

impl EventStatus {
    pub const fn as_ics_str(self) -> &'static str {
        match self {
            EventStatus::Tentative => "TENTATIVE",
            EventStatus::Confirmed => "CONFIRMED",
            EventStatus::Cancelled => "CANCELLED",
        }
    }
}

/// Event transparency (busy/free status)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transparency {
    /// Event blocks time on calendar
    Opaque,
    /// Event does not block time (shows as free)
    Transparent,
}

impl Transparency {
    pub const fn as_ics_str(self) -> &'static str {
        match self {
            Transparency::Opaque => "OPAQUE",
            Transparency::Transparent => "TRANSPARENT",
        }
    }
}

impl From<bool> for Transparency {
    fn from(transparent: bool) -> Self {
        if transparent {
            Transparency::Transparent
        } else {
            Transparency::Opaque
        }
    }
}

/// Status and transparency of one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventState {
    status: EventStatus,
    transparency: Transparency,
}

impl EventState {
    /// Initial state: `Tentative` when `tentative` is set, `Confirmed` otherwise.
    pub fn new(tentative: bool, transparent: bool) -> Self {
        let status = if tentative {
            EventStatus::Tentative
        } else {
            EventStatus::Confirmed
        };

        EventState {
            status,
            transparency: transparent.into(),
        }
    }

    pub const fn status(&self) -> EventStatus {
        self.status
    }

    pub const fn transparency(&self) -> Transparency {
        self.transparency
    }

    /// Confirmed events occupy busy time.
    pub fn confirm(&mut self) {
        self.status = EventStatus::Confirmed;
        self.transparency = Transparency::Opaque;
    }

    /// Cancelled events free up their time.
    pub fn cancel(&mut self) {
        self.status = EventStatus::Cancelled;
        self.transparency = Transparency::Transparent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = EventState::new(true, true);
        assert_eq!(state.status(), EventStatus::Tentative);
        assert_eq!(state.transparency(), Transparency::Transparent);

        let state = EventState::new(false, false);
        assert_eq!(state.status(), EventStatus::Confirmed);
        assert_eq!(state.transparency(), Transparency::Opaque);
    }

    #[test]
    fn test_confirm_makes_event_opaque() {
        let mut state = EventState::new(true, true);
        state.confirm();

        assert_eq!(state.status(), EventStatus::Confirmed);
        assert_eq!(state.transparency(), Transparency::Opaque);
    }

    #[test]
    fn test_cancel_makes_event_transparent() {
        let mut state = EventState::new(false, false);
        state.cancel();

        assert_eq!(state.status(), EventStatus::Cancelled);
        assert_eq!(state.transparency(), Transparency::Transparent);
    }

    #[test]
    fn test_cancelled_event_can_be_confirmed_again() {
        let mut state = EventState::new(false, false);
        state.cancel();
        state.confirm();

        assert_eq!(state.status(), EventStatus::Confirmed);
        assert_eq!(state.transparency(), Transparency::Opaque);
    }

    #[test]
    fn test_ics_names() {
        assert_eq!(EventStatus::Tentative.as_ics_str(), "TENTATIVE");
        assert_eq!(EventStatus::Confirmed.as_ics_str(), "CONFIRMED");
        assert_eq!(EventStatus::Cancelled.as_ics_str(), "CANCELLED");
        assert_eq!(Transparency::Opaque.as_ics_str(), "OPAQUE");
        assert_eq!(Transparency::Transparent.as_ics_str(), "TRANSPARENT");
    }
}
