// --- File: crates/meetcost_common/src/models.rs ---

// Calendar entries as delivered by an event source. The shapes follow the
// Google Calendar v3 `Event` resource so that an `events.list` export can be
// deserialized directly; unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// One calendar entry.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<EventDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<EventDateTime>,
    /// `None` when the provider omitted the field entirely, which is not the
    /// same as an empty list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<Attendee>>,
}

impl CalendarEvent {
    /// A timed event between two RFC 3339 timestamps.
    pub fn timed(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(EventDateTime::timed(start)),
            end: Some(EventDateTime::timed(end)),
            ..Default::default()
        }
    }

    /// An all-day event between two `YYYY-MM-DD` dates.
    pub fn all_day(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(EventDateTime::all_day(start)),
            end: Some(EventDateTime::all_day(end)),
            ..Default::default()
        }
    }

    pub fn with_attendees(mut self, attendees: Vec<Attendee>) -> Self {
        self.attendees = Some(attendees);
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// The raw start timestamp, if the event has one.
    pub fn start_date_time(&self) -> Option<&str> {
        self.start.as_ref().and_then(|s| s.date_time.as_deref())
    }

    /// The raw end timestamp, if the event has one.
    pub fn end_date_time(&self) -> Option<&str> {
        self.end.as_ref().and_then(|e| e.date_time.as_deref())
    }
}

/// Start or end of an event: either a timestamp or a bare all-day date.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl EventDateTime {
    pub fn timed(date_time: impl Into<String>) -> Self {
        Self {
            date_time: Some(date_time.into()),
            ..Default::default()
        }
    }

    pub fn all_day(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            ..Default::default()
        }
    }
}

/// A participant record.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_status: Option<String>,
    #[serde(default, rename = "self", skip_serializing_if = "Option::is_none")]
    pub is_self: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<bool>,
}

impl Attendee {
    pub fn email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            ..Default::default()
        }
    }
}
