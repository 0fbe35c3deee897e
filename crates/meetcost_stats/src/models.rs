// --- File: crates/meetcost_stats/src/models.rs ---

use serde::{Deserialize, Serialize};

pub use meetcost_common::models::{Attendee, CalendarEvent, EventDateTime};

/// Default minimum participant count for an event to count as a meeting.
pub const DEFAULT_MIN_ATTENDEES: u32 = 2;

/// Configuration for one engine invocation.
///
/// The default (`min_attendees = 2`, no participant, any time of day)
/// reproduces the plain "timed events with two or more people" statistic.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    /// Minimum participant count; an absent attendee list counts as 1.
    pub min_attendees: u32,
    /// Case-insensitive substring matched against attendee emails and names.
    pub specific_participant: Option<String>,
    /// Keep only events starting Mon–Fri, 09:00–17:59 local time.
    pub work_hours_only: bool,
    /// IANA zone for the work-hours rule. Without it the offset carried by
    /// each event's own timestamp is used.
    pub time_zone: Option<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            min_attendees: DEFAULT_MIN_ATTENDEES,
            specific_participant: None,
            work_hours_only: false,
            time_zone: None,
        }
    }
}

impl FilterOptions {
    pub fn with_min_attendees(mut self, min_attendees: u32) -> Self {
        self.min_attendees = min_attendees;
        self
    }

    pub fn with_participant(mut self, participant: impl Into<String>) -> Self {
        self.specific_participant = Some(participant.into());
        self
    }

    pub fn work_hours_only(mut self) -> Self {
        self.work_hours_only = true;
        self
    }

    pub fn with_time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }
}

/// Per-request filter changes; every field left out keeps its configured
/// value.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOverrides {
    pub min_attendees: Option<u32>,
    pub specific_participant: Option<String>,
    pub work_hours_only: Option<bool>,
    pub time_zone: Option<String>,
}

impl FilterOverrides {
    /// Overlays the given fields onto `base`.
    pub fn apply_to(self, base: FilterOptions) -> FilterOptions {
        FilterOptions {
            min_attendees: self.min_attendees.unwrap_or(base.min_attendees),
            specific_participant: self.specific_participant.or(base.specific_participant),
            work_hours_only: self.work_hours_only.unwrap_or(base.work_hours_only),
            time_zone: self.time_zone.or(base.time_zone),
        }
    }
}

/// Aggregate metrics for one reporting period.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub total_meetings: u64,
    pub total_hours: f64,
    /// Sum of meeting hours weighted by attendee count.
    pub total_people_hours: f64,
    pub average_duration_minutes: f64,
    /// Rounded mean over meetings with a recorded attendee list; 1 when none.
    pub average_attendees: u64,
    pub total_cost: f64,
    pub meetings_per_week: f64,
    pub hours_per_week: f64,
    pub period_days: f64,
}
