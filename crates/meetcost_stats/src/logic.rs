// --- File: crates/meetcost_stats/src/logic.rs ---
use crate::models::{CalculationResult, CalendarEvent, FilterOptions};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Timelike, Weekday};
use chrono_tz::Tz;
use tracing::{debug, trace, warn};

/// Events lasting this long or longer are treated as blocking entries
/// (out of office, all-day holds), not meetings.
pub const MAX_MEETING_MINUTES: f64 = 480.0;

/// First hour of the working day, inclusive.
pub const WORK_DAY_START_HOUR: u32 = 9;
/// End of the working day, exclusive: 17:59 still counts, 18:00 does not.
pub const WORK_DAY_END_HOUR: u32 = 18;

/// A calendar event that passed every classification rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Meeting<'a> {
    pub event: &'a CalendarEvent,
    pub start: DateTime<FixedOffset>,
    pub duration_minutes: f64,
    /// Count used for filtering and people-hours; see [`inclusion_attendee_count`].
    pub attendee_count: usize,
}

/// Filter options resolved once per invocation.
#[derive(Debug, Clone)]
struct Criteria {
    min_attendees: usize,
    participant: Option<String>,
    work_hours_only: bool,
    time_zone: Option<Tz>,
}

impl Criteria {
    fn from_filters(filters: &FilterOptions) -> Self {
        let participant = filters
            .specific_participant
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase);

        let time_zone = filters
            .time_zone
            .as_deref()
            .and_then(|name| match name.parse::<Tz>() {
                Ok(tz) => Some(tz),
                Err(_) => {
                    warn!(
                        "Unknown time zone {:?}, using each event's own offset",
                        name
                    );
                    None
                }
            });

        Self {
            min_attendees: filters.min_attendees as usize,
            participant,
            work_hours_only: filters.work_hours_only,
            time_zone,
        }
    }
}

/// Parses a provider timestamp.
///
/// RFC 3339 is the expected form. A timestamp without an offset is read as
/// UTC. Anything else yields `None` and the caller drops the event.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Start and end of a meeting candidate.
///
/// `None` for all-day entries (bare dates), events missing either end, and
/// events whose timestamps do not parse.
pub fn event_span(event: &CalendarEvent) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
    let raw_start = event.start_date_time()?;
    let raw_end = event.end_date_time()?;

    match (parse_timestamp(raw_start), parse_timestamp(raw_end)) {
        (Some(start), Some(end)) => Some((start, end)),
        _ => {
            trace!(
                "Dropping event {:?}: unparseable timestamps {:?} - {:?}",
                event.id,
                raw_start,
                raw_end
            );
            None
        }
    }
}

/// Length of an interval in (fractional) minutes. Negative when `end`
/// precedes `start`.
pub fn duration_minutes(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> f64 {
    (end - start).num_milliseconds() as f64 / 60_000.0
}

/// Attendee count used to decide whether an event is a meeting.
///
/// A missing list counts as 1: the organizer is assumed present, so solo
/// blocks fall below the default minimum of 2. An explicit empty list
/// counts as 0.
pub fn inclusion_attendee_count(event: &CalendarEvent) -> usize {
    event.attendees.as_ref().map_or(1, Vec::len)
}

/// Attendee count used for the average-attendees statistic.
///
/// Only a non-empty, explicitly recorded list counts; missing or empty lists
/// are excluded from the average rather than defaulted.
pub fn recorded_attendee_count(event: &CalendarEvent) -> Option<usize> {
    match &event.attendees {
        Some(attendees) if !attendees.is_empty() => Some(attendees.len()),
        _ => None,
    }
}

/// True when any attendee's email or display name contains `term`.
/// `term` must already be lower-cased.
pub fn matches_participant(event: &CalendarEvent, term: &str) -> bool {
    event.attendees.iter().flatten().any(|attendee| {
        [&attendee.email, &attendee.display_name]
            .into_iter()
            .flatten()
            .any(|value| value.to_lowercase().contains(term))
    })
}

fn falls_in_work_week<D: Datelike + Timelike>(local: &D) -> bool {
    !matches!(local.weekday(), Weekday::Sat | Weekday::Sun)
        && (WORK_DAY_START_HOUR..WORK_DAY_END_HOUR).contains(&local.hour())
}

/// True when `start` is Monday–Friday in [09:00, 18:00) local time.
///
/// Local time is `time_zone` when given, otherwise the offset the timestamp
/// was written with.
pub fn is_within_work_hours(start: &DateTime<FixedOffset>, time_zone: Option<Tz>) -> bool {
    match time_zone {
        Some(tz) => falls_in_work_week(&start.with_timezone(&tz)),
        None => falls_in_work_week(start),
    }
}

fn classify_event<'a>(event: &'a CalendarEvent, criteria: &Criteria) -> Option<Meeting<'a>> {
    let (start, end) = event_span(event)?;

    let duration = duration_minutes(start, end);
    if duration <= 0.0 || duration >= MAX_MEETING_MINUTES {
        return None;
    }

    let attendee_count = inclusion_attendee_count(event);
    if attendee_count < criteria.min_attendees {
        return None;
    }

    if let Some(term) = &criteria.participant {
        if !matches_participant(event, term) {
            return None;
        }
    }

    if criteria.work_hours_only && !is_within_work_hours(&start, criteria.time_zone) {
        return None;
    }

    Some(Meeting {
        event,
        start,
        duration_minutes: duration,
        attendee_count,
    })
}

/// Applies every classification rule and returns the surviving meetings in
/// input order.
pub fn classify_meetings<'a>(
    events: &'a [CalendarEvent],
    filters: &FilterOptions,
) -> Vec<Meeting<'a>> {
    let criteria = Criteria::from_filters(filters);
    events
        .iter()
        .filter_map(|event| classify_event(event, &criteria))
        .collect()
}

/// Running sums over classified meetings. Addition is order-independent.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MeetingTotals {
    pub meetings: u64,
    pub minutes: f64,
    pub people_hours: f64,
    pub recorded_attendees: u64,
    pub meetings_with_attendees: u64,
}

impl MeetingTotals {
    pub fn add(&mut self, meeting: &Meeting<'_>) {
        self.meetings += 1;
        self.minutes += meeting.duration_minutes;
        self.people_hours += (meeting.duration_minutes / 60.0) * meeting.attendee_count as f64;

        if let Some(count) = recorded_attendee_count(meeting.event) {
            self.recorded_attendees += count as u64;
            self.meetings_with_attendees += 1;
        }
    }

    /// Derives the rate-based figures. Never fails: a zero or negative
    /// `period_days` produces IEEE-754 infinities/NaN in the weekly rates.
    pub fn into_result(self, hourly_rate: f64, period_days: f64) -> CalculationResult {
        let total_hours = self.minutes / 60.0;
        let weeks = period_days / 7.0;

        let average_duration_minutes = if self.meetings > 0 {
            self.minutes / self.meetings as f64
        } else {
            0.0
        };

        // Fallback of 1 when no meeting carries attendee data
        let average_attendees = if self.meetings_with_attendees > 0 {
            (self.recorded_attendees as f64 / self.meetings_with_attendees as f64).round() as u64
        } else {
            1
        };

        CalculationResult {
            total_meetings: self.meetings,
            total_hours,
            total_people_hours: self.people_hours,
            average_duration_minutes,
            average_attendees,
            total_cost: total_hours * hourly_rate,
            meetings_per_week: self.meetings as f64 / weeks,
            hours_per_week: total_hours / weeks,
            period_days,
        }
    }
}

/// Computes meeting statistics for one reporting period.
///
/// Pure and total: it reads only its arguments and always returns a fully
/// populated result. Events that are not meetings, or whose data is
/// malformed, are skipped silently.
pub fn compute_stats(
    events: &[CalendarEvent],
    hourly_rate: f64,
    period_days: f64,
    filters: &FilterOptions,
) -> CalculationResult {
    let meetings = classify_meetings(events, filters);

    let mut totals = MeetingTotals::default();
    for meeting in &meetings {
        totals.add(meeting);
    }

    let result = totals.into_result(hourly_rate, period_days);
    debug!(
        "Computed stats: {} of {} events are meetings, {:.2}h over {} days",
        result.total_meetings,
        events.len(),
        result.total_hours,
        period_days
    );
    result
}
