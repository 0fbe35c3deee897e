// --- File: crates/meetcost_stats/src/window.rs ---
//! Reporting-period windows.
//!
//! Events are fetched once for the widest window; every period toggle then
//! narrows the same list locally before the engine runs.

use crate::logic::parse_timestamp;
use crate::models::CalendarEvent;
use chrono::{DateTime, Duration, Utc};

/// Earliest start time that still belongs to the period.
pub fn period_cutoff(now: DateTime<Utc>, period_days: u32) -> DateTime<Utc> {
    now - Duration::days(i64::from(period_days))
}

/// Keeps the events that start in `[now - period_days, now)`.
///
/// Upcoming events are not time spent yet and fall outside every period.
/// Events without a parseable start timestamp are dropped; they could never
/// be meetings anyway.
pub fn events_in_period(
    events: &[CalendarEvent],
    period_days: u32,
    now: DateTime<Utc>,
) -> Vec<CalendarEvent> {
    let cutoff = period_cutoff(now, period_days);
    events
        .iter()
        .filter(|event| {
            event
                .start_date_time()
                .and_then(parse_timestamp)
                .map(|start| start.with_timezone(&Utc))
                .is_some_and(|start| start >= cutoff && start < now)
        })
        .cloned()
        .collect()
}
