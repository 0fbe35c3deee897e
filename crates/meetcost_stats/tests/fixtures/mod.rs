//! Test fixtures for the statistics API tests
//!
//! Factory functions for configs and calendar events shared by the
//! integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use meetcost_common::{Attendee, CalendarEvent};
use meetcost_config::{AppConfig, StatsConfig};
use std::path::PathBuf;
use std::sync::Arc;

/// Config with a round hourly rate to keep expected costs readable
pub fn create_test_config() -> Arc<AppConfig> {
    Arc::new(AppConfig {
        stats: StatsConfig {
            hourly_rate: 100.0,
            ..StatsConfig::default()
        },
        ..AppConfig::default()
    })
}

/// Timed event starting `days_ago` days before `now` with `attendees` guests
pub fn create_meeting(
    now: DateTime<Utc>,
    days_ago: i64,
    duration_minutes: i64,
    attendees: usize,
) -> CalendarEvent {
    let start = now - Duration::days(days_ago);
    let end = start + Duration::minutes(duration_minutes);
    CalendarEvent::timed(start.to_rfc3339(), end.to_rfc3339()).with_attendees(
        (0..attendees)
            .map(|i| Attendee::email(format!("guest{}@example.com", i)))
            .collect(),
    )
}

/// Writes `events` as a Google `events.list` payload to a temp file
pub fn write_events_file(name: &str, events: &[CalendarEvent]) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "meetcost-api-{}-{}.json",
        name,
        Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ));
    let payload = serde_json::json!({ "kind": "calendar#events", "items": events });
    std::fs::write(&path, payload.to_string()).expect("Failed to write events file");
    path
}
