// --- File: crates/meetcost_stats/src/source.rs ---
//! Event sources backed by exported calendar data.

use crate::models::CalendarEvent;
use crate::window::events_in_period;
use chrono::Utc;
use meetcost_common::services::{share_event_source, BoxFuture, EventSource, SharedEventSource};
use meetcost_common::{Context, MeetcostError};
use meetcost_config::AppConfig;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{debug, info};

// Either a Google Calendar `events.list` response or a bare array
#[derive(Deserialize)]
#[serde(untagged)]
enum EventsPayload {
    Bare(Vec<CalendarEvent>),
    List {
        #[serde(default)]
        items: Vec<CalendarEvent>,
    },
}

/// Parses an exported event list.
pub fn parse_events_json(raw: &str) -> Result<Vec<CalendarEvent>, MeetcostError> {
    let payload: EventsPayload = serde_json::from_str(raw)?;
    Ok(match payload {
        EventsPayload::Bare(events) => events,
        EventsPayload::List { items } => items,
    })
}

/// Reads events from a JSON file on every call.
///
/// An export may span any range; only events that started within the
/// requested look-back window are returned.
#[derive(Debug, Clone)]
pub struct JsonFileEventSource {
    path: PathBuf,
    name: String,
}

impl JsonFileEventSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("json-file:{}", path.display());
        Self { path, name }
    }

    async fn read_events(&self) -> Result<Vec<CalendarEvent>, MeetcostError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(MeetcostError::from(e));
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };
        parse_events_json(&raw)
    }
}

impl EventSource for JsonFileEventSource {
    type Error = MeetcostError;

    fn name(&self) -> &str {
        &self.name
    }

    fn list_events(&self, window_days: u32) -> BoxFuture<'_, Vec<CalendarEvent>, Self::Error> {
        Box::pin(async move {
            debug!(
                "Loading events for a {} day window from {}",
                window_days,
                self.path.display()
            );
            let exported = self.read_events().await?;
            let events = events_in_period(&exported, window_days, Utc::now());
            debug!(
                "Loaded {} of {} events from {}",
                events.len(),
                exported.len(),
                self.path.display()
            );
            Ok(events)
        })
    }
}

/// Builds the event source named in the configuration, if any.
pub fn source_from_config(config: &AppConfig) -> Option<SharedEventSource> {
    let path = config.calendar.events_file.as_ref()?;
    info!("Using calendar export {} as event source", path);
    Some(share_event_source(JsonFileEventSource::new(path)))
}
