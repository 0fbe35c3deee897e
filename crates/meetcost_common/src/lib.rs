// --- File: crates/meetcost_common/src/lib.rs ---

pub mod error; // Error handling
pub mod logging; // Logging utilities
pub mod models; // Calendar event shapes shared by sources and the engine
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    config_error, external_service_error, internal_error, unavailable,
    validation_error, Context, HttpStatusCode, MeetcostError,
};

pub use logging::{init, init_with_level, log_error, log_result};

pub use models::{Attendee, CalendarEvent, EventDateTime};

pub use services::{share_event_source, BoxFuture, BoxedError, EventSource, SharedEventSource};
