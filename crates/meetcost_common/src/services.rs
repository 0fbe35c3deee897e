// --- File: crates/meetcost_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! The statistics engine never fetches anything. Whoever calls it holds an
//! explicit [`EventSource`] handle and passes the materialized event list in.

use crate::models::CalendarEvent;
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.0)
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A provider of raw calendar events for one individual.
///
/// Implementations own authentication and pagination. Their failures are
/// reported to the caller and never reach the statistics engine.
pub trait EventSource: Send + Sync {
    /// Error type returned by the source.
    type Error: StdError + Send + Sync + 'static;

    /// Human-readable name used in logs and error messages.
    fn name(&self) -> &str;

    /// List the events of the last `window_days` days.
    fn list_events(&self, window_days: u32) -> BoxFuture<'_, Vec<CalendarEvent>, Self::Error>;
}

/// Shared, type-erased handle to an event source.
pub type SharedEventSource = Arc<dyn EventSource<Error = BoxedError>>;

/// Adapts any [`EventSource`] to the type-erased `BoxedError` form.
pub struct BoxedEventSource<S>(pub S);

impl<S> EventSource for BoxedEventSource<S>
where
    S: EventSource,
{
    type Error = BoxedError;

    fn name(&self) -> &str {
        self.0.name()
    }

    fn list_events(&self, window_days: u32) -> BoxFuture<'_, Vec<CalendarEvent>, Self::Error> {
        Box::pin(async move {
            self.0
                .list_events(window_days)
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }
}

/// Erase the concrete type of an event source.
pub fn share_event_source<S>(source: S) -> SharedEventSource
where
    S: EventSource + 'static,
{
    Arc::new(BoxedEventSource(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{internal_error, MeetcostError};

    struct FailingSource;

    impl EventSource for FailingSource {
        type Error = MeetcostError;

        fn name(&self) -> &str {
            "failing"
        }

        fn list_events(&self, _window_days: u32) -> BoxFuture<'_, Vec<CalendarEvent>, Self::Error> {
            Box::pin(async { Err(internal_error("connection refused")) })
        }
    }

    struct FixedSource(Vec<CalendarEvent>);

    impl EventSource for FixedSource {
        type Error = MeetcostError;

        fn name(&self) -> &str {
            "fixed"
        }

        fn list_events(&self, _window_days: u32) -> BoxFuture<'_, Vec<CalendarEvent>, Self::Error> {
            let events = self.0.clone();
            Box::pin(async move { Ok(events) })
        }
    }

    #[tokio::test]
    async fn test_shared_source_passes_events_through() {
        let source = share_event_source(FixedSource(vec![CalendarEvent::timed(
            "2025-05-06T10:00:00Z",
            "2025-05-06T11:00:00Z",
        )]));
        assert_eq!(source.name(), "fixed");
        let events = source.list_events(90).await.unwrap();
        assert_eq!(events.len(), 1);
    }

    #[tokio::test]
    async fn test_shared_source_boxes_errors() {
        let source = share_event_source(FailingSource);
        let err = source.list_events(90).await.unwrap_err();
        assert_eq!(err.to_string(), "Internal error: connection refused");
    }

    #[tokio::test]
    async fn test_boxed_error_exposes_wrapped_cause() {
        let source = share_event_source(FailingSource);
        let err = source.list_events(90).await.unwrap_err();

        let cause = err.source().expect("wrapped error is the cause");
        let inner = cause
            .downcast_ref::<MeetcostError>()
            .expect("cause keeps its concrete type");
        assert!(matches!(inner, MeetcostError::InternalError(_)));
        assert!(cause.source().is_none());
    }
}
