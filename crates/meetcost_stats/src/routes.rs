// --- File: crates/meetcost_stats/src/routes.rs ---

use crate::handlers::{get_stats_handler, post_report_handler, post_stats_handler, StatsState};
use axum::{routing::post, Router};
use meetcost_common::SharedEventSource;
use meetcost_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing the statistics endpoints.
///
/// `source` backs `GET /stats`; without it that route answers 503 while the
/// POST routes keep working on caller-supplied events.
pub fn routes(config: Arc<AppConfig>, source: Option<SharedEventSource>) -> Router {
    let stats_state = Arc::new(StatsState { config, source });

    Router::new()
        .route("/stats", post(post_stats_handler).get(get_stats_handler))
        .route("/report", post(post_report_handler))
        .with_state(stats_state)
}
