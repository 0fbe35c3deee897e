// File: crates/meetcost_stats/src/handlers.rs
use crate::logic::compute_stats;
use crate::methodology::{annualize, time_allocation, AnnualizedCost, TimeAllocation};
use crate::models::{CalculationResult, CalendarEvent, FilterOptions, FilterOverrides};
use crate::report::{share_text, summary_report};
use crate::window::events_in_period;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use meetcost_common::{
    external_service_error, unavailable, validation_error, HttpStatusCode, MeetcostError,
    SharedEventSource,
};
use meetcost_config::AppConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

// Shared state for the statistics handlers
#[derive(Clone)]
pub struct StatsState {
    pub config: Arc<AppConfig>,
    /// Explicit handle to the calendar collaborator; `None` when the service
    /// only answers for events posted by the caller.
    pub source: Option<SharedEventSource>,
}

/// Body of `POST /stats` and `POST /report`.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsRequest {
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
    /// Defaults to `stats.hourly_rate` from the configuration.
    pub hourly_rate: Option<f64>,
    /// Defaults to `stats.default_period_days`.
    pub period_days: Option<u32>,
    /// Overlaid field by field onto the filters from the configuration.
    #[serde(default)]
    pub filters: FilterOverrides,
    /// When present, only events starting in `[now - periodDays, now)` are
    /// kept. Without it the events are taken as already windowed.
    pub now: Option<DateTime<Utc>>,
}

/// Query string of `GET /stats`.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    pub period_days: Option<u32>,
    pub hourly_rate: Option<f64>,
    pub min_attendees: Option<u32>,
    pub specific_participant: Option<String>,
    pub work_hours_only: Option<bool>,
    pub time_zone: Option<String>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub stats: CalculationResult,
    pub annualized: AnnualizedCost,
    pub allocation: TimeAllocation,
    /// Events received before any windowing.
    pub total_events: usize,
    /// Events left after the reporting-period window.
    pub events_in_period: usize,
    pub filters: FilterOptions,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub report: String,
    pub share_text: String,
}

/// Resolved inputs of one engine run.
struct StatsParams {
    hourly_rate: f64,
    period_days: u32,
    filters: FilterOptions,
}

fn default_filters(config: &AppConfig) -> FilterOptions {
    FilterOptions {
        min_attendees: config.stats.min_attendees,
        specific_participant: None,
        work_hours_only: config.stats.work_hours_only,
        time_zone: config.stats.time_zone.clone(),
    }
}

fn resolve_filters(config: &AppConfig, overrides: FilterOverrides) -> FilterOptions {
    overrides.apply_to(default_filters(config))
}

fn resolve_params(
    config: &AppConfig,
    hourly_rate: Option<f64>,
    period_days: Option<u32>,
    filters: FilterOptions,
) -> Result<StatsParams, MeetcostError> {
    let hourly_rate = hourly_rate.unwrap_or(config.stats.hourly_rate);
    if !hourly_rate.is_finite() || hourly_rate < 0.0 {
        return Err(validation_error(format!(
            "hourlyRate must be a non-negative number, got {}",
            hourly_rate
        )));
    }

    let period_days = period_days.unwrap_or(config.stats.default_period_days);
    if period_days == 0 {
        return Err(validation_error("periodDays must be at least 1"));
    }

    if filters.min_attendees == 0 {
        return Err(validation_error("minAttendees must be at least 1"));
    }

    Ok(StatsParams {
        hourly_rate,
        period_days,
        filters,
    })
}

fn build_stats_response(
    config: &AppConfig,
    events: &[CalendarEvent],
    params: StatsParams,
    now: Option<DateTime<Utc>>,
) -> StatsResponse {
    let windowed;
    let in_period: &[CalendarEvent] = match now {
        Some(now) => {
            windowed = events_in_period(events, params.period_days, now);
            &windowed
        }
        None => events,
    };

    let stats = compute_stats(
        in_period,
        params.hourly_rate,
        f64::from(params.period_days),
        &params.filters,
    );

    StatsResponse {
        annualized: annualize(&stats, params.hourly_rate, &config.methodology),
        allocation: time_allocation(&stats, &config.methodology),
        total_events: events.len(),
        events_in_period: in_period.len(),
        filters: params.filters,
        stats,
    }
}

fn stats_from_request(
    config: &AppConfig,
    request: StatsRequest,
) -> Result<StatsResponse, MeetcostError> {
    let filters = resolve_filters(config, request.filters);
    let params = resolve_params(config, request.hourly_rate, request.period_days, filters)?;
    Ok(build_stats_response(
        config,
        &request.events,
        params,
        request.now,
    ))
}

fn error_response(err: MeetcostError) -> (StatusCode, String) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        warn!("Stats request failed: {}", err);
    } else {
        info!("Rejected stats request: {}", err);
    }
    (status, err.to_string())
}

/// Computes statistics for events supplied in the request body.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/stats",
    request_body = StatsRequest,
    responses(
        (status = 200, description = "Meeting statistics with annualized cost", body = StatsResponse),
        (status = 400, description = "Invalid rate, period or filters")
    ),
    tag = "Stats"
))]
pub async fn post_stats_handler(
    State(state): State<Arc<StatsState>>,
    Json(request): Json<StatsRequest>,
) -> Result<Json<StatsResponse>, (StatusCode, String)> {
    stats_from_request(&state.config, request)
        .map(Json)
        .map_err(error_response)
}

/// Renders the copy/share texts for events supplied in the request body.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/report",
    request_body = StatsRequest,
    responses(
        (status = 200, description = "Plain-text report", body = ReportResponse),
        (status = 400, description = "Invalid rate, period or filters")
    ),
    tag = "Stats"
))]
pub async fn post_report_handler(
    State(state): State<Arc<StatsState>>,
    Json(request): Json<StatsRequest>,
) -> Result<Json<ReportResponse>, (StatusCode, String)> {
    let response = stats_from_request(&state.config, request).map_err(error_response)?;
    Ok(Json(ReportResponse {
        report: summary_report(&response.stats, &state.config.methodology),
        share_text: share_text(&response.stats),
    }))
}

/// Computes statistics over the events of the configured source.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/stats",
    params(StatsQuery),
    responses(
        (status = 200, description = "Meeting statistics with annualized cost", body = StatsResponse),
        (status = 400, description = "Invalid rate, period or filters"),
        (status = 502, description = "The event source failed"),
        (status = 503, description = "No event source configured")
    ),
    tag = "Stats"
))]
pub async fn get_stats_handler(
    State(state): State<Arc<StatsState>>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, (StatusCode, String)> {
    let config = &state.config;

    let filters = resolve_filters(
        config,
        FilterOverrides {
            min_attendees: query.min_attendees,
            specific_participant: query.specific_participant,
            work_hours_only: query.work_hours_only,
            time_zone: query.time_zone,
        },
    );
    let params = resolve_params(config, query.hourly_rate, query.period_days, filters)
        .map_err(error_response)?;

    let source = state
        .source
        .as_ref()
        .ok_or_else(|| error_response(unavailable("no calendar source configured")))?;

    let window_days = config.stats.fetch_window_days.max(params.period_days);
    let events = source
        .list_events(window_days)
        .await
        .map_err(|e| error_response(external_service_error(source.name(), e)))?;
    info!("Fetched {} events from {}", events.len(), source.name());

    Ok(Json(build_stats_response(
        config,
        &events,
        params,
        Some(Utc::now()),
    )))
}
