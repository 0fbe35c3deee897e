// File: crates/meetcost_stats/src/doc.rs

#![cfg(feature = "openapi")]
use crate::handlers::{ReportResponse, StatsRequest, StatsResponse};
use crate::methodology::{AnnualizedCost, TimeAllocation};
use crate::models::{
    Attendee, CalculationResult, CalendarEvent, EventDateTime, FilterOptions, FilterOverrides,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::post_stats_handler,
        crate::handlers::get_stats_handler,
        crate::handlers::post_report_handler
    ),
    components(
        schemas(
            StatsRequest,
            StatsResponse,
            ReportResponse,
            CalculationResult,
            AnnualizedCost,
            TimeAllocation,
            FilterOptions,
            FilterOverrides,
            CalendarEvent,
            EventDateTime,
            Attendee
        )
    ),
    tags(
        (name = "Stats", description = "Meeting statistics and cost reports")
    ),
    servers(
        (url = "/api", description = "Meeting cost API server")
    )
)]
pub struct StatsApiDoc;
