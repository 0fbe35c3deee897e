// --- File: crates/meetcost_stats/src/methodology.rs ---
//! Linear post-processing of a [`CalculationResult`]: annualized cost,
//! the context-switch ("distraction") tax and the time-allocation split.

use crate::models::CalculationResult;
use meetcost_config::MethodologyConfig;
use serde::{Deserialize, Serialize};

/// Yearly extrapolation of the weekly figures.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualizedCost {
    pub hourly_rate: f64,
    /// What `hourly_rate` would cost with the burden multiplier applied, for
    /// callers whose rate is a bare salary figure.
    pub burdened_hourly_rate: f64,
    pub work_weeks_per_year: f64,
    pub annual_meeting_cost: f64,
    pub context_switch_minutes: f64,
    pub distraction_hours_per_week: f64,
    pub annual_distraction_cost: f64,
    pub total_annual_waste: f64,
}

/// How the working capacity of the period splits between productive work,
/// meetings and refocusing after meetings.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeAllocation {
    pub capacity_hours: f64,
    pub meeting_hours: f64,
    /// Context-switch hours over the whole period.
    pub distraction_hours: f64,
    pub distraction_hours_per_week: f64,
    /// Never negative, even when meetings exceed the capacity.
    pub productive_hours: f64,
    /// Weekly meeting hours as a fraction of the working week.
    pub meeting_share: f64,
}

fn context_switch_hours(config: &MethodologyConfig) -> f64 {
    config.context_switch_minutes / 60.0
}

/// Hourly cost including taxes and benefits, for callers starting from a
/// base salary rate.
pub fn burdened_hourly_rate(base_rate: f64, config: &MethodologyConfig) -> f64 {
    base_rate * config.burden_multiplier
}

/// Extrapolates the weekly meeting load to a year and adds the
/// per-meeting context-switch penalty.
pub fn annualize(
    result: &CalculationResult,
    hourly_rate: f64,
    config: &MethodologyConfig,
) -> AnnualizedCost {
    let annual_meeting_cost = result.hours_per_week * hourly_rate * config.work_weeks_per_year;
    let distraction_hours_per_week = result.meetings_per_week * context_switch_hours(config);
    let annual_distraction_cost =
        distraction_hours_per_week * hourly_rate * config.work_weeks_per_year;

    AnnualizedCost {
        hourly_rate,
        burdened_hourly_rate: burdened_hourly_rate(hourly_rate, config),
        work_weeks_per_year: config.work_weeks_per_year,
        annual_meeting_cost,
        context_switch_minutes: config.context_switch_minutes,
        distraction_hours_per_week,
        annual_distraction_cost,
        total_annual_waste: annual_meeting_cost + annual_distraction_cost,
    }
}

/// Splits the period's working capacity for the allocation chart.
pub fn time_allocation(result: &CalculationResult, config: &MethodologyConfig) -> TimeAllocation {
    let capacity_hours = result.period_days / 7.0 * config.work_hours_per_week;
    let distraction_hours = result.total_meetings as f64 * context_switch_hours(config);
    let productive_hours = (capacity_hours - result.total_hours - distraction_hours).max(0.0);

    TimeAllocation {
        capacity_hours,
        meeting_hours: result.total_hours,
        distraction_hours,
        distraction_hours_per_week: result.meetings_per_week * context_switch_hours(config),
        productive_hours,
        meeting_share: result.hours_per_week / config.work_hours_per_week,
    }
}
