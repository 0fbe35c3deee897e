// --- File: crates/meetcost_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8086,
        }
    }
}

/// Look-back window requested from the event source, in days.
pub const FETCH_WINDOW_DAYS: u32 = 90;

// --- Statistics Defaults ---
// Used whenever a request leaves the corresponding value out.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct StatsConfig {
    /// Effective cost of one hour of the user's time.
    pub hourly_rate: f64,
    /// Reporting period used when none is requested.
    pub default_period_days: u32,
    /// Look-back window requested from the event source.
    pub fetch_window_days: u32,
    pub min_attendees: u32,
    pub work_hours_only: bool,
    /// IANA zone used for the work-hours rule, e.g. "Europe/Zurich".
    pub time_zone: Option<String>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            hourly_rate: 50.0,
            default_period_days: 30,
            fetch_window_days: FETCH_WINDOW_DAYS,
            min_attendees: 2,
            work_hours_only: false,
            time_zone: None,
        }
    }
}

// --- Methodology Constants ---
// Inputs of the annualization and time-allocation views.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct MethodologyConfig {
    /// Weeks actually worked per year.
    pub work_weeks_per_year: f64,
    /// Minutes needed to refocus after each meeting.
    pub context_switch_minutes: f64,
    /// Weekly capacity the allocation chart is measured against.
    pub work_hours_per_week: f64,
    /// Taxes/benefits multiplier applied when starting from a salary.
    pub burden_multiplier: f64,
}

impl Default for MethodologyConfig {
    fn default() -> Self {
        Self {
            work_weeks_per_year: 48.0,
            context_switch_minutes: 23.0,
            work_hours_per_week: 40.0,
            burden_multiplier: 1.3,
        }
    }
}

// --- Calendar Source Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct CalendarConfig {
    pub events_file: Option<String>, // Google Calendar `events.list` export
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub methodology: MethodologyConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}
