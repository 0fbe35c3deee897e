// --- File: crates/meetcost_stats/src/report.rs ---
//! Plain-text renderings of a [`CalculationResult`] for copy/share actions.

use crate::models::CalculationResult;
use meetcost_config::MethodologyConfig;

/// Closing line of every generated text.
pub const CALL_TO_ACTION: &str = "Check your own meeting cost with meetcost.";

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a number with thousands separators and at most
/// `max_fraction_digits` decimals, trailing zeros removed.
/// Halves round away from zero: `format_number(2.5, 0) == "3"`.
pub fn format_number(value: f64, max_fraction_digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let factor = 10f64.powi(max_fraction_digits as i32);
    let rounded = (value.abs() * factor).round() / factor;
    let fixed = format!("{:.*}", max_fraction_digits, rounded);

    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = group_thousands(int_part);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    if value < 0.0 && out != "0" {
        out.insert(0, '-');
    }
    out
}

/// Whole-dollar amount, e.g. `$12,345` or `-$40`.
pub fn format_currency(value: f64) -> String {
    let amount = format_number(value.abs(), 0);
    if value < 0.0 && amount != "0" {
        format!("-${}", amount)
    } else {
        format!("${}", amount)
    }
}

/// The multi-line "reality check" summary.
pub fn summary_report(result: &CalculationResult, config: &MethodologyConfig) -> String {
    let week_share = (result.hours_per_week / config.work_hours_per_week) * 100.0;

    format!(
        "MEETING COST REALITY CHECK\n\
         \n\
         \"You spent {hours} hours across {meetings} meetings in the last {days} days...\"\n\
         ...and it cost roughly {cost} in focus time.\n\
         \n\
         That is {share}% of your working week gone to meetings.\n\
         \n\
         Total Meetings: {meetings}\n\
         Avg Duration: {average} min\n\
         \n\
         {cta}",
        hours = format_number(result.total_hours, 0),
        meetings = result.total_meetings,
        days = format_number(result.period_days, 0),
        cost = format_currency(result.total_cost),
        share = format_number(week_share, 0),
        average = format_number(result.average_duration_minutes, 0),
        cta = CALL_TO_ACTION,
    )
}

/// Short text for posting to a social feed.
pub fn share_text(result: &CalculationResult) -> String {
    format!(
        "I just reviewed my meetings for the last {days} days:\n\
         \n\
         {hours} hours across {meetings} meetings.\n\
         {cost} of my time.\n\
         \n\
         {cta}",
        days = format_number(result.period_days, 0),
        hours = format_number(result.total_hours, 0),
        meetings = result.total_meetings,
        cost = format_currency(result.total_cost),
        cta = CALL_TO_ACTION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month() -> CalculationResult {
        CalculationResult {
            total_meetings: 42,
            total_hours: 37.6,
            total_people_hours: 120.0,
            average_duration_minutes: 53.7,
            average_attendees: 3,
            total_cost: 1880.4,
            meetings_per_week: 9.8,
            hours_per_week: 8.77,
            period_days: 30.0,
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0, 0), "0");
        assert_eq!(format_number(1234567.0, 0), "1,234,567");
        assert_eq!(format_number(999.95, 1), "1,000");
        assert_eq!(format_number(12.34, 1), "12.3");
        assert_eq!(format_number(12.0, 2), "12");
        assert_eq!(format_number(2.5, 0), "3");
        assert_eq!(format_number(-1500.0, 0), "-1,500");
        assert_eq!(format_number(-0.2, 0), "0");
        assert_eq!(format_number(f64::INFINITY, 0), "inf");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1880.4), "$1,880");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-40.0), "-$40");
        assert_eq!(format_currency(12345.5), "$12,346");
    }

    #[test]
    fn test_summary_report_contains_rounded_figures() {
        let report = summary_report(&month(), &MethodologyConfig::default());

        assert!(report.starts_with("MEETING COST REALITY CHECK"));
        assert!(report.contains("You spent 38 hours across 42 meetings in the last 30 days"));
        assert!(report.contains("cost roughly $1,880 in focus time"));
        // 8.77 / 40 = 21.9%
        assert!(report.contains("That is 22% of your working week"));
        assert!(report.contains("Total Meetings: 42"));
        assert!(report.contains("Avg Duration: 54 min"));
        assert!(report.ends_with(CALL_TO_ACTION));
    }

    #[test]
    fn test_share_text() {
        let text = share_text(&month());
        assert!(text.contains("last 30 days"));
        assert!(text.contains("38 hours across 42 meetings."));
        assert!(text.contains("$1,880 of my time."));
    }
}
