#[cfg(test)]
mod tests {
    use crate::logic::{compute_stats, MAX_MEETING_MINUTES};
    use crate::models::{Attendee, CalendarEvent, FilterOptions};
    use chrono::{Duration, TimeZone, Utc};
    use proptest::prelude::*;

    // Builds a timed event `offset_minutes` after a fixed Monday with the
    // given length and attendee list (None = field absent)
    fn event(offset_minutes: i64, length_minutes: i64, attendees: Option<usize>) -> CalendarEvent {
        let base = Utc.with_ymd_and_hms(2025, 5, 5, 0, 0, 0).unwrap();
        let start = base + Duration::minutes(offset_minutes);
        let end = start + Duration::minutes(length_minutes);
        let mut event = CalendarEvent::timed(start.to_rfc3339(), end.to_rfc3339());
        event.attendees = attendees.map(|count| {
            (0..count)
                .map(|i| Attendee::email(format!("p{}@co.com", i)))
                .collect()
        });
        event
    }

    fn arb_event() -> impl Strategy<Value = CalendarEvent> {
        (
            0..(60 * 24 * 14i64),
            -60..700i64,
            prop::option::of(0..8usize),
        )
            .prop_map(|(offset, length, attendees)| event(offset, length, attendees))
    }

    fn arb_filters() -> impl Strategy<Value = FilterOptions> {
        (1..6u32, any::<bool>(), prop::option::of("p[0-9]"))
            .prop_map(|(min_attendees, work_hours_only, participant)| FilterOptions {
                min_attendees,
                specific_participant: participant,
                work_hours_only,
                time_zone: None,
            })
    }

    proptest! {
        // Totals never depend on the reporting period
        #[test]
        fn test_period_only_rescales_weekly_rates(
            events in prop::collection::vec(arb_event(), 0..40),
            filters in arb_filters(),
            rate in 1.0..500.0f64,
            period_a in 1..120u32,
            period_b in 1..120u32,
        ) {
            let a = compute_stats(&events, rate, period_a as f64, &filters);
            let b = compute_stats(&events, rate, period_b as f64, &filters);

            prop_assert_eq!(a.total_meetings, b.total_meetings);
            prop_assert_eq!(a.total_hours, b.total_hours);
            prop_assert_eq!(a.total_cost, b.total_cost);
            prop_assert_eq!(a.total_people_hours, b.total_people_hours);

            let expected = a.meetings_per_week * period_a as f64 / period_b as f64;
            prop_assert!((b.meetings_per_week - expected).abs() < 1e-9);
        }

        // Cost is linear in the rate
        #[test]
        fn test_cost_is_linear_in_rate(
            events in prop::collection::vec(arb_event(), 0..40),
            rate in 1.0..500.0f64,
        ) {
            let filters = FilterOptions::default();
            let single = compute_stats(&events, rate, 30.0, &filters);
            let double = compute_stats(&events, rate * 2.0, 30.0, &filters);
            prop_assert!((double.total_cost - 2.0 * single.total_cost).abs() < 1e-6);
            prop_assert_eq!(single.total_cost, single.total_hours * rate);
        }

        // Input order never changes the result
        #[test]
        fn test_order_independent(
            events in prop::collection::vec(arb_event(), 0..40),
            filters in arb_filters(),
        ) {
            let forward = compute_stats(&events, 75.0, 30.0, &filters);
            let mut reversed_events = events.clone();
            reversed_events.reverse();
            let reversed = compute_stats(&reversed_events, 75.0, 30.0, &filters);

            prop_assert_eq!(forward.total_meetings, reversed.total_meetings);
            prop_assert!((forward.total_hours - reversed.total_hours).abs() < 1e-9);
            prop_assert!((forward.total_people_hours - reversed.total_people_hours).abs() < 1e-9);
            prop_assert_eq!(forward.average_attendees, reversed.average_attendees);
        }

        // Averages stay finite and within the duration bounds
        #[test]
        fn test_averages_are_bounded(
            events in prop::collection::vec(arb_event(), 0..40),
            filters in arb_filters(),
        ) {
            let result = compute_stats(&events, 50.0, 30.0, &filters);
            prop_assert!(result.average_duration_minutes.is_finite());
            prop_assert!(result.average_duration_minutes >= 0.0);
            prop_assert!(result.average_duration_minutes < MAX_MEETING_MINUTES);
            prop_assert!(result.average_attendees >= 1);
            prop_assert!(result.total_people_hours >= result.total_hours * filters.min_attendees as f64 - 1e-9);
        }

        // Tightening the attendee minimum never adds meetings
        #[test]
        fn test_min_attendees_is_monotonic(
            events in prop::collection::vec(arb_event(), 0..40),
            min_attendees in 1..6u32,
        ) {
            let loose = FilterOptions::default().with_min_attendees(min_attendees);
            let strict = FilterOptions::default().with_min_attendees(min_attendees + 1);
            let loose = compute_stats(&events, 50.0, 30.0, &loose);
            let strict = compute_stats(&events, 50.0, 30.0, &strict);
            prop_assert!(strict.total_meetings <= loose.total_meetings);
            prop_assert!(strict.total_hours <= loose.total_hours);
        }
    }
}
