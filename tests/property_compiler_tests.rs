use calendar_trend::core::{
    DatePattern, SeriesLayout, StartPolicy, Trend, build_axis, clamp_value, compile_series,
};
use calendar_trend::render::Color;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date")
}

fn day(offset: u64) -> NaiveDate {
    base_date()
        .checked_add_days(Days::new(offset))
        .expect("date in range")
}

fn start_policy() -> impl Strategy<Value = StartPolicy> {
    prop_oneof![
        Just(StartPolicy::Nowhere),
        Just(StartPolicy::Origin),
        Just(StartPolicy::FirstValue),
    ]
}

fn layout(start_policy: StartPolicy) -> SeriesLayout {
    SeriesLayout {
        min_value: 0.0,
        max_value: 10.0,
        start_policy,
        x_unit: 30.0,
        y_unit: 10.0,
        padding_bottom: 40.0,
        default_line_weight: 4.0,
    }
}

proptest! {
    #[test]
    fn axis_is_strictly_increasing_and_long_enough(
        offsets in proptest::collection::vec(0u64..2_000, 1..40),
        min_count in 0usize..60,
        with_today in any::<bool>(),
    ) {
        let trend = Trend::new("t", Color::BLACK)
            .with_values(offsets.iter().map(|offset| (day(*offset), Some(1.0))));
        let today = with_today.then(|| day(2_100));

        let axis = build_axis(std::slice::from_ref(&trend), today, min_count);

        prop_assert!(axis.len() >= min_count);
        prop_assert!(axis.windows(2).all(|pair| pair[0] < pair[1]));
        for offset in &offsets {
            prop_assert!(axis.contains(&day(*offset)));
        }

        let again = build_axis(&[trend], today, min_count);
        prop_assert_eq!(axis, again);
    }

    #[test]
    fn segment_count_matches_present_samples(
        samples in proptest::collection::vec(proptest::option::of(-20.0f64..30.0), 1..40),
        policy in start_policy(),
    ) {
        let trend = Trend::new("t", Color::BLACK).with_values(
            samples.iter().enumerate().map(|(i, value)| (day(i as u64), *value)),
        );
        let axis = build_axis(std::slice::from_ref(&trend), None, 0);

        let compiled = compile_series(&trend, &axis, &layout(policy));

        let present = samples.iter().filter(|value| value.is_some()).count();
        prop_assert_eq!(compiled.lines.len(), present);
        prop_assert_eq!(compiled.dots.len(), present);
        if let Some(first) = compiled.lines.first() {
            prop_assert_eq!(first.is_degenerate(), policy == StartPolicy::Nowhere);
        }
    }

    #[test]
    fn emitted_heights_are_clamped(
        samples in proptest::collection::vec(-1_000.0f64..1_000.0, 1..30),
        policy in start_policy(),
    ) {
        let trend = Trend::new("t", Color::BLACK).with_values(
            samples.iter().enumerate().map(|(i, value)| (day(i as u64), Some(*value))),
        );
        let axis = build_axis(std::slice::from_ref(&trend), None, 0);
        let layout = layout(policy);

        let compiled = compile_series(&trend, &axis, &layout);

        for (line, value) in compiled.lines.iter().zip(&samples) {
            let expected = clamp_value(*value, layout.min_value, layout.max_value);
            prop_assert!((line.y2 - layout.value_to_y(expected)).abs() <= 1e-9);
            prop_assert!(line.y2 >= layout.padding_bottom);
            prop_assert!(line.y2 <= layout.value_to_y(layout.max_value));
        }
    }

    #[test]
    fn iso_dates_round_trip(offset in 0u64..100_000) {
        let pattern = DatePattern::default();
        let date = NaiveDate::from_ymd_opt(1800, 1, 1)
            .and_then(|start| start.checked_add_days(Days::new(offset)))
            .expect("date in range");

        prop_assert_eq!(pattern.parse(&pattern.format(date)).expect("parse"), date);
    }

    #[test]
    fn day_first_dates_round_trip(offset in 0u64..100_000) {
        let pattern = DatePattern::new("dd/MM/yyyy").expect("pattern");
        let date = NaiveDate::from_ymd_opt(1800, 1, 1)
            .and_then(|start| start.checked_add_days(Days::new(offset)))
            .expect("date in range");

        prop_assert_eq!(pattern.parse(&pattern.format(date)).expect("parse"), date);
    }
}
