use calendar_trend::ChartError;
use calendar_trend::core::{DatePattern, Trend, format_date, parse_date};
use calendar_trend::render::Color;
use chrono::NaiveDate;
use indexmap::IndexMap;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn iso_pattern_formats_and_parses() {
    let pattern = DatePattern::new("yyyy-MM-dd").expect("pattern");

    assert_eq!(pattern.format(date(2021, 4, 5)), "2021-04-05");
    assert_eq!(pattern.parse("2021-04-05").expect("parse"), date(2021, 4, 5));
    assert_eq!(DatePattern::default(), pattern);
}

#[test]
fn day_first_pattern_from_the_sample_app() {
    assert_eq!(
        parse_date("11/04/2021", "dd/MM/yyyy").expect("parse"),
        date(2021, 4, 11)
    );
    assert_eq!(
        format_date(date(2021, 4, 11), "dd/MM/yyyy").expect("format"),
        "11/04/2021"
    );
}

#[test]
fn variable_width_fields_round_trip() {
    let pattern = DatePattern::new("d/M/yyyy").expect("pattern");

    assert_eq!(pattern.format(date(2024, 4, 5)), "5/4/2024");
    assert_eq!(pattern.parse("5/4/2024").expect("parse"), date(2024, 4, 5));
    assert_eq!(pattern.parse("15/12/2024").expect("parse"), date(2024, 12, 15));
}

#[test]
fn quoted_literals_and_month_names() {
    let pattern = DatePattern::new("'day' d 'of' MMMM yyyy").expect("pattern");

    let text = pattern.format(date(2024, 4, 11));
    assert_eq!(text, "day 11 of April 2024");
    assert_eq!(pattern.parse(&text).expect("parse"), date(2024, 4, 11));

    let short = DatePattern::new("EEE dd MMM ''yy").expect("pattern");
    let text = short.format(date(2024, 4, 11));
    assert_eq!(text, "Thu 11 Apr '24");
    assert_eq!(short.parse(&text).expect("parse"), date(2024, 4, 11));
}

#[test]
fn trailing_input_is_rejected_instead_of_truncated() {
    let err = parse_date("11/04/2021 10:00", "dd/MM/yyyy").expect_err("trailing input");

    let ChartError::DateParse { input, pattern, .. } = &err else {
        panic!("expected DateParse, got {err:?}");
    };
    assert_eq!(input, "11/04/2021 10:00");
    assert_eq!(pattern, "dd/MM/yyyy");
}

#[test]
fn malformed_dates_are_rejected() {
    for input in ["2021-13-01", "2021-02-30", "", "2021/04/05", "2021-04"] {
        assert!(
            matches!(
                parse_date(input, "yyyy-MM-dd"),
                Err(ChartError::DateParse { .. })
            ),
            "`{input}` should not parse"
        );
    }
}

#[test]
fn input_must_match_the_pattern_layout_exactly() {
    let cases = [
        (" 2021-04-05", "yyyy-MM-dd"),
        ("2021-04-05 ", "yyyy-MM-dd"),
        ("1104 2021", "dd MM yyyy"),
        ("11  04 2021", "dd MM yyyy"),
        ("5/4/2024", "dd/MM/yyyy"),
        ("05/4/2024", "dd/MM/yyyy"),
        ("21-04-05", "yyyy-MM-dd"),
        ("11 apr 2024", "dd MMM yyyy"),
    ];
    for (input, pattern) in cases {
        assert!(
            matches!(parse_date(input, pattern), Err(ChartError::DateParse { .. })),
            "`{input}` should not parse with `{pattern}`"
        );
    }

    assert_eq!(
        parse_date("11 04 2021", "dd MM yyyy").expect("parse"),
        date(2021, 4, 11)
    );
    assert_eq!(
        parse_date("11 Apr 2024", "dd MMM yyyy").expect("parse"),
        date(2024, 4, 11)
    );
}

#[test]
fn unsupported_or_incomplete_patterns_are_rejected() {
    for pattern in ["yyyy-QQ-dd", "dd/MM", "yyyy-MM-ddd", "yyyy-'MM-dd", "HH:mm"] {
        assert!(
            matches!(
                DatePattern::new(pattern),
                Err(ChartError::InvalidDatePattern { .. })
            ),
            "`{pattern}` should be rejected"
        );
    }
}

#[test]
fn percent_signs_are_literal() {
    let pattern = DatePattern::new("yyyy%MM%dd").expect("pattern");
    assert_eq!(pattern.format(date(2024, 1, 2)), "2024%01%02");
    assert_eq!(pattern.parse("2024%01%02").expect("parse"), date(2024, 1, 2));
}

#[test]
fn string_keyed_trend_values() {
    let pattern = DatePattern::new("dd/MM/yyyy").expect("pattern");
    let mut raw = IndexMap::new();
    raw.insert("12/04/2021".to_owned(), Some(7.0));
    raw.insert("11/04/2021".to_owned(), Some(6.5));
    raw.insert("13/04/2021".to_owned(), None);

    let mut trend =
        Trend::from_string_values("health", Color::BLACK, &raw, &pattern).expect("trend");

    assert_eq!(trend.values.len(), 3);
    assert_eq!(trend.values[&date(2021, 4, 11)], Some(6.5));
    let keys: Vec<String> = trend.string_values(&pattern).into_keys().collect();
    assert_eq!(keys, vec!["11/04/2021", "12/04/2021", "13/04/2021"]);

    let err = trend
        .insert_str_value("2021-04-14", Some(1.0), &pattern)
        .expect_err("bad key");
    assert!(matches!(err, ChartError::DateParse { .. }));
    assert_eq!(trend.values.len(), 3);

    raw.insert("not a date".to_owned(), Some(1.0));
    assert!(Trend::from_string_values("broken", Color::BLACK, &raw, &pattern).is_err());
}
