use calendar_trend::core::{FixedClock, StartPolicy, Trend, build_axis, compile_series};
use calendar_trend::render::{Color, NullRenderer};
use calendar_trend::{CalendarTrendConfig, CalendarTrendView};
use chrono::{Days, NaiveDate};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_trends(trend_count: usize, day_count: u64) -> Vec<Trend> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date");
    (0..trend_count)
        .map(|t| {
            let values = (0..day_count).map(|d| {
                let date = start
                    .checked_add_days(Days::new(d))
                    .expect("date in range");
                // Every seventh sample is a gap.
                let value = (d % 7 != 3).then(|| ((d as f64 + t as f64) * 0.37).sin() * 5.0 + 5.0);
                (date, value)
            });
            let color = Color::rgb(t as f64 / trend_count as f64, 0.4, 0.6);
            Trend::new(format!("trend-{t}"), color).with_values(values)
        })
        .collect()
}

fn bench_build_axis_16x365(c: &mut Criterion) {
    let trends = generated_trends(16, 365);

    c.bench_function("build_axis_16x365", |b| {
        b.iter(|| {
            let _ = build_axis(black_box(&trends), None, black_box(400));
        })
    });
}

fn bench_compile_series_16x365(c: &mut Criterion) {
    let trends = generated_trends(16, 365);
    let axis = build_axis(&trends, None, 0);
    let layout = CalendarTrendConfig::default()
        .with_start_policy(StartPolicy::FirstValue)
        .series_layout();

    c.bench_function("compile_series_16x365", |b| {
        b.iter(|| {
            for trend in &trends {
                let _ = compile_series(black_box(trend), black_box(&axis), black_box(&layout));
            }
        })
    });
}

fn bench_full_redraw_null_renderer(c: &mut Criterion) {
    let mut view = CalendarTrendView::with_clock(
        NullRenderer::default(),
        CalendarTrendConfig::default().with_show_today(true),
        Box::new(FixedClock::at_date(
            NaiveDate::from_ymd_opt(2021, 1, 1).expect("valid date"),
        )),
    )
    .expect("view init");
    view.set_trends(generated_trends(8, 365))
        .expect("set trends");

    c.bench_function("full_redraw_8x365", |b| {
        b.iter(|| {
            view.redraw().expect("redraw should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_build_axis_16x365,
    bench_compile_series_16x365,
    bench_full_redraw_null_renderer
);
criterion_main!(benches);
