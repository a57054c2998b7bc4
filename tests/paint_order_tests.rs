use calendar_trend::core::{FixedClock, StartPolicy, Trend};
use calendar_trend::render::{Color, NullRenderer, PaintStage, Primitive, RenderFrame};
use calendar_trend::{CalendarTrendConfig, CalendarTrendView};
use chrono::NaiveDate;

const RED: Color = Color::rgb(1.0, 0.0, 0.0);
const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn two_trend_view() -> CalendarTrendView<NullRenderer> {
    let config = CalendarTrendConfig::default().with_start_policy(StartPolicy::Nowhere);
    let clock = FixedClock::at_date(date(2024, 1, 2));
    let mut view = CalendarTrendView::with_clock(NullRenderer::default(), config, Box::new(clock))
        .expect("view init");
    view.set_trends(vec![
        Trend::new("red", RED).with_values([
            (date(2024, 1, 1), Some(2.0)),
            (date(2024, 1, 2), Some(3.0)),
        ]),
        Trend::new("blue", BLUE).with_values([
            (date(2024, 1, 1), Some(6.0)),
            (date(2024, 1, 2), Some(5.0)),
        ]),
    ])
    .expect("set trends");
    view
}

fn lines_of(primitives: &[Primitive]) -> Vec<Color> {
    primitives
        .iter()
        .filter_map(|primitive| match primitive {
            Primitive::Line(line) => Some(line.color),
            _ => None,
        })
        .collect()
}

#[test]
fn batches_follow_the_fixed_stage_order() {
    let frame = two_trend_view().build_render_frame();

    let stages: Vec<PaintStage> = frame
        .paint_batches()
        .iter()
        .map(|batch| batch.stage)
        .collect();

    assert_eq!(
        stages,
        vec![
            PaintStage::Grid,
            PaintStage::Series,
            PaintStage::Series,
            PaintStage::Series,
            PaintStage::Series,
            PaintStage::LeftoverDots,
            PaintStage::Labels,
            PaintStage::Bounds,
        ]
    );
}

#[test]
fn previous_line_dots_are_painted_before_the_current_line() {
    let frame = two_trend_view().build_render_frame();
    let batches = frame.paint_batches();
    let series: Vec<_> = batches
        .iter()
        .filter(|batch| batch.stage == PaintStage::Series)
        .collect();

    assert_eq!(series[0].primitives, vec![Primitive::Line(frame.trend_lines[0])]);
    for k in 1..series.len() {
        let mut expected = frame.dots[k - 1].primitives().to_vec();
        expected.push(Primitive::Line(frame.trend_lines[k]));
        assert_eq!(series[k].primitives, expected, "batch for line {k}");
    }

    let leftover = batches
        .iter()
        .find(|batch| batch.stage == PaintStage::LeftoverDots)
        .expect("leftover dots");
    assert_eq!(leftover.primitives, frame.dots[3].primitives().to_vec());
}

#[test]
fn dots_cross_series_boundaries() {
    let frame = two_trend_view().build_render_frame();
    let batches = frame.paint_batches();

    // First blue line is preceded by the last red dot pair.
    let first_blue = &batches[3];
    assert_eq!(lines_of(&first_blue.primitives), vec![BLUE]);
    let Primitive::Circle(inner) = &first_blue.primitives[1] else {
        panic!("expected dot before the line");
    };
    assert_eq!(inner.color, RED);
}

#[test]
fn bounds_line_is_transparent_and_covers_right_padding() {
    let frame = two_trend_view().build_render_frame();
    let bounds = frame.bounds_line.expect("bounds line");

    // Two axis dates: grid reaches 2 * 30, plus 18 right padding.
    assert_eq!((bounds.x1, bounds.y1), (0.0, 0.0));
    assert_eq!(bounds.x2, 78.0);
    assert_eq!(bounds.y2, 10.0 * 10.0 + 40.0);
    assert!(bounds.color.is_transparent());
}

#[test]
fn only_the_last_flush_invalidates() {
    let view = two_trend_view();
    let renderer = view.into_renderer();

    assert_eq!(renderer.flushes.len(), 8);
    let (last, earlier) = renderer.flushes.split_last().expect("flushes");
    assert!(*last);
    assert!(earlier.iter().all(|invalidate| !invalidate));
}

#[test]
fn renderer_receives_primitives_in_paint_order() {
    let view = two_trend_view();
    let expected = view.build_render_frame().ordered_primitives();
    let renderer = view.into_renderer();

    assert_eq!(renderer.painted, expected);
    assert_eq!(renderer.last_line_count, 3 + 4 + 1);
    assert_eq!(renderer.last_circle_count, 8 + 2);
    assert_eq!(renderer.last_text_count, 4);
}

#[test]
fn empty_frame_still_flushes_bounds_and_origin_line() {
    let config = CalendarTrendConfig::default();
    let mut view = CalendarTrendView::with_clock(
        NullRenderer::default(),
        config,
        Box::new(FixedClock::at_date(date(2024, 1, 1))),
    )
    .expect("view init");
    view.redraw().expect("redraw");

    let renderer = view.into_renderer();
    assert_eq!(renderer.flushes, vec![false, true]);
    assert_eq!(renderer.last_line_count, 2);
}

#[test]
fn manual_frame_without_lines_paints_all_dots_as_leftovers() {
    let frame = RenderFrame {
        dots: two_trend_view().build_render_frame().dots,
        ..RenderFrame::default()
    };

    let batches = frame.paint_batches();

    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].stage, PaintStage::LeftoverDots);
    assert_eq!(batches[0].primitives.len(), 8);
}
