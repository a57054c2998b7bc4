use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::{StartPolicy, Trend, axis_position};
use crate::render::{CirclePrimitive, Color, DotPair, LinePrimitive};

/// Inner dot radius relative to the line weight.
pub const INNER_DOT_RATIO: f64 = 0.8;

/// Scale and clamping inputs shared by every series of one redraw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesLayout {
    pub min_value: f64,
    pub max_value: f64,
    pub start_policy: StartPolicy,
    pub x_unit: f64,
    pub y_unit: f64,
    pub padding_bottom: f64,
    pub default_line_weight: f64,
}

impl SeriesLayout {
    /// Chart-unit y of an already clamped value.
    #[must_use]
    pub fn value_to_y(&self, value: f64) -> f64 {
        value * self.y_unit + self.padding_bottom
    }

    /// Chart-unit x of a 1-based axis position.
    #[must_use]
    pub fn position_to_x(&self, position: usize) -> f64 {
        position as f64 * self.x_unit
    }
}

/// Geometry of one trend: one dot pair per line, same order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompiledSeries {
    pub lines: Vec<LinePrimitive>,
    pub dots: Vec<DotPair>,
    pub max_x: f64,
}

/// Forces `value` into `[min, max]`.
#[must_use]
pub fn clamp_value(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Compiles one trend into connected segments against the shared `axis`.
///
/// The walk keeps an anchor (last drawn position and value) starting at
/// `(0, 0)`. Every present sample draws a segment from the anchor to itself
/// and becomes the new anchor; gaps neither draw nor move the anchor.
#[must_use]
pub fn compile_series(trend: &Trend, axis: &[NaiveDate], layout: &SeriesLayout) -> CompiledSeries {
    let mut compiled = CompiledSeries::default();

    if let Err(err) = trend.color.validate() {
        warn!(label = %trend.label, error = %err, "skipping trend with invalid color");
        return compiled;
    }
    let weight = match trend.line_weight {
        Some(weight) if weight.is_finite() && weight > 0.0 => weight,
        Some(weight) => {
            warn!(label = %trend.label, weight, "invalid trend line weight, using default");
            layout.default_line_weight
        }
        None => layout.default_line_weight,
    };

    let mut last_position = 0_usize;
    let mut last_value = 0.0_f64;
    let mut started = false;

    for (date, value) in &trend.values {
        let Some(value) = value.filter(|value| !value.is_nan()) else {
            trace!(label = %trend.label, %date, "gap");
            continue;
        };
        let Some(position) = axis_position(axis, *date) else {
            warn!(label = %trend.label, %date, "sample date is not on the axis");
            continue;
        };
        let clamped = clamp_value(value, layout.min_value, layout.max_value);

        if !started {
            started = true;
            match layout.start_policy {
                StartPolicy::Nowhere => {
                    last_position = position;
                    last_value = clamped;
                }
                StartPolicy::FirstValue => last_value = clamped,
                StartPolicy::Origin => {}
            }
        }

        let line = LinePrimitive::new(
            layout.position_to_x(last_position),
            layout.value_to_y(last_value),
            layout.position_to_x(position),
            layout.value_to_y(clamped),
            weight,
            trend.color,
        );
        compiled.max_x = compiled.max_x.max(line.x1).max(line.x2);
        compiled.lines.push(line);
        compiled.dots.push(end_dots(&line));

        last_position = position;
        last_value = clamped;
    }

    trace!(
        label = %trend.label,
        lines = compiled.lines.len(),
        max_x = compiled.max_x,
        "compiled series"
    );
    compiled
}

fn end_dots(line: &LinePrimitive) -> DotPair {
    DotPair {
        outer: CirclePrimitive::new(line.x2, line.y2, line.stroke_width, Color::WHITE),
        inner: CirclePrimitive::new(
            line.x2,
            line.y2,
            line.stroke_width * INNER_DOT_RATIO,
            line.color,
        ),
    }
}
