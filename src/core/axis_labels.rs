use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::render::{CirclePrimitive, Color, LinePrimitive, Primitive, TextHAlign, TextPrimitive};

/// Language used for month labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisLabelLocale {
    #[default]
    EnUs,
    EsEs,
    ItIt,
}

impl AxisLabelLocale {
    /// Full month name, `month` being 1-based.
    #[must_use]
    pub fn month_name(self, month: u32) -> &'static str {
        const EN: [&str; 12] = [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ];
        const ES: [&str; 12] = [
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
            "septiembre", "octubre", "noviembre", "diciembre",
        ];
        const IT: [&str; 12] = [
            "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
            "settembre", "ottobre", "novembre", "dicembre",
        ];
        let names = match self {
            Self::EnUs => &EN,
            Self::EsEs => &ES,
            Self::ItIt => &IT,
        };
        let index = month.clamp(1, 12) as usize - 1;
        names[index]
    }
}

/// Short uppercase month label: the first three letters of the full name.
#[must_use]
pub fn month_label(month: u32, locale: AxisLabelLocale) -> String {
    locale
        .month_name(month)
        .chars()
        .take(3)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Sizes and offsets of the labels drawn under the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelMetrics {
    pub day_font_size: f64,
    pub day_label_y: f64,
    pub month_font_size: f64,
    pub month_label_y: f64,
    pub badge_center_y: f64,
    pub badge_outer_radius: f64,
    pub badge_inner_radius: f64,
    pub grid_stroke_width: f64,
}

impl Default for LabelMetrics {
    fn default() -> Self {
        Self {
            day_font_size: 10.0,
            day_label_y: 8.0,
            month_font_size: 8.0,
            month_label_y: 2.0,
            badge_center_y: 19.0,
            badge_outer_radius: 14.0,
            badge_inner_radius: 13.0,
            grid_stroke_width: 0.8,
        }
    }
}

/// Inputs of the axis and label compiler.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    pub x_unit: f64,
    pub y_unit: f64,
    pub padding_bottom: f64,
    pub max_value: f64,
    pub step_line_color: Color,
    pub day_label_color: Color,
    pub month_label_color: Color,
    pub today_label_color: Color,
    pub background_color: Color,
    pub locale: AxisLabelLocale,
    pub font_family: Option<String>,
    pub metrics: LabelMetrics,
}

impl AxisLayout {
    /// Top of the grid, shared with the content bounds.
    #[must_use]
    pub fn grid_top(&self) -> f64 {
        self.max_value * self.y_unit + self.padding_bottom
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompiledAxis {
    pub grid_lines: Vec<LinePrimitive>,
    /// Badge circles and texts in paint order.
    pub labels: Vec<Primitive>,
    pub max_x: f64,
}

/// Compiles the vertical step lines and the day/month labels of `axis`.
///
/// Step line `i` sits at `i * x_unit` for `i` in `0..=axis.len()`; the date
/// `axis[i - 1]` is labeled under step line `i`.
#[must_use]
pub fn compile_axis(axis: &[NaiveDate], today: NaiveDate, layout: &AxisLayout) -> CompiledAxis {
    let metrics = layout.metrics;
    let top = layout.grid_top();
    let mut compiled = CompiledAxis {
        grid_lines: Vec::with_capacity(axis.len() + 1),
        labels: Vec::with_capacity(axis.len() * 2),
        max_x: 0.0,
    };

    for i in 0..=axis.len() {
        let x = i as f64 * layout.x_unit;
        compiled.grid_lines.push(LinePrimitive::new(
            x,
            layout.padding_bottom,
            x,
            top,
            metrics.grid_stroke_width,
            layout.step_line_color,
        ));
        compiled.max_x = compiled.max_x.max(x);

        let Some(date) = i.checked_sub(1).map(|index| axis[index]) else {
            continue;
        };
        let is_today = date == today;
        let (day_color, month_color) = if is_today {
            (layout.today_label_color, layout.today_label_color)
        } else {
            (layout.day_label_color, layout.month_label_color)
        };

        if is_today {
            let inner = if layout.background_color.is_transparent() {
                Color::WHITE
            } else {
                layout.background_color
            };
            compiled.labels.push(Primitive::Circle(CirclePrimitive::new(
                x,
                metrics.badge_center_y,
                metrics.badge_outer_radius,
                layout.today_label_color,
            )));
            compiled.labels.push(Primitive::Circle(CirclePrimitive::new(
                x,
                metrics.badge_center_y,
                metrics.badge_inner_radius,
                inner,
            )));
        }

        compiled.labels.push(Primitive::Text(
            TextPrimitive::new(
                date.day().to_string(),
                x,
                metrics.day_label_y,
                metrics.day_font_size,
                day_color,
                TextHAlign::Center,
            )
            .with_font_family(layout.font_family.clone()),
        ));
        compiled.labels.push(Primitive::Text(
            TextPrimitive::new(
                month_label(date.month(), layout.locale),
                x,
                metrics.month_label_y,
                metrics.month_font_size,
                month_color,
                TextHAlign::Center,
            )
            .with_font_family(layout.font_family.clone()),
        ));
    }

    compiled
}
