use serde::{Deserialize, Serialize};

use crate::core::{
    AxisLabelLocale, AxisLayout, DEFAULT_DATE_PATTERN, DatePattern, LabelMetrics, SeriesLayout,
    StartPolicy, ZoneOffset,
};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Upper bound for `min_days_shown`: one hundred years of daily ticks.
pub const MAX_MIN_DAYS_SHOWN: usize = 36_600;

/// Public view configuration.
///
/// Serializable so hosts can persist/load chart setup; every field falls back
/// to its default when missing from the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarTrendConfig {
    pub min_value: f64,
    pub max_value: f64,
    pub x_unit_measure: f64,
    pub y_unit_measure: f64,
    pub padding_bottom: f64,
    pub padding_right: f64,
    pub line_weight: f64,
    pub start_policy: StartPolicy,
    pub show_today: bool,
    pub min_days_shown: usize,
    pub date_format_pattern: String,
    pub step_line_color: Color,
    pub day_label_color: Color,
    pub month_label_color: Color,
    pub today_label_color: Color,
    pub background_color: Color,
    pub zone_offset: ZoneOffset,
    pub locale: AxisLabelLocale,
    pub label_font_family: Option<String>,
    pub label_metrics: LabelMetrics,
}

impl Default for CalendarTrendConfig {
    fn default() -> Self {
        Self {
            min_value: 0.0,
            max_value: 10.0,
            x_unit_measure: 30.0,
            y_unit_measure: 10.0,
            padding_bottom: 40.0,
            padding_right: 18.0,
            line_weight: 4.0,
            start_policy: StartPolicy::default(),
            show_today: false,
            min_days_shown: 0,
            date_format_pattern: DEFAULT_DATE_PATTERN.to_owned(),
            step_line_color: Color::GRAY,
            day_label_color: Color::BLACK,
            month_label_color: Color::BLACK,
            today_label_color: Color::BLACK,
            background_color: Color::TRANSPARENT,
            zone_offset: ZoneOffset::default(),
            locale: AxisLabelLocale::default(),
            label_font_family: None,
            label_metrics: LabelMetrics::default(),
        }
    }
}

impl CalendarTrendConfig {
    /// Sets the clamping range of plotted values.
    #[must_use]
    pub fn with_value_range(mut self, min_value: f64, max_value: f64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    /// Sets chart units per day (x) and per value unit (y).
    #[must_use]
    pub fn with_unit_measures(mut self, x_unit_measure: f64, y_unit_measure: f64) -> Self {
        self.x_unit_measure = x_unit_measure;
        self.y_unit_measure = y_unit_measure;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding_bottom: f64, padding_right: f64) -> Self {
        self.padding_bottom = padding_bottom;
        self.padding_right = padding_right;
        self
    }

    #[must_use]
    pub fn with_line_weight(mut self, line_weight: f64) -> Self {
        self.line_weight = line_weight;
        self
    }

    #[must_use]
    pub fn with_start_policy(mut self, start_policy: StartPolicy) -> Self {
        self.start_policy = start_policy;
        self
    }

    #[must_use]
    pub fn with_show_today(mut self, show_today: bool) -> Self {
        self.show_today = show_today;
        self
    }

    /// Minimum number of days on the axis; missing days are prepended.
    #[must_use]
    pub fn with_min_days_shown(mut self, min_days_shown: usize) -> Self {
        self.min_days_shown = min_days_shown;
        self
    }

    #[must_use]
    pub fn with_date_format_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.date_format_pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn with_label_colors(
        mut self,
        step_line_color: Color,
        day_label_color: Color,
        month_label_color: Color,
        today_label_color: Color,
    ) -> Self {
        self.step_line_color = step_line_color;
        self.day_label_color = day_label_color;
        self.month_label_color = month_label_color;
        self.today_label_color = today_label_color;
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, background_color: Color) -> Self {
        self.background_color = background_color;
        self
    }

    #[must_use]
    pub fn with_zone_offset(mut self, zone_offset: ZoneOffset) -> Self {
        self.zone_offset = zone_offset;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: AxisLabelLocale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_label_font_family(mut self, family: Option<String>) -> Self {
        self.label_font_family = family;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("min_value", self.min_value),
            ("max_value", self.max_value),
            ("padding_bottom", self.padding_bottom),
            ("padding_right", self.padding_right),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "config `{name}` must be finite"
                )));
            }
        }
        if self.min_value >= self.max_value {
            return Err(ChartError::InvalidData(
                "config `min_value` must be < `max_value`".to_owned(),
            ));
        }
        for (name, value) in [
            ("x_unit_measure", self.x_unit_measure),
            ("y_unit_measure", self.y_unit_measure),
            ("line_weight", self.line_weight),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "config `{name}` must be finite and > 0"
                )));
            }
        }
        if self.padding_bottom < 0.0 || self.padding_right < 0.0 {
            return Err(ChartError::InvalidData(
                "config paddings must be >= 0".to_owned(),
            ));
        }
        for color in [
            self.step_line_color,
            self.day_label_color,
            self.month_label_color,
            self.today_label_color,
            self.background_color,
        ] {
            color.validate()?;
        }
        if self.min_days_shown > MAX_MIN_DAYS_SHOWN {
            return Err(ChartError::InvalidData(format!(
                "config `min_days_shown` must be <= {MAX_MIN_DAYS_SHOWN}"
            )));
        }
        validate_label_metrics(self.label_metrics)?;
        self.zone_offset.fixed_offset()?;
        self.date_pattern()?;
        Ok(())
    }

    pub fn date_pattern(&self) -> ChartResult<DatePattern> {
        DatePattern::new(&self.date_format_pattern)
    }

    #[must_use]
    pub fn series_layout(&self) -> SeriesLayout {
        SeriesLayout {
            min_value: self.min_value,
            max_value: self.max_value,
            start_policy: self.start_policy,
            x_unit: self.x_unit_measure,
            y_unit: self.y_unit_measure,
            padding_bottom: self.padding_bottom,
            default_line_weight: self.line_weight,
        }
    }

    #[must_use]
    pub fn axis_layout(&self) -> AxisLayout {
        AxisLayout {
            x_unit: self.x_unit_measure,
            y_unit: self.y_unit_measure,
            padding_bottom: self.padding_bottom,
            max_value: self.max_value,
            step_line_color: self.step_line_color,
            day_label_color: self.day_label_color,
            month_label_color: self.month_label_color,
            today_label_color: self.today_label_color,
            background_color: self.background_color,
            locale: self.locale,
            font_family: self.label_font_family.clone(),
            metrics: self.label_metrics,
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config json: {e}")))
    }

    /// Parses and validates a JSON payload.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn validate_label_metrics(metrics: LabelMetrics) -> ChartResult<()> {
    for (name, value) in [
        ("day_font_size", metrics.day_font_size),
        ("month_font_size", metrics.month_font_size),
        ("badge_outer_radius", metrics.badge_outer_radius),
        ("badge_inner_radius", metrics.badge_inner_radius),
        ("grid_stroke_width", metrics.grid_stroke_width),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "label metric `{name}` must be finite and > 0"
            )));
        }
    }
    for (name, value) in [
        ("day_label_y", metrics.day_label_y),
        ("month_label_y", metrics.month_label_y),
        ("badge_center_y", metrics.badge_center_y),
    ] {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "label metric `{name}` must be finite"
            )));
        }
    }
    Ok(())
}
