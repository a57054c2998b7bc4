use std::collections::BTreeMap;

use chrono::{FixedOffset, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::DatePattern;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Where the first drawn segment of a series starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StartPolicy {
    /// The first sample only gets its dot: its segment collapses to a point.
    #[default]
    Nowhere,
    /// The first segment rises from the chart origin `(0, 0)`.
    Origin,
    /// The first segment starts at x = 0 at the height of the first value.
    FirstValue,
}

/// Fixed UTC offset used to decide which calendar date is "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneOffset {
    Utc,
    FixedOffsetMinutes { minutes: i16 },
}

impl Default for ZoneOffset {
    fn default() -> Self {
        Self::FixedOffsetMinutes { minutes: 60 }
    }
}

impl ZoneOffset {
    #[must_use]
    pub fn offset_minutes(self) -> i16 {
        match self {
            Self::Utc => 0,
            Self::FixedOffsetMinutes { minutes } => minutes,
        }
    }

    pub fn fixed_offset(self) -> ChartResult<FixedOffset> {
        let minutes = i32::from(self.offset_minutes());
        if !(-14 * 60..=14 * 60).contains(&minutes) {
            return Err(ChartError::InvalidData(
                "zone offset must be between -840 and 840 minutes".to_owned(),
            ));
        }
        FixedOffset::east_opt(minutes * 60).ok_or_else(|| {
            ChartError::InvalidData(format!("zone offset of {minutes} minutes is not representable"))
        })
    }
}

/// One labeled series of optional daily samples.
///
/// A `None` value is a gap: nothing is drawn for it and the next sample
/// connects back to the last real one.
#[derive(Debug, Clone, PartialEq)]
pub struct Trend {
    pub label: String,
    pub values: BTreeMap<NaiveDate, Option<f64>>,
    pub color: Color,
    /// Stroke width override; the view-wide default applies when `None`.
    pub line_weight: Option<f64>,
}

impl Trend {
    #[must_use]
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            values: BTreeMap::new(),
            color,
            line_weight: None,
        }
    }

    #[must_use]
    pub fn with_values(mut self, values: impl IntoIterator<Item = (NaiveDate, Option<f64>)>) -> Self {
        self.values = values.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_line_weight(mut self, line_weight: f64) -> Self {
        self.line_weight = Some(line_weight);
        self
    }

    /// Builds a trend from string-keyed samples, parsing every key with `pattern`.
    pub fn from_string_values(
        label: impl Into<String>,
        color: Color,
        values: &IndexMap<String, Option<f64>>,
        pattern: &DatePattern,
    ) -> ChartResult<Self> {
        let mut trend = Self::new(label, color);
        for (key, value) in values {
            trend.insert_str_value(key, *value, pattern)?;
        }
        Ok(trend)
    }

    /// Replaces every sample.
    pub fn set_values(&mut self, values: BTreeMap<NaiveDate, Option<f64>>) {
        self.values = values;
    }

    /// Adds or overwrites one sample and returns the previous one.
    pub fn insert_value(&mut self, date: NaiveDate, value: Option<f64>) -> Option<Option<f64>> {
        self.values.insert(date, value)
    }

    pub fn insert_str_value(
        &mut self,
        date: &str,
        value: Option<f64>,
        pattern: &DatePattern,
    ) -> ChartResult<Option<Option<f64>>> {
        let date = pattern.parse(date)?;
        Ok(self.insert_value(date, value))
    }

    pub fn remove_value(&mut self, date: NaiveDate) -> Option<Option<f64>> {
        self.values.remove(&date)
    }

    /// Samples keyed by their formatted date, in date order.
    #[must_use]
    pub fn string_values(&self, pattern: &DatePattern) -> IndexMap<String, Option<f64>> {
        self.values
            .iter()
            .map(|(date, value)| (pattern.format(*date), *value))
            .collect()
    }

    /// Value equality where NaN matches NaN, unlike `==`.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        let color = |c: Color| [c.red, c.green, c.blue, c.alpha];
        self.label == other.label
            && color(self.color)
                .into_iter()
                .zip(color(other.color))
                .all(|(a, b)| same_f64(a, b))
            && same_opt_f64(self.line_weight, other.line_weight)
            && self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|((date, value), (other_date, other_value))| {
                    date == other_date && same_opt_f64(*value, *other_value)
                })
    }

    #[must_use]
    pub fn has_date(&self, date: NaiveDate) -> bool {
        self.values.contains_key(&date)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn same_f64(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

fn same_opt_f64(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => same_f64(a, b),
        (None, None) => true,
        _ => false,
    }
}
