use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::core::Trend;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::CalendarTrendView;

impl<R: Renderer> CalendarTrendView<R> {
    #[must_use]
    pub fn trends(&self) -> &[Trend] {
        &self.trends
    }

    /// Mutable access to one trend. Changes show up on the next redraw.
    pub fn trend_mut(&mut self, index: usize) -> Option<&mut Trend> {
        self.trends.get_mut(index)
    }

    /// First trend carrying `label`. Changes show up on the next redraw.
    pub fn trend_by_label_mut(&mut self, label: &str) -> Option<&mut Trend> {
        self.trends.iter_mut().find(|trend| trend.label == label)
    }

    /// Appends a trend and repaints.
    pub fn add_trend(&mut self, trend: Trend) -> ChartResult<()> {
        debug!(label = %trend.label, samples = trend.values.len(), "add trend");
        self.trends.push(trend);
        self.redraw()
    }

    /// Removes the first trend matching `trend` (see [`Trend::matches`]) and
    /// repaints.
    pub fn remove_trend(&mut self, trend: &Trend) -> ChartResult<Option<Trend>> {
        let removed = self
            .trends
            .iter()
            .position(|candidate| candidate.matches(trend))
            .map(|index| self.trends.remove(index));
        debug!(label = %trend.label, removed = removed.is_some(), "remove trend");
        self.redraw()?;
        Ok(removed)
    }

    pub fn remove_trend_at(&mut self, index: usize) -> ChartResult<Trend> {
        if index >= self.trends.len() {
            return Err(ChartError::IndexOutOfBounds {
                index,
                len: self.trends.len(),
            });
        }
        let removed = self.trends.remove(index);
        debug!(index, label = %removed.label, "remove trend at");
        self.redraw()?;
        Ok(removed)
    }

    /// Removes the first trend (in insertion order) carrying `label`.
    ///
    /// Nothing happens, repaint included, when no trend matches.
    pub fn remove_trend_by_label(&mut self, label: &str) -> ChartResult<Option<Trend>> {
        let Some(index) = self.trends.iter().position(|trend| trend.label == label) else {
            trace!(label, "no trend to remove");
            return Ok(None);
        };
        let removed = self.trends.remove(index);
        debug!(label, index, "remove trend by label");
        self.redraw()?;
        Ok(Some(removed))
    }

    /// Replaces the whole collection. The view owns the given trends from
    /// now on; callers keep no handle to them.
    pub fn set_trends(&mut self, trends: Vec<Trend>) -> ChartResult<()> {
        debug!(count = trends.len(), "set trends");
        self.trends = trends;
        self.redraw()
    }

    pub fn clear_trends(&mut self) -> ChartResult<()> {
        debug!(count = self.trends.len(), "clear trends");
        self.trends.clear();
        self.redraw()
    }

    /// Writes `values[i]` into trend `i` at `date`, then repaints.
    ///
    /// Fails with `LengthMismatch`, changing nothing, unless there is exactly
    /// one value per trend.
    pub fn add_trend_values(&mut self, date: NaiveDate, values: &[Option<f64>]) -> ChartResult<()> {
        if values.len() != self.trends.len() {
            return Err(ChartError::LengthMismatch {
                expected: self.trends.len(),
                actual: values.len(),
            });
        }
        for (trend, value) in self.trends.iter_mut().zip(values) {
            trend.insert_value(date, *value);
        }
        debug!(%date, count = values.len(), "add trend values");
        self.redraw()
    }

    /// Same as [`Self::add_trend_values`] with `date` in the configured pattern.
    pub fn add_trend_values_str(&mut self, date: &str, values: &[Option<f64>]) -> ChartResult<()> {
        let date = self.date_pattern.parse(date)?;
        self.add_trend_values(date, values)
    }

    /// Whether any trend has a sample (present or gap) on `date`.
    #[must_use]
    pub fn is_day_tracked(&self, date: NaiveDate) -> bool {
        self.trends.iter().any(|trend| trend.has_date(date))
    }
}
