use chrono::{FixedOffset, NaiveDate};
use tracing::debug;

use crate::core::{Clock, DatePattern, SystemClock, Trend, build_axis, today_at};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::CalendarTrendConfig;
use super::render_coordinator::RenderCoordinator;

/// Callback invoked after every successful redraw with the flushed frame.
pub type DrawListener = Box<dyn FnMut(&RenderFrame)>;

/// Facade consumed by host applications.
///
/// `CalendarTrendView` owns the configuration, the trend collection and the
/// renderer. Every mutation of the collection recompiles and repaints the
/// whole chart before returning.
pub struct CalendarTrendView<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: CalendarTrendConfig,
    pub(super) date_pattern: DatePattern,
    pub(super) offset: FixedOffset,
    pub(super) clock: Box<dyn Clock>,
    pub(super) trends: Vec<Trend>,
    pub(super) on_draw: Option<DrawListener>,
}

impl<R: Renderer> CalendarTrendView<R> {
    /// Creates a view reading "today" from the system clock.
    pub fn new(renderer: R, config: CalendarTrendConfig) -> ChartResult<Self> {
        Self::with_clock(renderer, config, Box::new(SystemClock))
    }

    pub fn with_clock(
        renderer: R,
        config: CalendarTrendConfig,
        clock: Box<dyn Clock>,
    ) -> ChartResult<Self> {
        config.validate()?;
        let date_pattern = config.date_pattern()?;
        let offset = config.zone_offset.fixed_offset()?;
        debug!(pattern = date_pattern.as_str(), "calendar trend view created");
        Ok(Self {
            renderer,
            config,
            date_pattern,
            offset,
            clock,
            trends: Vec::new(),
            on_draw: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &CalendarTrendConfig {
        &self.config
    }

    /// Replaces the configuration and repaints.
    pub fn set_config(&mut self, config: CalendarTrendConfig) -> ChartResult<()> {
        config.validate()?;
        self.date_pattern = config.date_pattern()?;
        self.offset = config.zone_offset.fixed_offset()?;
        self.config = config;
        self.redraw()
    }

    #[must_use]
    pub fn date_pattern(&self) -> &DatePattern {
        &self.date_pattern
    }

    pub fn set_clock(&mut self, clock: Box<dyn Clock>) {
        self.clock = clock;
    }

    pub fn set_on_draw_listener(&mut self, listener: DrawListener) {
        self.on_draw = Some(listener);
    }

    pub fn clear_on_draw_listener(&mut self) {
        self.on_draw = None;
    }

    /// Today's date at the configured zone offset.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        today_at(self.clock.as_ref(), self.offset)
    }

    /// Axis domain of the next redraw: every sampled date, today when
    /// `show_today` is set, padded backwards to `min_days_shown`.
    #[must_use]
    pub fn unique_dates(&self) -> Vec<NaiveDate> {
        let today = self.config.show_today.then(|| self.today());
        build_axis(&self.trends, today, self.config.min_days_shown)
    }

    /// Compiles the current trends without painting.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        RenderCoordinator::build_frame(self)
    }

    /// Recompiles everything and flushes it to the renderer.
    pub fn redraw(&mut self) -> ChartResult<()> {
        RenderCoordinator::render(self)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
