use tracing::debug;

use crate::core::{build_axis, compile_axis, compile_series};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::CalendarTrendView;

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    pub(super) fn build_frame<R: Renderer>(view: &CalendarTrendView<R>) -> RenderFrame {
        let config = &view.config;
        let today = view.today();
        let axis = build_axis(
            &view.trends,
            config.show_today.then_some(today),
            config.min_days_shown,
        );
        let series_layout = config.series_layout();
        let axis_layout = config.axis_layout();

        let mut frame = RenderFrame::new();
        for trend in &view.trends {
            frame.push_series(compile_series(trend, &axis, &series_layout));
        }
        frame.push_axis(compile_axis(&axis, today, &axis_layout));
        frame.close_bounds(config.padding_right, axis_layout.grid_top());
        frame
    }

    /// Clears the renderer and flushes `frame` batch by batch; only the last
    /// flush invalidates.
    pub(super) fn flush<R: Renderer>(renderer: &mut R, frame: &RenderFrame) -> ChartResult<()> {
        renderer.clear(false)?;
        let batches = frame.paint_batches();
        let last = batches.len().saturating_sub(1);
        for (index, batch) in batches.iter().enumerate() {
            renderer.draw(&batch.primitives, index == last)?;
        }
        Ok(())
    }

    pub(super) fn render<R: Renderer>(view: &mut CalendarTrendView<R>) -> ChartResult<()> {
        let frame = Self::build_frame(view);
        debug!(
            trends = view.trends.len(),
            grid_lines = frame.grid_lines.len(),
            trend_lines = frame.trend_lines.len(),
            labels = frame.labels.len(),
            max_x = frame.max_x,
            "flushing calendar trend frame"
        );
        Self::flush(&mut view.renderer, &frame)?;
        if let Some(listener) = view.on_draw.as_mut() {
            listener(&frame);
        }
        Ok(())
    }
}
