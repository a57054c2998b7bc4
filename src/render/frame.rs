use crate::core::{CompiledAxis, CompiledSeries};
use crate::error::ChartResult;
use crate::render::{Color, DotPair, LinePrimitive, Primitive};

/// Stage a [`PaintBatch`] belongs to, in flush order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStage {
    Grid,
    Series,
    LeftoverDots,
    Labels,
    Bounds,
}

/// One flush handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintBatch {
    pub stage: PaintStage,
    pub primitives: Vec<Primitive>,
}

/// Draw-command accumulator for one redraw.
///
/// Primitives are kept per category so the paint order can be derived in a
/// single place (`paint_batches`) instead of at every call site.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderFrame {
    pub grid_lines: Vec<LinePrimitive>,
    pub trend_lines: Vec<LinePrimitive>,
    /// One pair per entry of `trend_lines`, same order.
    pub dots: Vec<DotPair>,
    /// Today badges and day/month labels, in emission order.
    pub labels: Vec<Primitive>,
    /// Transparent line stretching the content bounds over the right padding.
    pub bounds_line: Option<LinePrimitive>,
    /// Widest x reached by any series or grid line.
    pub max_x: f64,
}

impl RenderFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_series(&mut self, series: CompiledSeries) {
        self.max_x = self.max_x.max(series.max_x);
        self.trend_lines.extend(series.lines);
        self.dots.extend(series.dots);
    }

    pub fn push_axis(&mut self, axis: CompiledAxis) {
        self.max_x = self.max_x.max(axis.max_x);
        self.grid_lines.extend(axis.grid_lines);
        self.labels.extend(axis.labels);
    }

    /// Closes the frame with an invisible line from the origin to
    /// `(max_x + padding_right, top)`.
    pub fn close_bounds(&mut self, padding_right: f64, top: f64) {
        self.bounds_line = Some(LinePrimitive::new(
            0.0,
            0.0,
            self.max_x + padding_right,
            top,
            1.0,
            Color::TRANSPARENT,
        ));
    }

    /// Flush order: grid, series lines (each preceded by the previous line's
    /// dots), the last line's dots, labels, bounds.
    #[must_use]
    pub fn paint_batches(&self) -> Vec<PaintBatch> {
        let mut batches = Vec::with_capacity(self.trend_lines.len() + 4);

        if !self.grid_lines.is_empty() {
            batches.push(PaintBatch {
                stage: PaintStage::Grid,
                primitives: self.grid_lines.iter().copied().map(Primitive::Line).collect(),
            });
        }

        for (index, line) in self.trend_lines.iter().enumerate() {
            let mut primitives = Vec::with_capacity(3);
            if let Some(previous) = index.checked_sub(1).and_then(|i| self.dots.get(i)) {
                primitives.extend(previous.primitives());
            }
            primitives.push(Primitive::Line(*line));
            batches.push(PaintBatch {
                stage: PaintStage::Series,
                primitives,
            });
        }

        let painted_dots = self.trend_lines.len().saturating_sub(1);
        let leftover: Vec<Primitive> = self
            .dots
            .iter()
            .skip(painted_dots)
            .flat_map(|pair| pair.primitives())
            .collect();
        if !leftover.is_empty() {
            batches.push(PaintBatch {
                stage: PaintStage::LeftoverDots,
                primitives: leftover,
            });
        }

        if !self.labels.is_empty() {
            batches.push(PaintBatch {
                stage: PaintStage::Labels,
                primitives: self.labels.clone(),
            });
        }

        if let Some(bounds) = self.bounds_line {
            batches.push(PaintBatch {
                stage: PaintStage::Bounds,
                primitives: vec![Primitive::Line(bounds)],
            });
        }

        batches
    }

    /// Every primitive in paint order.
    #[must_use]
    pub fn ordered_primitives(&self) -> Vec<Primitive> {
        self.paint_batches()
            .into_iter()
            .flat_map(|batch| batch.primitives)
            .collect()
    }

    pub fn validate(&self) -> ChartResult<()> {
        for line in self.grid_lines.iter().chain(&self.trend_lines) {
            line.validate()?;
        }
        for pair in &self.dots {
            pair.outer.validate()?;
            pair.inner.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }
        if let Some(bounds) = self.bounds_line {
            bounds.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grid_lines.is_empty()
            && self.trend_lines.is_empty()
            && self.dots.is_empty()
            && self.labels.is_empty()
    }
}
