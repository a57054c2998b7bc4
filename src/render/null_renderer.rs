use crate::error::ChartResult;
use crate::render::{Primitive, Renderer};

/// Headless renderer used by tests and hosts without a canvas.
///
/// It validates every primitive it receives and records what a real backend
/// would have painted since the last `clear`.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
    /// Primitives painted since the last clear, in paint order.
    pub painted: Vec<Primitive>,
    /// `invalidate` flag of every flush since the last clear.
    pub flushes: Vec<bool>,
    /// Invalidations requested over the renderer's lifetime.
    pub invalidations: usize,
}

impl Renderer for NullRenderer {
    fn clear(&mut self, invalidate: bool) -> ChartResult<()> {
        self.last_line_count = 0;
        self.last_circle_count = 0;
        self.last_text_count = 0;
        self.painted.clear();
        self.flushes.clear();
        if invalidate {
            self.invalidations += 1;
        }
        Ok(())
    }

    fn draw(&mut self, primitives: &[Primitive], invalidate: bool) -> ChartResult<()> {
        for primitive in primitives {
            primitive.validate()?;
        }
        for primitive in primitives {
            match primitive {
                Primitive::Line(_) => self.last_line_count += 1,
                Primitive::Circle(_) => self.last_circle_count += 1,
                Primitive::Text(_) => self.last_text_count += 1,
            }
        }
        self.painted.extend_from_slice(primitives);
        self.flushes.push(invalidate);
        if invalidate {
            self.invalidations += 1;
        }
        Ok(())
    }
}
