mod frame;
mod null_renderer;
mod primitives;

pub use frame::{PaintBatch, PaintStage, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, DotPair, LinePrimitive, Primitive, TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any painting backend.
///
/// Backends receive already computed primitives in chart units (y pointing
/// up from the bottom edge) and paint them as they arrive. Only the last
/// flush of a redraw carries `invalidate = true`.
pub trait Renderer {
    /// Drops everything painted by previous redraws.
    fn clear(&mut self, invalidate: bool) -> ChartResult<()>;

    /// Paints one batch on top of what was painted before.
    fn draw(&mut self, primitives: &[Primitive], invalidate: bool) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
