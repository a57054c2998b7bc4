use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Primitive, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
    pub invalidations: usize,
}

/// Offscreen Cairo + Pango backend.
///
/// Chart units map 1:1 to surface pixels; y is flipped so that chart y = 0
/// lands on the bottom row of the surface.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn context(&self) -> ChartResult<Context> {
        Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))
    }

    fn flip(&self, y: f64) -> f64 {
        f64::from(self.surface.height()) - y
    }
}

impl Renderer for CairoRenderer {
    fn clear(&mut self, invalidate: bool) -> ChartResult<()> {
        let context = self.context()?;
        apply_color(&context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        self.last_stats = CairoRenderStats {
            invalidations: self.last_stats.invalidations + usize::from(invalidate),
            ..CairoRenderStats::default()
        };
        Ok(())
    }

    fn draw(&mut self, primitives: &[Primitive], invalidate: bool) -> ChartResult<()> {
        let context = self.context()?;
        for primitive in primitives {
            primitive.validate()?;
            match primitive {
                Primitive::Line(line) => {
                    apply_color(&context, line.color);
                    context.set_line_width(line.stroke_width);
                    context.move_to(line.x1, self.flip(line.y1));
                    context.line_to(line.x2, self.flip(line.y2));
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke line", err))?;
                    self.last_stats.lines_drawn += 1;
                }
                Primitive::Circle(circle) => {
                    apply_color(&context, circle.color);
                    context.new_sub_path();
                    context.arc(circle.cx, self.flip(circle.cy), circle.radius, 0.0, TAU);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill circle", err))?;
                    self.last_stats.circles_drawn += 1;
                }
                Primitive::Text(text) => {
                    let layout = pangocairo::functions::create_layout(&context);
                    let family = text.font_family.as_deref().unwrap_or("Sans");
                    let font_description =
                        FontDescription::from_string(&format!("{family} {}", text.font_size_px));
                    layout.set_font_description(Some(&font_description));
                    layout.set_text(&text.text);

                    let (text_width, text_height) = layout.pixel_size();
                    let x = match text.h_align {
                        TextHAlign::Left => text.x,
                        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                        TextHAlign::Right => text.x - f64::from(text_width),
                    };

                    apply_color(&context, text.color);
                    context.move_to(x, self.flip(text.y) - f64::from(text_height));
                    pangocairo::functions::show_layout(&context, &layout);
                    self.last_stats.texts_drawn += 1;
                }
            }
        }
        if invalidate {
            self.surface.flush();
            self.last_stats.invalidations += 1;
        }
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
