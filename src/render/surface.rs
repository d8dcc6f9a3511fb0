use resvg::tiny_skia;

use crate::foundation::{
    core::{Canvas, Rgb8},
    error::{BagelError, BagelResult},
};

/// Read-back of a surface's pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

/// Drawing surface a render pass paints into.
pub struct Surface {
    canvas: Canvas,
    pixmap: tiny_skia::Pixmap,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("canvas", &self.canvas)
            .finish_non_exhaustive()
    }
}

impl Surface {
    /// Allocate a transparent surface. Fails when the runtime cannot provide a pixel buffer
    /// of this size.
    pub fn new(canvas: Canvas) -> BagelResult<Self> {
        let pixmap = tiny_skia::Pixmap::new(canvas.width, canvas.height).ok_or_else(|| {
            BagelError::surface_unavailable(format!(
                "cannot allocate a {}x{} surface",
                canvas.width, canvas.height
            ))
        })?;
        Ok(Self { canvas, pixmap })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    pub fn fill(&mut self, color: Rgb8) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, 255));
    }

    /// Straight-alpha RGBA at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    pub fn to_frame(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.pixmap.data().to_vec(),
            premultiplied: true,
        }
    }

    /// Row-major straight-alpha RGBA8, as image encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.data().len());
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut tiny_skia::Pixmap {
        &mut self.pixmap
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
