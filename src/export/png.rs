use std::io::Cursor;

use crate::{
    assets::fonts::FontSet,
    foundation::{
        core::{Canvas, RenderMode},
        error::{BagelError, BagelResult},
    },
    order::model::Order,
    render::{pipeline::render_order, settings::RenderSettings, surface::Surface},
};

pub const EXPORT_WIDTH: u32 = 3600;
pub const EXPORT_HEIGHT: u32 = 4800;

/// Encoded print artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    pub width: u32,
    pub height: u32,
    /// PNG file bytes.
    pub bytes: Vec<u8>,
}

/// Print-resolution canvas.
pub fn export_canvas() -> Canvas {
    Canvas {
        width: EXPORT_WIDTH,
        height: EXPORT_HEIGHT,
    }
}

/// Renders orders in export mode onto a fresh surface per call.
#[derive(Clone, Debug)]
pub struct Exporter {
    settings: RenderSettings,
    fonts: FontSet,
    canvas: Canvas,
}

impl Exporter {
    pub fn new(settings: RenderSettings) -> Self {
        let fonts = settings.load_fonts();
        Self::with_fonts(settings, fonts)
    }

    pub fn with_fonts(settings: RenderSettings, fonts: FontSet) -> Self {
        Self {
            settings,
            fonts,
            canvas: export_canvas(),
        }
    }

    /// Export at a different size. Layout scales with the width.
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Render `order` and return the drawn surface.
    #[tracing::instrument(skip_all, fields(width = self.canvas.width, height = self.canvas.height))]
    pub fn render(&self, order: &Order) -> BagelResult<Surface> {
        let mut surface = Surface::new(self.canvas)?;
        let layout = render_order(
            &mut surface,
            &self.settings.background,
            order,
            RenderMode::Export,
            &self.fonts,
        )?;
        tracing::debug!(?layout, "export rendered");
        Ok(surface)
    }

    pub fn export(&self, order: &Order) -> BagelResult<EncodedImage> {
        let surface = self.render(order)?;
        let bytes = encode_png(&surface)?;
        Ok(EncodedImage {
            width: self.canvas.width,
            height: self.canvas.height,
            bytes,
        })
    }
}

/// Render `order` at print resolution and encode it as PNG.
///
/// One-shot route: loads a fresh [`FontSet`] (including system fonts) on every call. Callers that
/// export repeatedly should hold an [`Exporter`] or an [`ExportHandle`](crate::ExportHandle).
pub fn export_png(order: &Order, settings: &RenderSettings) -> BagelResult<EncodedImage> {
    Exporter::new(settings.clone()).export(order)
}

/// Encode a surface as straight-alpha RGBA PNG.
pub fn encode_png(surface: &Surface) -> BagelResult<Vec<u8>> {
    let canvas = surface.canvas();
    let img = image::RgbaImage::from_raw(canvas.width, canvas.height, surface.to_straight_rgba8())
        .ok_or_else(|| BagelError::encode("pixel buffer does not match surface size"))?;

    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(|e| BagelError::encode(format!("png encode failed: {e}")))?;
    Ok(bytes)
}

/// Download name for an export, e.g. `bagel-order-Ada-1700000000000.png`.
pub fn export_file_name(order: &Order, timestamp_ms: u128) -> String {
    let name = order.customer_name().unwrap_or("custom");
    let name: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect();
    format!("bagel-order-{name}-{timestamp_ms}.png")
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
