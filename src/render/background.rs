use std::{path::PathBuf, sync::Arc};

use resvg::tiny_skia;

use crate::{
    assets::decode::{PreparedImage, decode_image, load_image},
    foundation::{
        core::{Rect, Rgb8, Size},
        error::BagelResult,
    },
    render::surface::Surface,
};

/// Where a mockup image comes from.
#[derive(Clone, Debug)]
pub enum ImageSource {
    Path(PathBuf),
    Bytes(Arc<Vec<u8>>),
}

impl ImageSource {
    pub fn load(&self) -> BagelResult<PreparedImage> {
        match self {
            Self::Path(path) => load_image(path),
            Self::Bytes(bytes) => decode_image(bytes),
        }
    }
}

/// What the renderer paints before any text.
#[derive(Clone, Debug, Default)]
pub enum Background {
    /// Leave the surface untouched (print artifacts keep an alpha channel).
    #[default]
    Transparent,
    Solid(Rgb8),
    /// Mockup image, contained and centered. Falls back to white if it cannot be loaded.
    Image(ImageSource),
}

/// Color painted when a background image cannot be loaded.
pub const FALLBACK_FILL: Rgb8 = Rgb8::WHITE;

/// Largest rect with `src`'s aspect ratio that fits inside `dst`, centered.
pub fn contain_rect(src: Size, dst: Size) -> Rect {
    if src.width <= 0.0 || src.height <= 0.0 {
        return Rect::ZERO;
    }
    let src_aspect = src.width / src.height;
    let dst_aspect = dst.width / dst.height;

    let (w, h) = if src_aspect > dst_aspect {
        (dst.width, dst.width / src_aspect)
    } else {
        (dst.height * src_aspect, dst.height)
    };
    let x = (dst.width - w) / 2.0;
    let y = (dst.height - h) / 2.0;
    Rect::new(x, y, x + w, y + h)
}

/// Paint `background` onto `surface`. Image load failures are recovered here and never
/// reach the caller.
pub fn draw_background(surface: &mut Surface, background: &Background) {
    match background {
        Background::Transparent => {}
        Background::Solid(color) => surface.fill(*color),
        Background::Image(source) => {
            let drawn = source
                .load()
                .and_then(|img| draw_contained(surface, &img));
            if let Err(error) = drawn {
                tracing::warn!(%error, ?source, "background image unavailable, using flat fill");
                surface.fill(FALLBACK_FILL);
            }
        }
    }
}

fn draw_contained(surface: &mut Surface, img: &PreparedImage) -> BagelResult<()> {
    let src = img.to_pixmap()?;
    let dst = contain_rect(
        Size::new(f64::from(img.width), f64::from(img.height)),
        surface.canvas().size(),
    );
    let sx = (dst.width() / f64::from(img.width)) as f32;
    let sy = (dst.height() / f64::from(img.height)) as f32;
    let transform = tiny_skia::Transform::from_row(sx, 0.0, 0.0, sy, dst.x0 as f32, dst.y0 as f32);

    let paint = tiny_skia::PixmapPaint {
        quality: tiny_skia::FilterQuality::Bicubic,
        ..Default::default()
    };
    surface
        .pixmap_mut()
        .draw_pixmap(0, 0, src.as_ref(), &paint, transform, None);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
