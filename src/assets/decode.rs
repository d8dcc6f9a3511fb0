use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::foundation::error::{BagelError, BagelResult};

/// Raster image in premultiplied RGBA8 form.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    pub width: u32,
    pub height: u32,
    /// Row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl PreparedImage {
    pub(crate) fn to_pixmap(&self) -> BagelResult<resvg::tiny_skia::Pixmap> {
        let size = resvg::tiny_skia::IntSize::from_wh(self.width, self.height)
            .ok_or_else(|| BagelError::validation("image has zero width or height"))?;
        resvg::tiny_skia::Pixmap::from_vec(self.rgba8_premul.as_ref().clone(), size)
            .ok_or_else(|| BagelError::validation("prepared image byte length mismatch"))
    }
}

pub fn decode_image(bytes: &[u8]) -> BagelResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

pub fn load_image(path: &Path) -> BagelResult<PreparedImage> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read image bytes from '{}'", path.display()))?;
    decode_image(&bytes)
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
