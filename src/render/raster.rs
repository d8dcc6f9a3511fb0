use resvg::tiny_skia;

use crate::{
    assets::fonts::FontSet,
    foundation::error::{BagelError, BagelResult},
    render::surface::Surface,
};

/// Parse `svg` and composite it over whatever `surface` already holds.
pub fn rasterize_svg_onto(surface: &mut Surface, svg: &str, fonts: &FontSet) -> BagelResult<()> {
    let opts = fonts.svg_options();
    let tree = usvg::Tree::from_str(svg, &opts)
        .map_err(|e| BagelError::render(format!("text scene parse failed: {e}")))?;

    let canvas = surface.canvas();
    let size = tree.size();
    if size.width().round() as u32 != canvas.width || size.height().round() as u32 != canvas.height
    {
        return Err(BagelError::render(format!(
            "text scene is {}x{}, surface is {}x{}",
            size.width(),
            size.height(),
            canvas.width,
            canvas.height
        )));
    }

    resvg::render(
        &tree,
        tiny_skia::Transform::identity(),
        &mut surface.pixmap_mut().as_mut(),
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
