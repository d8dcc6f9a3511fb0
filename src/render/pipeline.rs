use crate::{
    assets::fonts::FontSet,
    compile::ingredients::{IngredientList, compile},
    foundation::{core::RenderMode, error::BagelResult},
    layout::engine::{LayoutParams, compute_layout},
    order::model::Order,
    render::{
        background::{Background, draw_background},
        raster::rasterize_svg_onto,
        scene::plan_text,
        surface::Surface,
        svg::scene_svg,
    },
};

/// Fully redraw `surface` for an already compiled and laid out order.
///
/// Pipeline:
/// 1. clear, then [`draw_background`]
/// 2. [`plan_text`] (name line, then entries down to `layout.max_y_px`)
/// 3. [`scene_svg`] + [`rasterize_svg_onto`]
///
/// Background failures are recovered inside step 1; only text rasterization can fail.
#[tracing::instrument(skip_all, fields(mode = ?mode, entries = list.len()))]
pub fn render(
    surface: &mut Surface,
    background: &Background,
    order: &Order,
    list: &IngredientList,
    layout: &LayoutParams,
    mode: RenderMode,
    fonts: &FontSet,
) -> BagelResult<()> {
    surface.clear();
    draw_background(surface, background);

    let lines = plan_text(order, list, layout, surface.canvas(), mode);
    if lines.is_empty() {
        return Ok(());
    }
    let svg = scene_svg(surface.canvas(), &lines);
    rasterize_svg_onto(surface, &svg, fonts)
}

/// Compile, lay out and render `order` in one call. Returns the layout used.
pub fn render_order(
    surface: &mut Surface,
    background: &Background,
    order: &Order,
    mode: RenderMode,
    fonts: &FontSet,
) -> BagelResult<LayoutParams> {
    let list = compile(order);
    let layout = compute_layout(&list, surface.canvas(), mode, order.has_name());
    render(surface, background, order, &list, &layout, mode, fonts)?;
    Ok(layout)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
