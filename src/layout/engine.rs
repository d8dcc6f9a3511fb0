use crate::{
    compile::ingredients::IngredientList,
    foundation::core::{Canvas, RenderMode},
    order::options::BagelBase,
};

pub const LINE_HEIGHT_MULTIPLIER: f64 = 1.2;
/// Used in preview mode once content had to be shrunk to fit.
pub const TIGHT_LINE_HEIGHT_MULTIPLIER: f64 = 1.15;

pub const PREVIEW_REFERENCE_WIDTH: f64 = 550.0;
pub const PREVIEW_REFERENCE_SIZE: f64 = 28.0;
pub const MIN_BASE_PREVIEW_SIZE: f64 = 20.0;
pub const MAX_PREVIEW_SIZE: f64 = 32.0;
pub const MIN_PREVIEW_SIZE: f64 = 14.0;

/// Export sizes are authored for this width and scale linearly with the canvas.
pub const EXPORT_REFERENCE_WIDTH: f64 = 3600.0;
pub const BASE_EXPORT_SIZE: f64 = 550.0;
pub const MIN_EXPORT_SIZE: f64 = 300.0;

pub const LONG_BASE_SCALE: f64 = 0.7;
pub const SESAME_SCALE: f64 = 0.9;
pub const MULTIPLE_ENTRIES_SCALE: f64 = 0.85;
pub const EVERYTHING_ALONE_SCALE: f64 = 1.1;

pub const EXPORT_START_Y_WITH_NAME: f64 = 0.25;
pub const EXPORT_START_Y_WITHOUT_NAME: f64 = 0.2;
pub const PREVIEW_START_Y_FEW_WITH_NAME: f64 = 0.38;
pub const PREVIEW_START_Y_MANY_WITH_NAME: f64 = 0.35;
pub const PREVIEW_START_Y_FEW_WITHOUT_NAME: f64 = 0.32;
pub const PREVIEW_START_Y_MANY_WITHOUT_NAME: f64 = 0.28;
/// Preview entry counts up to this use the "few" start offsets.
pub const PREVIEW_FEW_ENTRIES: usize = 2;

pub const MAX_Y_EXPORT: f64 = 0.95;
pub const MAX_Y_PREVIEW: f64 = 0.9;
pub const MAX_TEXT_HEIGHT_EXPORT: f64 = 0.65;

/// Font metrics and placement for one render pass.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LayoutParams {
    pub font_size_px: f64,
    pub line_height_px: f64,
    /// Y of the first line's vertical center.
    pub start_y_px: f64,
    /// Lines centered below this Y are not drawn.
    pub max_y_px: f64,
    /// False when the content still exceeds its budget at the minimum font size.
    pub fits: bool,
}

/// Smallest font size `mode` may produce on `canvas`.
pub fn min_font_size(canvas: Canvas, mode: RenderMode) -> f64 {
    match mode {
        RenderMode::Preview => MIN_PREVIEW_SIZE,
        RenderMode::Export => MIN_EXPORT_SIZE * export_scale(canvas),
    }
}

fn export_scale(canvas: Canvas) -> f64 {
    f64::from(canvas.width) / EXPORT_REFERENCE_WIDTH
}

fn base_font_size(canvas: Canvas, mode: RenderMode) -> f64 {
    match mode {
        RenderMode::Export => BASE_EXPORT_SIZE * export_scale(canvas),
        RenderMode::Preview => (f64::from(canvas.width) / PREVIEW_REFERENCE_WIDTH
            * PREVIEW_REFERENCE_SIZE)
            .clamp(MIN_BASE_PREVIEW_SIZE, MAX_PREVIEW_SIZE),
    }
}

fn base_scale(base: BagelBase) -> f64 {
    match base {
        BagelBase::Everything | BagelBase::WholeWheat => LONG_BASE_SCALE,
        BagelBase::Sesame => SESAME_SCALE,
        BagelBase::Plain | BagelBase::Raisin => 1.0,
    }
}

fn count_scale(list: &IngredientList) -> f64 {
    if list.len() > 1 {
        MULTIPLE_ENTRIES_SCALE
    } else if list.base == BagelBase::Everything {
        EVERYTHING_ALONE_SCALE
    } else {
        1.0
    }
}

fn start_y_fraction(mode: RenderMode, has_name: bool, entries: usize) -> f64 {
    let few = entries <= PREVIEW_FEW_ENTRIES;
    match (mode, has_name, few) {
        (RenderMode::Export, true, _) => EXPORT_START_Y_WITH_NAME,
        (RenderMode::Export, false, _) => EXPORT_START_Y_WITHOUT_NAME,
        (RenderMode::Preview, true, true) => PREVIEW_START_Y_FEW_WITH_NAME,
        (RenderMode::Preview, true, false) => PREVIEW_START_Y_MANY_WITH_NAME,
        (RenderMode::Preview, false, true) => PREVIEW_START_Y_FEW_WITHOUT_NAME,
        (RenderMode::Preview, false, false) => PREVIEW_START_Y_MANY_WITHOUT_NAME,
    }
}

/// Compute font size, line height and start offset for `list` on `canvas`.
///
/// Pure: the result depends only on the arguments. Content that needs more vertical room than
/// the mode's budget is shrunk proportionally, never below [`min_font_size`]. If it still does
/// not fit, `fits` is false and the renderer truncates at `max_y_px`.
pub fn compute_layout(
    list: &IngredientList,
    canvas: Canvas,
    mode: RenderMode,
    has_name: bool,
) -> LayoutParams {
    let height = f64::from(canvas.height);
    let min_size = min_font_size(canvas, mode);

    let mut font_size = base_font_size(canvas, mode) * base_scale(list.base) * count_scale(list);
    let mut multiplier = LINE_HEIGHT_MULTIPLIER;

    let start_y = height * start_y_fraction(mode, has_name, list.len());
    let max_y = height
        * match mode {
            RenderMode::Export => MAX_Y_EXPORT,
            RenderMode::Preview => MAX_Y_PREVIEW,
        };
    let available = match mode {
        RenderMode::Export => height * MAX_TEXT_HEIGHT_EXPORT,
        RenderMode::Preview => max_y - start_y,
    };

    let lines = list.total_lines() as f64;
    let required = lines * font_size * multiplier;
    if required > available {
        font_size = (font_size * (available / required)).max(min_size);
        if mode == RenderMode::Preview {
            multiplier = TIGHT_LINE_HEIGHT_MULTIPLIER;
        }
    }
    font_size = font_size.max(min_size);

    let line_height = font_size * multiplier;
    let fits = lines * line_height <= available + 1e-9;
    if !fits {
        tracing::warn!(
            lines = list.total_lines(),
            font_size,
            available,
            ?mode,
            "ingredient text exceeds its vertical budget at the minimum font size"
        );
    }

    let params = LayoutParams {
        font_size_px: font_size,
        line_height_px: line_height,
        start_y_px: start_y,
        max_y_px: max_y,
        fits,
    };
    tracing::debug!(?params, entries = list.len(), ?mode, "layout computed");
    params
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
