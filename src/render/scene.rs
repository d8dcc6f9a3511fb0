use crate::{
    compile::ingredients::IngredientList,
    foundation::core::{Canvas, RenderMode, Rgb8},
    layout::engine::LayoutParams,
    order::{model::Order, options::TextStyle},
};

/// Connective drawn after the final line of every joined entry.
pub const JOIN_SUFFIX: &str = " &";

pub const NAME_Y_PREVIEW: f64 = 0.28;
pub const NAME_Y_EXPORT: f64 = 0.25;
/// Name font size as a fraction of canvas width.
pub const NAME_SIZE_EXPORT: f64 = 0.04;
pub const NAME_SIZE_PREVIEW: f64 = 0.035;
pub const NAME_MIN_PREVIEW: f64 = 18.0;
pub const NAME_MAX_PREVIEW: f64 = 22.0;

pub const OUTLINE: Outline = Outline {
    color: Rgb8::from_u32(0xD3D3D3),
    width_px: 1.0,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outline {
    pub color: Rgb8,
    pub width_px: f64,
}

/// One centered line of text, positioned by its vertical center.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub center_x: f64,
    pub center_y: f64,
    pub font_size_px: f64,
    pub fill: Rgb8,
    /// Stroke painted beneath the fill.
    pub outline: Option<Outline>,
}

fn name_line(order: &Order, canvas: Canvas, mode: RenderMode) -> Option<TextLine> {
    let name = order.customer_name()?;
    let width = f64::from(canvas.width);
    let height = f64::from(canvas.height);
    let (size, y) = match mode {
        RenderMode::Export => (width * NAME_SIZE_EXPORT, height * NAME_Y_EXPORT),
        RenderMode::Preview => (
            (width * NAME_SIZE_PREVIEW).clamp(NAME_MIN_PREVIEW, NAME_MAX_PREVIEW),
            height * NAME_Y_PREVIEW,
        ),
    };
    let name: String = name
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    Some(TextLine {
        text: format!("{name}'s Bagel Order"),
        center_x: width / 2.0,
        center_y: y,
        font_size_px: size,
        fill: order.name_color.rgb(),
        outline: None,
    })
}

/// Position every line the renderer will paint.
///
/// Walks the entries from `layout.start_y_px`, one `line_height_px` per line. An entry whose
/// first line starts below `layout.max_y_px` is dropped along with everything after it; lines
/// of a multi-line entry that fall below the bound are dropped individually.
pub fn plan_text(
    order: &Order,
    list: &IngredientList,
    layout: &LayoutParams,
    canvas: Canvas,
    mode: RenderMode,
) -> Vec<TextLine> {
    let center_x = f64::from(canvas.width) / 2.0;
    let mut lines = Vec::<TextLine>::with_capacity(list.total_lines() + 1);
    lines.extend(name_line(order, canvas, mode));

    let mut cursor_y = layout.start_y_px;
    for entry in list {
        if cursor_y > layout.max_y_px {
            break;
        }

        let fill = match order.text_style {
            TextStyle::Black => Rgb8::BLACK,
            TextStyle::Colored => entry.color,
        };
        let outline = entry.outlined().then_some(OUTLINE);
        let count = entry.line_count();

        for (i, line) in entry.lines().enumerate() {
            let y = cursor_y + (i as f64) * layout.line_height_px;
            if y > layout.max_y_px {
                continue;
            }
            let text = if entry.join_next && i + 1 == count {
                format!("{line}{JOIN_SUFFIX}")
            } else {
                line.to_string()
            };
            lines.push(TextLine {
                text,
                center_x,
                center_y: y,
                font_size_px: layout.font_size_px,
                fill,
                outline,
            });
        }

        cursor_y += (count as f64) * layout.line_height_px;
    }

    lines
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
