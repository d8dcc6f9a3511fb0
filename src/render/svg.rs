use std::fmt::Write as _;

use crate::{
    assets::fonts::FONT_FAMILY,
    foundation::core::Canvas,
    render::scene::TextLine,
};

/// Escape text for use in XML character data and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Serialize planned lines as an SVG document the size of `canvas`. Whitespace inside lines is
/// kept as written.
pub fn scene_svg(canvas: Canvas, lines: &[TextLine]) -> String {
    let (w, h) = (canvas.width, canvas.height);
    let mut svg = String::with_capacity(256 + lines.len() * 256);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xml:space="preserve" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );

    for line in lines {
        let _ = write!(
            svg,
            r#"<text x="{:.3}" y="{:.3}" font-family="{}" font-weight="bold" font-size="{:.3}" text-anchor="middle" dominant-baseline="central" fill="{}""#,
            line.center_x,
            line.center_y,
            FONT_FAMILY,
            line.font_size_px,
            line.fill,
        );
        if let Some(outline) = line.outline {
            let _ = write!(
                svg,
                r#" stroke="{}" stroke-width="{:.3}" paint-order="stroke""#,
                outline.color, outline.width_px,
            );
        }
        let _ = write!(svg, ">{}</text>", escape_xml(&line.text));
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
