use super::*;
use crate::{
    foundation::core::Rgb8,
    render::scene::{OUTLINE, TextLine},
};

fn line(text: &str, outline: bool) -> TextLine {
    TextLine {
        text: text.into(),
        center_x: 50.0,
        center_y: 25.5,
        font_size_px: 12.0,
        fill: Rgb8::from_u32(0x4ECDC4),
        outline: outline.then_some(OUTLINE),
    }
}

#[test]
fn escapes_markup_characters() {
    assert_eq!(
        escape_xml(r#"Tom & "Jerry" <3 O'Neil"#),
        "Tom &amp; &quot;Jerry&quot; &lt;3 O&apos;Neil"
    );
}

#[test]
fn document_matches_canvas() {
    let svg = scene_svg(Canvas::new(100, 50).unwrap(), &[]);
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" xml:space="preserve" width="100" height="50""#));
    assert!(svg.ends_with("</svg>"));
    assert!(!svg.contains("<text"));
}

#[test]
fn text_element_carries_style() {
    let svg = scene_svg(Canvas::new(100, 50).unwrap(), &[line("Ham &", false)]);
    assert!(svg.contains(r#"x="50.000" y="25.500""#));
    assert!(svg.contains(r#"font-weight="bold""#));
    assert!(svg.contains(r#"text-anchor="middle""#));
    assert!(svg.contains(r#"dominant-baseline="central""#));
    assert!(svg.contains(r##"fill="#4ECDC4""##));
    assert!(svg.contains(">Ham &amp;</text>"));
    assert!(!svg.contains("stroke="));
}

#[test]
fn outlined_text_strokes_beneath_fill() {
    let svg = scene_svg(Canvas::new(100, 50).unwrap(), &[line("Cream Cheese", true)]);
    assert!(svg.contains(r##"stroke="#D3D3D3""##));
    assert!(svg.contains(r#"paint-order="stroke""#));
}

#[test]
fn scene_parses_as_svg() {
    let svg = scene_svg(
        Canvas::new(100, 50).unwrap(),
        &[line("Tom's <Bagel>", true)],
    );
    let opts = usvg::Options::default();
    assert!(usvg::Tree::from_str(&svg, &opts).is_ok());
}

#[test]
fn repeated_spaces_survive_parsing() {
    let svg = scene_svg(Canvas::new(200, 50).unwrap(), &[line("Ann  Marie", false)]);
    assert!(svg.contains(">Ann  Marie</text>"));

    // Text nodes are only kept when some font resolves.
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
    if let Some(usvg::Node::Text(text)) = tree.root().children().first() {
        assert_eq!(text.chunks()[0].text(), "Ann  Marie");
    }
}
