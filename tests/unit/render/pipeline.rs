use super::*;
use crate::foundation::core::{Canvas, Rgb8};

fn surface() -> Surface {
    Surface::new(Canvas::new(60, 80).unwrap()).unwrap()
}

#[test]
fn render_is_a_full_redraw() {
    let fonts = FontSet::load(None);
    let mut s = surface();
    s.fill(Rgb8::from_u32(0x123456));

    render_order(
        &mut s,
        &Background::Transparent,
        &Order::default(),
        RenderMode::Preview,
        &fonts,
    )
    .unwrap();

    // Corners are far from any text.
    assert_eq!(s.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(s.pixel(59, 79), Some([0, 0, 0, 0]));
}

#[test]
fn solid_background_is_painted_first() {
    let fonts = FontSet::load(None);
    let mut s = surface();
    let layout = render_order(
        &mut s,
        &Background::Solid(Rgb8::from_u32(0x96CEB4)),
        &Order::default(),
        RenderMode::Preview,
        &fonts,
    )
    .unwrap();

    assert_eq!(s.pixel(0, 0), Some([0x96, 0xCE, 0xB4, 255]));
    assert!(layout.fits);
}

#[test]
fn missing_background_image_falls_back_to_white() {
    let fonts = FontSet::load(None);
    let mut s = surface();
    let bg = Background::Image(crate::render::background::ImageSource::Path(
        "/nonexistent/mockup.png".into(),
    ));
    render_order(&mut s, &bg, &Order::default(), RenderMode::Preview, &fonts).unwrap();
    assert_eq!(s.pixel(0, 0), Some([255, 255, 255, 255]));
}

#[test]
fn identical_inputs_give_identical_pixels() {
    let fonts = FontSet::load(None);
    let order = Order {
        customer_name: "Ada".into(),
        toasted: true,
        ..Order::default()
    };
    let mut a = surface();
    let mut b = surface();
    render_order(&mut a, &Background::Transparent, &order, RenderMode::Preview, &fonts).unwrap();
    render_order(&mut b, &Background::Transparent, &order, RenderMode::Preview, &fonts).unwrap();
    assert_eq!(a.to_frame().data, b.to_frame().data);
}
