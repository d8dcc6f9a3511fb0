use std::cell::Cell;

use super::*;
use crate::{export::png::export_canvas, foundation::core::Rgb8};

struct FakeExport {
    calls: Cell<u32>,
}

impl ExportCapability for FakeExport {
    fn try_export(&self, _order: &Order) -> BagelResult<EncodedImage> {
        self.calls.set(self.calls.get() + 1);
        Ok(EncodedImage {
            width: 1,
            height: 1,
            bytes: vec![1, 2, 3],
        })
    }
}

fn preview(settings: RenderSettings) -> LivePreview {
    LivePreview::with_fonts(Canvas::new(55, 73).unwrap(), settings, FontSet::load(None)).unwrap()
}

#[test]
fn missing_capability_is_an_explicit_error() {
    let err = require_export(None, &Order::default()).unwrap_err();
    assert!(matches!(err, BagelError::ExportUnavailable(_)));
}

#[test]
fn registered_capability_is_used() {
    let fake = FakeExport { calls: Cell::new(0) };
    let img = require_export(Some(&fake), &Order::default()).unwrap();
    assert_eq!(img.bytes, [1, 2, 3]);
    assert_eq!(fake.calls.get(), 1);
}

#[test]
fn order_change_redraws_and_records_layout() {
    let mut p = preview(RenderSettings::default().with_background(Background::Solid(Rgb8::WHITE)));
    assert_eq!(p.layout(), None);

    let layout = p.on_order_changed(&Order::default()).unwrap();
    assert_eq!(p.layout(), Some(layout));
    assert_eq!(p.surface().pixel(0, 0), Some([255, 255, 255, 255]));
}

#[test]
fn export_handle_is_print_sized_and_transparent() {
    let p = preview(RenderSettings::default().with_background(Background::Solid(Rgb8::WHITE)));
    let handle = p.export_handle();
    assert_eq!(handle.exporter.canvas(), export_canvas());
    assert!(matches!(
        handle.exporter.settings().background,
        Background::Transparent
    ));
}
