//! bagel-tee turns a bagel order into the text layout printed on a t-shirt.
//!
//! The same order drives two outputs: a small live preview (optionally over a shirt mockup)
//! and a 3600×4800 transparent PNG for print.
//!
//! # Pipeline overview
//!
//! 1. **Compile**: `Order -> IngredientList` (display text, colors, join markers, base line)
//! 2. **Layout**: `IngredientList + Canvas + RenderMode -> LayoutParams` (font size, line
//!    height, start and max Y)
//! 3. **Render**: background, then a planned text scene rasterized onto a [`Surface`]
//! 4. **Export** (optional): encode the print surface as PNG and wrap it in a [`CartLineItem`]
//!
//! Steps 1 and 2 are pure; rendering the same inputs twice yields identical pixels.
#![forbid(unsafe_code)]

mod assets;
mod cart;
mod compile;
mod export;
mod foundation;
mod layout;
mod order;
mod render;
mod vocab;

pub use assets::decode::{PreparedImage, decode_image, load_image};
pub use assets::fonts::{FONT_DIR_ENV, FONT_FAMILY, FontSet};
pub use cart::line_item::CartLineItem;
pub use compile::base_line::{base_line_text, indefinite_article};
pub use compile::ingredients::{
    CHEESE_WRAP_MIN_CHARS, IngredientEntry, IngredientList, LINE_BREAK, OUTLINE_MARKER, compile,
};
pub use export::capability::{ExportCapability, ExportHandle, LivePreview, require_export};
pub use export::png::{
    EXPORT_HEIGHT, EXPORT_WIDTH, EncodedImage, Exporter, encode_png, export_canvas,
    export_file_name, export_png,
};
pub use foundation::core::{Canvas, Rect, RenderMode, Rgb8, Size};
pub use foundation::error::{BagelError, BagelResult};
pub use layout::engine::{LayoutParams, compute_layout, min_font_size};
pub use order::model::Order;
pub use order::options::{
    BagelBase, Cheese, Condiment, EggStyle, Meat, NameColor, Shmear, TextStyle, Veggie,
};
pub use order::store::{OrderStore, SubscriptionId};
pub use order::summary::summary;
pub use render::background::{
    Background, FALLBACK_FILL, ImageSource, contain_rect, draw_background,
};
pub use render::pipeline::{render, render_order};
pub use render::scene::{JOIN_SUFFIX, OUTLINE, Outline, TextLine, plan_text};
pub use render::settings::RenderSettings;
pub use render::surface::{FrameRGBA, Surface};
pub use render::svg::{escape_xml, scene_svg};
pub use vocab::table::{
    Category, FALLBACK_BASE_COLOR, FALLBACK_COLOR, OptionKey, VOCABULARY, VocabEntry,
    display_color, display_name, lookup, rendered_name,
};

/// Layout tuning constants.
pub mod constants {
    pub use crate::layout::engine::{
        BASE_EXPORT_SIZE, LINE_HEIGHT_MULTIPLIER, MAX_PREVIEW_SIZE, MIN_EXPORT_SIZE,
        MIN_PREVIEW_SIZE, TIGHT_LINE_HEIGHT_MULTIPLIER,
    };
}
