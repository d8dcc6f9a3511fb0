use crate::{
    assets::fonts::FontSet,
    compile::ingredients::compile,
    export::png::{EncodedImage, Exporter},
    foundation::{
        core::{Canvas, RenderMode},
        error::{BagelError, BagelResult},
    },
    layout::engine::{LayoutParams, compute_layout},
    order::model::Order,
    render::{
        background::Background, pipeline::render, settings::RenderSettings, surface::Surface,
    },
};

/// Something that can produce the print artifact for an order.
pub trait ExportCapability {
    fn try_export(&self, order: &Order) -> BagelResult<EncodedImage>;
}

impl ExportCapability for Exporter {
    fn try_export(&self, order: &Order) -> BagelResult<EncodedImage> {
        self.export(order)
    }
}

/// Export handle lent out by a [`LivePreview`]. Shares the preview's fonts.
#[derive(Clone, Debug)]
pub struct ExportHandle {
    exporter: Exporter,
}

impl ExportCapability for ExportHandle {
    fn try_export(&self, order: &Order) -> BagelResult<EncodedImage> {
        self.exporter.export(order)
    }
}

/// The live configurator canvas. Every order change is a full redraw.
#[derive(Debug)]
pub struct LivePreview {
    surface: Surface,
    settings: RenderSettings,
    fonts: FontSet,
    layout: Option<LayoutParams>,
}

impl LivePreview {
    pub fn new(canvas: Canvas, settings: RenderSettings) -> BagelResult<Self> {
        let fonts = settings.load_fonts();
        Self::with_fonts(canvas, settings, fonts)
    }

    pub fn with_fonts(canvas: Canvas, settings: RenderSettings, fonts: FontSet) -> BagelResult<Self> {
        Ok(Self {
            surface: Surface::new(canvas)?,
            settings,
            fonts,
            layout: None,
        })
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Layout of the most recent redraw.
    pub fn layout(&self) -> Option<LayoutParams> {
        self.layout
    }

    #[tracing::instrument(skip_all)]
    pub fn on_order_changed(&mut self, order: &Order) -> BagelResult<LayoutParams> {
        let list = compile(order);
        let layout = compute_layout(
            &list,
            self.surface.canvas(),
            RenderMode::Preview,
            order.has_name(),
        );
        render(
            &mut self.surface,
            &self.settings.background,
            order,
            &list,
            &layout,
            RenderMode::Preview,
            &self.fonts,
        )?;
        self.layout = Some(layout);
        Ok(layout)
    }

    /// Print-resolution exporter. The mockup background stays on the preview; exports are
    /// transparent.
    pub fn export_handle(&self) -> ExportHandle {
        let settings = RenderSettings {
            background: Background::Transparent,
            font_dir: self.settings.font_dir.clone(),
        };
        ExportHandle {
            exporter: Exporter::with_fonts(settings, self.fonts.clone()),
        }
    }
}

/// Export through `capability`, or fail when no preview has registered one.
pub fn require_export(
    capability: Option<&dyn ExportCapability>,
    order: &Order,
) -> BagelResult<EncodedImage> {
    capability
        .ok_or_else(|| BagelError::export_unavailable("no export capability is registered"))?
        .try_export(order)
}

#[cfg(test)]
#[path = "../../tests/unit/export/capability.rs"]
mod tests;
