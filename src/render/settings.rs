use std::path::PathBuf;

use crate::{assets::fonts::FontSet, render::background::Background};

/// Inputs a render pass needs besides the order itself.
#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    pub background: Background,
    /// Extra font directory. Falls back to `BAGEL_TEE_FONT_DIR` when unset.
    pub font_dir: Option<PathBuf>,
}

impl RenderSettings {
    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    pub fn with_font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.font_dir = Some(dir.into());
        self
    }

    pub fn load_fonts(&self) -> FontSet {
        FontSet::load(self.font_dir.as_deref())
    }
}
