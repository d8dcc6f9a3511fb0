pub mod background;
pub mod pipeline;
pub mod raster;
pub mod scene;
pub mod settings;
pub mod surface;
pub mod svg;
