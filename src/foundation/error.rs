/// Convenience result type used across the engine.
pub type BagelResult<T> = Result<T, BagelError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum BagelError {
    /// Invalid user-provided order or canvas data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building or rasterizing the text scene.
    #[error("render error: {0}")]
    Render(String),

    /// The runtime could not allocate a drawing surface of the requested size.
    #[error("surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// No export capability has been registered yet.
    #[error("export unavailable: {0}")]
    ExportUnavailable(String),

    /// Errors while encoding the rendered surface.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BagelError {
    /// Build a [`BagelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BagelError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BagelError::SurfaceUnavailable`] value.
    pub fn surface_unavailable(msg: impl Into<String>) -> Self {
        Self::SurfaceUnavailable(msg.into())
    }

    /// Build a [`BagelError::ExportUnavailable`] value.
    pub fn export_unavailable(msg: impl Into<String>) -> Self {
        Self::ExportUnavailable(msg.into())
    }

    /// Build a [`BagelError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`BagelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
