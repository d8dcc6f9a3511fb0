use base64::Engine as _;

use crate::{
    export::capability::{ExportCapability, require_export},
    foundation::error::{BagelError, BagelResult},
    order::{model::Order, summary::summary},
};

/// Payload handed to the storefront when an order is added to the cart.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Human-readable variant title, e.g. `Sesame • Toasted • Butter`.
    pub variant: String,
    /// The order as JSON.
    pub recipe: String,
    /// Milliseconds since the Unix epoch, supplied by the caller.
    pub timestamp_ms: u64,
    /// Base64 (standard alphabet, no data-URL prefix) PNG of the print artifact.
    pub image_png_base64: String,
}

impl CartLineItem {
    /// Export the artifact and assemble the payload. Fails with
    /// [`BagelError::ExportUnavailable`] when `exporter` is missing.
    #[tracing::instrument(skip_all)]
    pub fn build(
        order: &Order,
        exporter: Option<&dyn ExportCapability>,
        timestamp_ms: u64,
    ) -> BagelResult<Self> {
        let image = require_export(exporter, order)?;
        Ok(Self {
            variant: summary(order),
            recipe: order.to_json()?,
            timestamp_ms,
            image_png_base64: base64::engine::general_purpose::STANDARD.encode(&image.bytes),
        })
    }

    pub fn to_json(&self) -> BagelResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| BagelError::serde(e.to_string()))
    }

    pub fn recipe_order(&self) -> BagelResult<Order> {
        Order::from_json(&self.recipe)
    }

    pub fn image_png(&self) -> BagelResult<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(&self.image_png_base64)
            .map_err(|e| BagelError::serde(format!("invalid image payload: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cart/line_item.rs"]
mod tests;
