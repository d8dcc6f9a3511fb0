use crate::foundation::error::{BagelError, BagelResult};

pub use kurbo::{Rect, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> BagelResult<Self> {
        if width == 0 || height == 0 {
            return Err(BagelError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    pub fn size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Which target a render pass is for.
///
/// Preview is the responsive on-screen canvas; export is the fixed high-resolution surface
/// that becomes the fulfillment artifact. Sizing and vertical bounds differ per mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    Preview,
    Export,
}

/// Straight (non-premultiplied) opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    /// Parse `#RRGGBB` or `#RGB` (leading `#` optional, case-insensitive).
    pub fn from_hex(text: &str) -> BagelResult<Self> {
        let hex = text.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        fn nibble(c: u8) -> Option<u8> {
            (c as char).to_digit(16).map(|v| v as u8)
        }

        let invalid = || BagelError::validation(format!("invalid hex color '{text}'"));
        let bytes = hex.as_bytes();
        match bytes.len() {
            3 => {
                let mut out = [0u8; 3];
                for (slot, &c) in out.iter_mut().zip(bytes) {
                    let v = nibble(c).ok_or_else(invalid)?;
                    *slot = (v << 4) | v;
                }
                Ok(Self::new(out[0], out[1], out[2]))
            }
            6 => {
                let mut out = [0u8; 3];
                for (slot, pair) in out.iter_mut().zip(bytes.chunks_exact(2)) {
                    let hi = nibble(pair[0]).ok_or_else(invalid)?;
                    let lo = nibble(pair[1]).ok_or_else(invalid)?;
                    *slot = (hi << 4) | lo;
                }
                Ok(Self::new(out[0], out[1], out[2]))
            }
            _ => Err(invalid()),
        }
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl serde::Serialize for Rgb8 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgb8 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb8::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
