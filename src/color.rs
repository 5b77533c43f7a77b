//! Color parsing and formatting.
//!
//! Configuration and reporting use the `#rrggbb` hex form; internally colors
//! are [`palette::Srgb<u8>`] triples, widened to [`image::Rgba<u8>`] when
//! used as a canvas fill.

use image::Rgba;
use palette::Srgb;

use crate::error::{Error, Result};

/// Fully transparent fill, the default canvas for padding.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Parses a `#rrggbb` (or `rrggbb`/`#rgb`) hex string.
pub fn parse_hex(s: &str) -> Result<Srgb<u8>> {
    s.parse::<Srgb<u8>>()
        .map_err(|_| Error::InvalidColor(s.to_string()))
}

/// Formats a color as a `#rrggbb` hex string.
pub fn format_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Widens an opaque RGB color to an RGBA canvas fill.
pub fn opaque(color: Srgb<u8>) -> Rgba<u8> {
    Rgba([color.red, color.green, color.blue, 255])
}

/// Serde adapter for `Srgb<u8>` fields stored as hex strings.
pub mod hex {
    use palette::Srgb;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn serialize<S: Serializer>(color: &Srgb<u8>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Srgb<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_hex(&s).map_err(D::Error::custom)
    }
}

/// Serde adapter for optional hex color fields.
pub mod hex_opt {
    use palette::Srgb;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn serialize<S: Serializer>(
        color: &Option<Srgb<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match color {
            Some(c) => serializer.serialize_some(&super::format_hex(*c)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Srgb<u8>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => super::parse_hex(&s).map(Some).map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}
