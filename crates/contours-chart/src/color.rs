//! Hex colors.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Invalid color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid color {0:?} (expected #rrggbb or #rgb)")]
pub struct ColorError(pub String);

/// An opaque RGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    /// Muted slate used for contours and text by default.
    pub const SLATE: Color = Color::rgb(0x61, 0x63, 0x75);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| err());
        match hex.len() {
            6 => Ok(Color::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            // #abc is shorthand for #aabbcc
            3 => {
                let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Color::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short() {
        assert_eq!("#616375".parse::<Color>().unwrap(), Color::SLATE);
        assert_eq!("#FFFFFF".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("#f0a".parse::<Color>().unwrap(), Color::rgb(0xff, 0x00, 0xaa));
    }

    #[test]
    fn test_parse_rejects() {
        for bad in ["616375", "#61637", "#gg0000", "", "#", "#+1+2+3"] {
            assert!(bad.parse::<Color>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_display_lowercase() {
        assert_eq!(Color::rgb(0xAB, 0x01, 0xEF).to_string(), "#ab01ef");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Color::SLATE).unwrap();
        assert_eq!(json, "\"#616375\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::SLATE);
        assert!(serde_json::from_str::<Color>("\"red\"").is_err());
    }
}
