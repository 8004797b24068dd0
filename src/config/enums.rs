//! Configuration enum types.

use crate::draw::{Color, color};
use log::warn;
use serde::{Deserialize, Serialize};

/// Color specification - a color name, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// fill_color = "white"
///
/// # Hex color
/// border_color = "#1E90FF"
///
/// # Custom RGB color (0-255 per component)
/// fill_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black,
    /// transparent) or a hex string such as `#FFFFFF`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the specification to a [`Color`].
    ///
    /// Names are tried first, then hex notation. Anything else logs a
    /// warning and yields `fallback`.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => color::name_to_color(name)
                .or_else(|| Color::from_hex(name).ok())
                .unwrap_or_else(|| {
                    warn!("Unknown color '{}', using {}", name, fallback);
                    fallback
                }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, ORANGE, RED, WHITE};

    #[test]
    fn names_and_hex_strings_resolve() {
        assert_eq!(ColorSpec::Name("red".into()).to_color_or(BLACK), RED);
        assert_eq!(ColorSpec::Name("#FFFFFF".into()).to_color_or(BLACK), WHITE);
    }

    #[test]
    fn rgb_arrays_resolve() {
        let color = ColorSpec::Rgb([255, 0, 0]).to_color_or(BLACK);
        assert_eq!(color, RED);
    }

    #[test]
    fn unknown_names_use_fallback() {
        assert_eq!(ColorSpec::Name("mauve".into()).to_color_or(ORANGE), ORANGE);
    }
}
