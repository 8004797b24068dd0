//! RGBA color type, hex parsing and predefined color constants.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use drawing::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let parsed: Color = "#FF0000".parse().unwrap();
/// assert_eq!(red, parsed);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// Errors produced when parsing a color string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color string is empty")]
    Empty,

    #[error("color '{0}' must have 3, 6 or 8 hex digits")]
    InvalidLength(String),

    #[error("color '{0}' contains a non-hex digit")]
    InvalidDigit(String),
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses a CSS-style hex color: `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// The leading `#` is optional and digits are case-insensitive.
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(input.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| -> u8 {
            // Digits were validated above.
            u8::from_str_radix(&digits[range], 16).unwrap_or(0)
        };

        match digits.len() {
            3 => {
                let expand = |i: usize| channel(i..i + 1) * 17;
                Ok(Self::from_rgb8(expand(0), expand(1), expand(2)))
            }
            6 => Ok(Self::from_rgb8(channel(0..2), channel(2..4), channel(4..6))),
            8 => {
                let mut color = Self::from_rgb8(channel(0..2), channel(2..4), channel(4..6));
                color.a = channel(6..8) as f64 / 255.0;
                Ok(color)
            }
            _ => Err(ColorParseError::InvalidLength(input.to_string())),
        }
    }

    /// Formats the color as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let to_u8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a));
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Maps color name strings to Color values (case-insensitive).
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color {
    r: 1.0,
    g: 0.5,
    b: 0.0,
    a: 1.0,
};

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined white color, the default shape fill.
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color, the default shape border.
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Fully transparent color
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Color::from_hex("#FFFFFF"), Ok(WHITE));
        assert_eq!(Color::from_hex("#000"), Ok(BLACK));
        assert_eq!(Color::from_hex("f00"), Ok(RED));
        assert_eq!(Color::from_hex(" #00ff00 "), Ok(GREEN));
    }

    #[test]
    fn parses_alpha_channel() {
        let color = Color::from_hex("#0000FF80").unwrap();
        assert_eq!(color.b, 1.0);
        assert!((color.a - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Color::from_hex("#"), Err(ColorParseError::Empty));
        assert_eq!(
            Color::from_hex("#12345"),
            Err(ColorParseError::InvalidLength("#12345".to_string()))
        );
        assert_eq!(
            Color::from_hex("#GG0000"),
            Err(ColorParseError::InvalidDigit("#GG0000".to_string()))
        );
    }

    #[test]
    fn hex_formatting_matches_input() {
        assert_eq!(WHITE.to_hex(), "#FFFFFF");
        assert_eq!(ORANGE.to_string(), "#FF8000");
        assert_eq!(TRANSPARENT.to_hex(), "#00000000");
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(name_to_color("Red"), Some(RED));
        assert_eq!(name_to_color("BLACK"), Some(BLACK));
        assert_eq!(name_to_color("teal"), None);
    }
}
