//! Colour type, parsing and shading.

use std::fmt;
use std::str::FromStr;

use crate::error::{GenError, Result};

/// Factor applied to each channel when deriving a shade colour.
pub const SHADE_FACTOR: f64 = 0.7;

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create an opaque colour from unit-range channels.
    ///
    /// Each channel is scaled by 255 and truncated, so `0.95` becomes `242`.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::rgb(unit_channel(r), unit_channel(g), unit_channel(b))
    }

    /// Derive the shade colour: every colour channel scaled by
    /// [`SHADE_FACTOR`] and truncated. The result is always opaque.
    pub fn shade(self) -> Self {
        Self::rgb(
            shade_channel(self.r),
            shade_channel(self.g),
            shade_channel(self.b),
        )
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 | 4 => {
                let mut digits = [255u8; 4];
                for (slot, c) in digits.iter_mut().zip(hex.chars()) {
                    let d = parse_hex_digit(c)?;
                    *slot = d << 4 | d;
                }
                Ok(Self::new(digits[0], digits[1], digits[2], digits[3]))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            8 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = parse_hex_byte(&hex[6..8])?;
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build from an RGBA array.
    pub fn from_rgba(rgba: [u8; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl From<Colour> for image::Rgba<u8> {
    fn from(c: Colour) -> Self {
        image::Rgba(c.to_rgba())
    }
}

impl From<image::Rgba<u8>> for Colour {
    fn from(px: image::Rgba<u8>) -> Self {
        Colour::from_rgba(px.0)
    }
}

impl FromStr for Colour {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

fn unit_channel(v: f64) -> u8 {
    (v * 255.0).clamp(0.0, 255.0) as u8
}

fn shade_channel(c: u8) -> u8 {
    (c as f64 * SHADE_FACTOR) as u8
}

fn invalid_hex(s: &str) -> GenError {
    GenError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| GenError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| GenError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#E64040").unwrap();
        assert_eq!(c, Colour::rgb(230, 64, 64));
    }

    #[test]
    fn test_from_hex_short_forms() {
        assert_eq!(Colour::from_hex("#F00").unwrap(), Colour::rgb(255, 0, 0));
        assert_eq!(
            Colour::from_hex("#F008").unwrap(),
            Colour::new(255, 0, 0, 0x88)
        );
    }

    #[test]
    fn test_from_hex_8digit_no_hash() {
        let c = Colour::from_hex("33732E73").unwrap();
        assert_eq!(c, Colour::new(51, 115, 46, 115));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("").is_err());
        assert!(Colour::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_from_unit_truncates() {
        // 0.95 * 255 = 242.25, 0.30 * 255 = 76.5
        assert_eq!(Colour::from_unit(0.95, 0.30, 0.30), Colour::rgb(242, 76, 76));
        assert_eq!(Colour::from_unit(1.0, 1.0, 0.4), Colour::rgb(255, 255, 102));
        assert_eq!(Colour::from_unit(0.88, 0.46, 0.95), Colour::rgb(224, 117, 242));
    }

    #[test]
    fn test_shade_floors_each_channel() {
        for c in [
            Colour::rgb(242, 76, 76),
            Colour::rgb(51, 178, 255),
            Colour::rgb(1, 2, 3),
            Colour::new(61, 140, 204, 122),
        ] {
            let s = c.shade();
            assert_eq!(s.r, (c.r as f64 * 0.7).floor() as u8);
            assert_eq!(s.g, (c.g as f64 * 0.7).floor() as u8);
            assert_eq!(s.b, (c.b as f64 * 0.7).floor() as u8);
            assert_eq!(s.a, 255);
        }
        assert_eq!(Colour::rgb(64, 33, 99).shade(), Colour::rgb(44, 23, 69));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#FF0000");
        assert_eq!(format!("{}", Colour::new(255, 0, 0, 128)), "#FF000080");
    }

    #[test]
    fn test_rgba_conversions() {
        let c = Colour::new(1, 2, 3, 4);
        let px: image::Rgba<u8> = c.into();
        assert_eq!(px.0, [1, 2, 3, 4]);
        assert_eq!(Colour::from(px), c);
    }
}
