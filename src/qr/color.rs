//! Two-tone colors for rendered symbols

use crate::error::{Error, Result};
use image::Rgb;
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color used for the dark or light modules of a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub [u8; 3]);

impl Color {
    /// Pure black, the default fill
    pub const BLACK: Self = Self([0x00, 0x00, 0x00]);
    /// Pure white, the default background
    pub const WHITE: Self = Self([0xFF, 0xFF, 0xFF]);

    fn named(name: &str) -> Option<Self> {
        let rgb = match name {
            "black" => [0x00, 0x00, 0x00],
            "white" => [0xFF, 0xFF, 0xFF],
            "red" => [0xFF, 0x00, 0x00],
            "green" => [0x00, 0x80, 0x00],
            "blue" => [0x00, 0x00, 0xFF],
            "gray" | "grey" => [0x80, 0x80, 0x80],
            "yellow" => [0xFF, 0xFF, 0x00],
            "cyan" => [0x00, 0xFF, 0xFF],
            "magenta" => [0xFF, 0x00, 0xFF],
            _ => return None,
        };
        Some(Self(rgb))
    }

    fn hex(digits: &str) -> Option<Self> {
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match digits.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                Some(Self([channel(0)?, channel(2)?, channel(4)?]))
            }
            3 => {
                // #rgb expands each nibble, so #f80 == #ff8800
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .ok()
                        .map(|v| v * 0x11)
                };
                Some(Self([channel(0)?, channel(1)?, channel(2)?]))
            }
            _ => None,
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        let parsed = match trimmed.strip_prefix('#') {
            Some(digits) => Self::hex(digits),
            None => Self::named(&trimmed.to_ascii_lowercase()),
        };
        parsed.ok_or_else(|| Error::InvalidColor(value.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb(color.0)
    }
}
