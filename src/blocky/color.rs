//! Colours and the fixed game palette

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// An RGB colour carried by leaf blocks and unit cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const PACIFIC_POINT: Color = Color::rgb(1, 128, 181);
pub const REAL_RED: Color = Color::rgb(199, 44, 58);
pub const OLD_OLIVE: Color = Color::rgb(138, 151, 71);
pub const DAFFODIL_DELIGHT: Color = Color::rgb(255, 211, 92);

/// Colours a block may be painted or generated with
pub const PALETTE: [Color; 4] = [PACIFIC_POINT, REAL_RED, OLD_OLIVE, DAFFODIL_DELIGHT];

const PALETTE_NAMES: [&str; 4] = ["Pacific Point", "Real Red", "Old Olive", "Daffodil Delight"];

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Human-readable name for palette colours.
    pub fn name(self) -> Option<&'static str> {
        PALETTE
            .iter()
            .position(|&c| c == self)
            .map(|idx| PALETTE_NAMES[idx])
    }

    /// Single-letter glyph used by text renderings of a board.
    pub fn to_char(self) -> char {
        match self.name() {
            Some(name) => name.chars().next().unwrap_or('?'),
            None => '?',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
        }
    }
}

impl FromStr for Color {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");

        if let Some(idx) = PALETTE_NAMES
            .iter()
            .position(|name| name.to_ascii_lowercase() == normalised)
        {
            return Ok(PALETTE[idx]);
        }

        let parse_error = || crate::Error::ParseColor {
            input: s.to_string(),
            expected: "pacific-point, real-red, old-olive, daffodil-delight or #rrggbb".to_string(),
        };

        let hex = normalised.strip_prefix('#').ok_or_else(parse_error)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(parse_error());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| parse_error())
        };
        Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}
