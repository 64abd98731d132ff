use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// An RGBA color as accepted by the menu programs' color flags.
///
/// Colors are written in configuration files as hex strings, either
/// `rrggbb` or `rrggbbaa`, optionally prefixed with `#`. When the alpha
/// channel is omitted it defaults to fully opaque.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    /// Eight lowercase hex digits, `rrggbbaa`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    /// `#rrggbb`, for programs that do not understand an alpha channel.
    #[must_use]
    pub fn to_rgb_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Display for Color {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let digits = value.strip_prefix('#').unwrap_or(value);

        if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(value.to_string()));
        }

        let channel = |index: usize| {
            u8::from_str_radix(&digits[index..index + 2], 16)
                .map_err(|_| Error::InvalidColor(value.to_string()))
        };

        let alpha = if digits.len() == 8 {
            channel(6)?
        } else {
            u8::MAX
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
