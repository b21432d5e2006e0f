//! Accent colors attached to roles.

use crate::roles::Role;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An sRGB color, written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Error returned when a string is not a `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color '{0}', expected #RRGGBB")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| ParseColorError(s.to_string()))?;
        u32::from_str_radix(digits, 16)
            .map(Color::from_hex)
            .map_err(|_| ParseColorError(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Shade scale for a role's accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RolePalette {
    pub shade_50: Color,
    pub shade_100: Color,
    pub shade_500: Color,
    pub shade_600: Color,
    pub shade_700: Color,
}

const PRIMARY: RolePalette = RolePalette {
    shade_50: Color::from_hex(0xEFF6FF),
    shade_100: Color::from_hex(0xDBEAFE),
    shade_500: Color::from_hex(0x3B82F6),
    shade_600: Color::from_hex(0x2563EB),
    shade_700: Color::from_hex(0x1D4ED8),
};

const SECONDARY: RolePalette = RolePalette {
    shade_50: Color::from_hex(0xF0FDF4),
    shade_100: Color::from_hex(0xDCFCE7),
    shade_500: Color::from_hex(0x10B981),
    shade_600: Color::from_hex(0x059669),
    shade_700: Color::from_hex(0x047857),
};

const ACCENT: RolePalette = RolePalette {
    shade_50: Color::from_hex(0xFFF7ED),
    shade_100: Color::from_hex(0xFFEDD5),
    shade_500: Color::from_hex(0xF97316),
    shade_600: Color::from_hex(0xEA580C),
    shade_700: Color::from_hex(0xC2410C),
};

impl Role {
    /// Color scale used for this role's badges and headers.
    pub const fn palette(&self) -> RolePalette {
        match self {
            Role::OrgAdmin => PRIMARY,
            Role::HeadOfDepartment => SECONDARY,
            Role::Student => ACCENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_display() {
        assert_eq!(Color::from_hex(0x3B82F6).to_string(), "#3B82F6");
        assert_eq!(Color::from_rgb(0, 10, 255).to_string(), "#000AFF");
    }

    #[test]
    fn test_color_parse() {
        assert_eq!("#10b981".parse::<Color>(), Ok(Color::from_hex(0x10B981)));
        assert!("10B981".parse::<Color>().is_err());
        assert!("#10B98".parse::<Color>().is_err());
        assert!("#GGGGGG".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_serde() {
        let json = serde_json::to_string(&Color::from_hex(0xF97316)).unwrap();
        assert_eq!(json, r##""#F97316""##);
        let color: Color = serde_json::from_str(r##""#6B7280""##).unwrap();
        assert_eq!(color, Color::from_hex(0x6B7280));
    }

    #[test]
    fn test_palettes_are_distinct() {
        assert_ne!(Role::OrgAdmin.palette(), Role::HeadOfDepartment.palette());
        assert_ne!(Role::HeadOfDepartment.palette(), Role::Student.palette());
        assert_eq!(Role::Student.palette().shade_700.to_string(), "#C2410C");
    }
}
