//! Palette and theme records

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uismith_color::Color;

use crate::error::ThemeError;

/// Color role keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum PaletteRole {
    Background,
    Foreground,
    TitleForeground,
    BodyForeground,
    Accent,
    Border,
}

impl PaletteRole {
    pub const ALL: [PaletteRole; 6] = [
        PaletteRole::Background,
        PaletteRole::Foreground,
        PaletteRole::TitleForeground,
        PaletteRole::BodyForeground,
        PaletteRole::Accent,
        PaletteRole::Border,
    ];

    /// Field name used in serialized themes.
    pub fn key(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::TitleForeground => "titleForeground",
            Self::BodyForeground => "bodyForeground",
            Self::Accent => "accent",
            Self::Border => "border",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::TitleForeground => "title foreground",
            Self::BodyForeground => "body foreground",
            Self::Accent => "accent",
            Self::Border => "border",
        }
    }
}

impl fmt::Display for PaletteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaletteRole {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let role = match s {
            "background" | "bg" => Self::Background,
            "foreground" | "fg" => Self::Foreground,
            "titleForeground" | "title-foreground" | "titleFg" | "title" => Self::TitleForeground,
            "bodyForeground" | "body-foreground" | "bodyFg" | "body" => Self::BodyForeground,
            "accent" => Self::Accent,
            "border" => Self::Border,
            _ => {
                return Err(ThemeError::UnknownName {
                    kind: "palette role",
                    name: s.to_string(),
                })
            }
        };
        Ok(role)
    }
}

/// The six color roles checked for contrast.
///
/// All fields are required. Deserialization rejects unknown keys and accepts
/// the short legacy names (`bg`, `fg`, `titleFg`, `bodyFg`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Palette {
    #[serde(alias = "bg")]
    pub background: Color,
    #[serde(alias = "fg")]
    pub foreground: Color,
    #[serde(alias = "titleFg")]
    pub title_foreground: Color,
    #[serde(alias = "bodyFg")]
    pub body_foreground: Color,
    pub accent: Color,
    pub border: Color,
}

impl Palette {
    pub fn get(&self, role: PaletteRole) -> Color {
        match role {
            PaletteRole::Background => self.background,
            PaletteRole::Foreground => self.foreground,
            PaletteRole::TitleForeground => self.title_foreground,
            PaletteRole::BodyForeground => self.body_foreground,
            PaletteRole::Accent => self.accent,
            PaletteRole::Border => self.border,
        }
    }

    pub fn set(&mut self, role: PaletteRole, color: Color) {
        match role {
            PaletteRole::Background => self.background = color,
            PaletteRole::Foreground => self.foreground = color,
            PaletteRole::TitleForeground => self.title_foreground = color,
            PaletteRole::BodyForeground => self.body_foreground = color,
            PaletteRole::Accent => self.accent = color,
            PaletteRole::Border => self.border = color,
        }
    }

    pub fn with(mut self, role: PaletteRole, color: Color) -> Self {
        self.set(role, color);
        self
    }

    /// Roles whose color differs from `other`, in declaration order.
    pub fn diff(&self, other: &Palette) -> Vec<PaletteRole> {
        PaletteRole::ALL
            .into_iter()
            .filter(|&role| self.get(role) != other.get(role))
            .collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Theme::default().palette()
    }
}

/// Footer fill: either see-through or a solid color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FooterBackground {
    #[default]
    Transparent,
    Solid(Color),
}

impl fmt::Display for FooterBackground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transparent => f.write_str("transparent"),
            Self::Solid(color) => write!(f, "{color}"),
        }
    }
}

impl FromStr for FooterBackground {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("transparent") {
            Ok(Self::Transparent)
        } else {
            Ok(Self::Solid(Color::parse(s)?))
        }
    }
}

impl Serialize for FooterBackground {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FooterBackground {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A full editor theme: the contrast-checked palette plus the footer fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Theme {
    #[serde(alias = "bg")]
    pub background: Color,
    #[serde(alias = "fg")]
    pub foreground: Color,
    #[serde(alias = "titleFg")]
    pub title_foreground: Color,
    #[serde(alias = "bodyFg")]
    pub body_foreground: Color,
    pub accent: Color,
    pub border: Color,
    #[serde(alias = "footerBg", default)]
    pub footer_background: FooterBackground,
}

impl Theme {
    pub fn palette(&self) -> Palette {
        Palette {
            background: self.background,
            foreground: self.foreground,
            title_foreground: self.title_foreground,
            body_foreground: self.body_foreground,
            accent: self.accent,
            border: self.border,
        }
    }

    /// Replace the six palette colors, keeping the footer fill.
    pub fn with_palette(self, palette: Palette) -> Self {
        Self {
            background: palette.background,
            foreground: palette.foreground,
            title_foreground: palette.title_foreground,
            body_foreground: palette.body_foreground,
            accent: palette.accent,
            border: palette.border,
            footer_background: self.footer_background,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_hex(0x0f172a),
            foreground: Color::from_hex(0xe2e8f0),
            title_foreground: Color::from_hex(0xf8fafc),
            body_foreground: Color::from_hex(0xcbd5e1),
            accent: Color::from_hex(0x22c55e),
            border: Color::from_hex(0x334155),
            footer_background: FooterBackground::Transparent,
        }
    }
}

impl From<Theme> for Palette {
    fn from(theme: Theme) -> Self {
        theme.palette()
    }
}
