//! Named project and label colors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color tag accepted by the API for projects and labels.
///
/// Names outside the known palette decode to [`Color::Other`] and are sent
/// back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Color {
    BerryRed,
    Red,
    Orange,
    Yellow,
    OliveGreen,
    LimeGreen,
    Green,
    MintGreen,
    Teal,
    SkyBlue,
    LightBlue,
    Blue,
    Grape,
    Violet,
    Lavender,
    Magenta,
    Salmon,
    #[default]
    Charcoal,
    Grey,
    Taupe,
    Other(String),
}

impl Color {
    pub const ALL: [Color; 20] = [
        Color::BerryRed,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::OliveGreen,
        Color::LimeGreen,
        Color::Green,
        Color::MintGreen,
        Color::Teal,
        Color::SkyBlue,
        Color::LightBlue,
        Color::Blue,
        Color::Grape,
        Color::Violet,
        Color::Lavender,
        Color::Magenta,
        Color::Salmon,
        Color::Charcoal,
        Color::Grey,
        Color::Taupe,
    ];

    /// Wire name, as sent to and received from the API.
    pub fn as_str(&self) -> &str {
        match self {
            Color::BerryRed => "berry_red",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::OliveGreen => "olive_green",
            Color::LimeGreen => "lime_green",
            Color::Green => "green",
            Color::MintGreen => "mint_green",
            Color::Teal => "teal",
            Color::SkyBlue => "sky_blue",
            Color::LightBlue => "light_blue",
            Color::Blue => "blue",
            Color::Grape => "grape",
            Color::Violet => "violet",
            Color::Lavender => "lavender",
            Color::Magenta => "magenta",
            Color::Salmon => "salmon",
            Color::Charcoal => "charcoal",
            Color::Grey => "grey",
            Color::Taupe => "taupe",
            Color::Other(name) => name,
        }
    }

    /// RGB value the Todoist apps render for this color.
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::BerryRed => (184, 37, 95),
            Color::Red => (220, 76, 62),
            Color::Orange => (199, 113, 0),
            Color::Yellow => (178, 145, 4),
            Color::OliveGreen => (148, 156, 49),
            Color::LimeGreen => (101, 163, 58),
            Color::Green => (54, 147, 7),
            Color::MintGreen => (66, 163, 147),
            Color::Teal => (20, 143, 173),
            Color::SkyBlue => (49, 157, 192),
            Color::LightBlue => (105, 136, 164),
            Color::Blue => (65, 128, 255),
            Color::Grape => (105, 46, 194),
            Color::Violet => (202, 63, 238),
            Color::Lavender => (164, 105, 140),
            Color::Magenta => (224, 80, 149),
            Color::Salmon => (201, 118, 111),
            Color::Charcoal | Color::Other(_) => (128, 128, 128),
            Color::Grey => (153, 153, 153),
            Color::Taupe => (143, 122, 105),
        }
    }
}

impl From<String> for Color {
    fn from(name: String) -> Self {
        Color::ALL
            .iter()
            .find(|c| c.as_str() == name)
            .cloned()
            .unwrap_or(Color::Other(name))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        match color {
            Color::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown color name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color '{0}'")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    /// Case-insensitive; accepts `gray` as an alias of `grey`. Unlike decoding,
    /// names outside the palette are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized == "gray" {
            return Ok(Color::Grey);
        }
        Color::ALL
            .iter()
            .find(|c| c.as_str() == normalized)
            .cloned()
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// Layout used when a project is opened in the Todoist apps.
///
/// Layouts this crate does not know decode to [`ViewStyle::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum ViewStyle {
    #[default]
    List,
    Board,
    Calendar,
    Other(String),
}

impl ViewStyle {
    pub fn as_str(&self) -> &str {
        match self {
            ViewStyle::List => "list",
            ViewStyle::Board => "board",
            ViewStyle::Calendar => "calendar",
            ViewStyle::Other(name) => name,
        }
    }
}

impl From<String> for ViewStyle {
    fn from(name: String) -> Self {
        match name.as_str() {
            "list" => ViewStyle::List,
            "board" => ViewStyle::Board,
            "calendar" => ViewStyle::Calendar,
            _ => ViewStyle::Other(name),
        }
    }
}

impl From<ViewStyle> for String {
    fn from(style: ViewStyle) -> Self {
        match style {
            ViewStyle::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ViewStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
