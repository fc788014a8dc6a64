//! Named colour palettes.
//!
//! Every favourite colour maps to a fixed primary/secondary/accent triple.
//! The secondary colour is pale and doubles as the emblem background.

use serde::Serialize;

/// A complete colour triple, each entry a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

impl Palette {
    /// Colour used as the canvas background and to cut gaps into shapes.
    pub fn background(&self) -> &'static str {
        self.secondary
    }
}

impl Default for Palette {
    fn default() -> Self {
        ColorName::default().palette()
    }
}

/// The colours a user can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    Red,
    #[default]
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Pink,
    Cyan,
}

impl ColorName {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Cyan => "cyan",
        }
    }

    /// Parse a colour from its name (case-insensitive, surrounding
    /// whitespace ignored).
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|c| c.name() == lower).copied()
    }

    pub const fn all() -> &'static [Self] {
        &[
            Self::Red,
            Self::Blue,
            Self::Green,
            Self::Yellow,
            Self::Purple,
            Self::Orange,
            Self::Pink,
            Self::Cyan,
        ]
    }

    pub const fn palette(self) -> Palette {
        match self {
            Self::Red => Palette {
                primary: "#ff4d4f",
                secondary: "#fff2f0",
                accent: "#cf1322",
            },
            Self::Blue => Palette {
                primary: "#1890ff",
                secondary: "#f0f5ff",
                accent: "#096dd9",
            },
            Self::Green => Palette {
                primary: "#52c41a",
                secondary: "#f6ffed",
                accent: "#389e0d",
            },
            Self::Yellow => Palette {
                primary: "#fadb14",
                secondary: "#feffe6",
                accent: "#d4b106",
            },
            Self::Purple => Palette {
                primary: "#722ed1",
                secondary: "#f9f0ff",
                accent: "#531dab",
            },
            Self::Orange => Palette {
                primary: "#fa8c16",
                secondary: "#72867d",
                accent: "#d46b08",
            },
            Self::Pink => Palette {
                primary: "#eb2f96",
                secondary: "#fff0f6",
                accent: "#c41d7f",
            },
            Self::Cyan => Palette {
                primary: "#13c2c2",
                secondary: "#e6fffb",
                accent: "#08979c",
            },
        }
    }
}

/// Palette for a colour name; unknown names get the default (blue).
pub fn lookup(name: &str) -> Palette {
    match ColorName::from_name(name) {
        Some(color) => color.palette(),
        None => {
            tracing::debug!(name, "unknown colour, using default palette");
            Palette::default()
        }
    }
}
