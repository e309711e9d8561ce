//! Cosmetic catalogues: piece (team flag) styles and board color styles.

use ratatui::style::Color;
use tracing::{instrument, warn};

use crate::settings::{DEFAULT_BOARD_STYLE, DEFAULT_PIECE_STYLE};

/// A team style for the player's pieces, drawn as flag stripes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamStyle {
    /// Stable identifier stored in the settings.
    pub id: &'static str,
    /// Name shown in menus.
    pub nation_name: &'static str,
    /// Left, middle and right stripe of the piece.
    pub stripes: [Color; 3],
}

/// Light and dark square colors of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardStyle {
    /// Stable identifier stored in the settings.
    pub id: &'static str,
    /// Name shown in menus.
    pub name: &'static str,
    /// Color of light squares.
    pub light: Color,
    /// Color of dark squares.
    pub dark: Color,
}

const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
const RED: Color = Color::Rgb(0xCE, 0x2B, 0x37);
const BLUE: Color = Color::Rgb(0x00, 0x23, 0x95);

/// Every piece style offered to the player. The first entry is the default.
pub const TEAM_STYLES: &[TeamStyle] = &[
    TeamStyle {
        id: DEFAULT_PIECE_STYLE,
        nation_name: "Classic",
        stripes: [WHITE, WHITE, WHITE],
    },
    TeamStyle {
        id: "italy",
        nation_name: "Italy",
        stripes: [Color::Rgb(0x00, 0x92, 0x46), WHITE, RED],
    },
    TeamStyle {
        id: "france",
        nation_name: "France",
        stripes: [BLUE, WHITE, Color::Rgb(0xED, 0x29, 0x39)],
    },
    TeamStyle {
        id: "germany",
        nation_name: "Germany",
        stripes: [
            Color::Rgb(0x00, 0x00, 0x00),
            Color::Rgb(0xDD, 0x00, 0x00),
            Color::Rgb(0xFF, 0xCE, 0x00),
        ],
    },
    TeamStyle {
        id: "spain",
        nation_name: "Spain",
        stripes: [
            Color::Rgb(0xAA, 0x15, 0x1B),
            Color::Rgb(0xF1, 0xBF, 0x00),
            Color::Rgb(0xAA, 0x15, 0x1B),
        ],
    },
    TeamStyle {
        id: "uk",
        nation_name: "United Kingdom",
        stripes: [Color::Rgb(0x01, 0x21, 0x69), Color::Rgb(0xC8, 0x10, 0x2E), WHITE],
    },
    TeamStyle {
        id: "usa",
        nation_name: "United States",
        stripes: [Color::Rgb(0x3C, 0x3B, 0x6E), WHITE, Color::Rgb(0xB2, 0x22, 0x34)],
    },
];

/// Every board style offered to the player. The first entry is the default.
pub const BOARD_STYLES: &[BoardStyle] = &[
    BoardStyle {
        id: DEFAULT_BOARD_STYLE,
        name: "Wood",
        light: Color::Rgb(0xF0, 0xD9, 0xB5),
        dark: Color::Rgb(0xB5, 0x88, 0x63),
    },
    BoardStyle {
        id: "marble",
        name: "Marble",
        light: Color::Rgb(0xEE, 0xEE, 0xEE),
        dark: Color::Rgb(0x8C, 0x8C, 0x8C),
    },
    BoardStyle {
        id: "forest",
        name: "Forest",
        light: Color::Rgb(0xEE, 0xEE, 0xD2),
        dark: Color::Rgb(0x76, 0x96, 0x56),
    },
    BoardStyle {
        id: "ocean",
        name: "Ocean",
        light: Color::Rgb(0xDE, 0xE3, 0xE6),
        dark: Color::Rgb(0x4B, 0x73, 0x99),
    },
];

impl TeamStyle {
    /// Looks up a style by identifier.
    pub fn find(id: &str) -> Option<&'static TeamStyle> {
        TEAM_STYLES.iter().find(|s| s.id == id)
    }

    /// Looks up a style, falling back to the default for unknown identifiers.
    #[instrument]
    pub fn resolve(id: &str) -> &'static TeamStyle {
        Self::find(id).unwrap_or_else(|| {
            warn!(style_id = id, "Unknown piece style, using default");
            &TEAM_STYLES[0]
        })
    }
}

impl BoardStyle {
    /// Looks up a style by identifier.
    pub fn find(id: &str) -> Option<&'static BoardStyle> {
        BOARD_STYLES.iter().find(|s| s.id == id)
    }

    /// Looks up a style, falling back to the default for unknown identifiers.
    #[instrument]
    pub fn resolve(id: &str) -> &'static BoardStyle {
        Self::find(id).unwrap_or_else(|| {
            warn!(style_id = id, "Unknown board style, using default");
            &BOARD_STYLES[0]
        })
    }
}

/// Comma-separated identifiers, for error messages.
pub fn team_style_ids() -> String {
    TEAM_STYLES.iter().map(|s| s.id).collect::<Vec<_>>().join(", ")
}

/// Comma-separated identifiers, for error messages.
pub fn board_style_ids() -> String {
    BOARD_STYLES.iter().map(|s| s.id).collect::<Vec<_>>().join(", ")
}
