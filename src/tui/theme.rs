//! Interface colors for light and dark mode.

use ratatui::style::{Color, Modifier, Style};

/// Chrome colors around the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Screen background.
    pub background: Color,
    /// Body text.
    pub text: Color,
    /// Titles and headers.
    pub title: Color,
    /// Highlighted list entries and the turn clock.
    pub highlight: Color,
    /// Help lines and borders.
    pub muted: Color,
}

impl Theme {
    /// Theme for the given dark-mode flag.
    pub fn new(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                background: Color::Rgb(0x12, 0x12, 0x12),
                text: Color::Rgb(0xE6, 0xE6, 0xE6),
                title: Color::Cyan,
                highlight: Color::Yellow,
                muted: Color::DarkGray,
            }
        } else {
            Self {
                background: Color::Rgb(0xFA, 0xF7, 0xF0),
                text: Color::Rgb(0x20, 0x20, 0x20),
                title: Color::Blue,
                highlight: Color::Rgb(0xB0, 0x60, 0x00),
                muted: Color::Gray,
            }
        }
    }

    /// Base style for text on the background.
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Style for screen titles.
    pub fn title_style(&self) -> Style {
        self.base().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Style for help lines.
    pub fn muted_style(&self) -> Style {
        self.base().fg(self.muted)
    }

    /// Style for the highlighted list entry.
    pub fn highlight_style(&self) -> Style {
        self.base().fg(self.highlight).add_modifier(Modifier::BOLD)
    }
}
