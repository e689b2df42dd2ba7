//! Theme system for TUI colors and styles
//!
//! Color constants are kept consistent with the plain CLI output
//! (commands/mod.rs).

use iocraft::prelude::Color;

use crate::types::TicketStatus;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors (consistent with the CLI badges)
    pub status_pending: Color,
    pub status_open: Color,
    pub status_resolved: Color,
    pub status_other: Color,

    // Chrome colors
    pub topbar: Color,
    pub sidebar: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub id_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        let gray = Color::Rgb {
            r: 120,
            g: 120,
            b: 120,
        };
        Self {
            status_pending: Color::Yellow,
            status_open: Color::Cyan,
            status_resolved: Color::Green,
            status_other: gray,

            topbar: Color::Blue,
            sidebar: Color::Rgb {
                r: 40,
                g: 40,
                b: 48,
            },
            border: gray,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: gray,
            highlight: Color::Blue,
            highlight_text: Color::White,
            id_color: Color::Cyan,
        }
    }
}

impl Theme {
    /// Get the color for a ticket status
    pub fn status_color(&self, status: TicketStatus) -> Color {
        match status {
            TicketStatus::Pending => self.status_pending,
            TicketStatus::Open => self.status_open,
            TicketStatus::Resolved => self.status_resolved,
            TicketStatus::Other => self.status_other,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
