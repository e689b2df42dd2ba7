//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "Tab", "Enter")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Open")
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    /// List of keyboard shortcuts to display
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts for the ticket table
pub fn table_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("j/k", "Row"),
        Shortcut::new("h/l", "Page"),
        Shortcut::new("1-9", "Jump"),
        Shortcut::new("/", "Search"),
        Shortcut::new("Enter", "Details"),
        Shortcut::new("b", "Notifications"),
        Shortcut::new("q", "Quit"),
    ]
}

/// Shortcuts for search mode
pub fn search_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("Enter", "Apply"),
        Shortcut::new("Tab", "Exit Search"),
        Shortcut::new("Esc", "Clear & Exit"),
    ]
}

/// Shortcuts for the details modal
pub fn modal_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("r", "Resolve"),
        Shortcut::new("o", "Reopen"),
        Shortcut::new("d", "Delete"),
        Shortcut::new("Esc", "Close"),
    ]
}

/// Shortcuts while the notification panel is open
pub fn notifications_shortcuts() -> Vec<Shortcut> {
    vec![Shortcut::new("b", "Close Panel"), Shortcut::new("q", "Quit")]
}
