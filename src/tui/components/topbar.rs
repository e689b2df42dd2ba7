//! Topbar component
//!
//! Displays the application title, the visible/total ticket counts and the
//! notification bell with its unread count.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Topbar component
#[derive(Default, Props)]
pub struct TopbarProps {
    /// Count of tickets matching the current filter
    pub filtered_count: usize,
    /// Count of all tickets in the store
    pub total_count: usize,
    /// Unread notifications, shown next to the bell
    pub unread: usize,
    /// Whether the notification panel is open
    pub panel_open: bool,
}

/// Topbar showing title, counts and the notification bell
#[component]
pub fn Topbar(props: &TopbarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let counts = if props.filtered_count == props.total_count {
        format!("{} tickets", props.total_count)
    } else {
        format!("{} of {} tickets", props.filtered_count, props.total_count)
    };

    let bell = if props.unread > 0 {
        format!("({}) [b]", props.unread)
    } else {
        "[b]".to_string()
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.topbar,
        ) {
            Text(
                content: "Deskview - Support Tickets",
                color: theme.text,
                weight: Weight::Bold,
            )
            View(flex_direction: FlexDirection::Row, gap: 2) {
                Text(content: counts, color: theme.text_dimmed)
                Text(
                    content: bell,
                    color: if props.panel_open || props.unread > 0 {
                        theme.text
                    } else {
                        theme.text_dimmed
                    },
                    weight: if props.unread > 0 { Weight::Bold } else { Weight::Normal },
                )
            }
        }
    }
}
