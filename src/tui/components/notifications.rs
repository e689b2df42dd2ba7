//! Notification panel component
//!
//! Right-hand panel listing recent notifications with level colors.
//! Toggled from the dashboard; opening it marks everything read.

use iocraft::prelude::*;

use crate::tui::state::Notification;
use crate::tui::theme::theme;

/// Props for the NotificationPanel component
#[derive(Default, Props)]
pub struct NotificationPanelProps {
    /// Entries to display, newest first
    pub notifications: Vec<Notification>,
}

/// Right-hand notification panel
#[component]
pub fn NotificationPanel(props: &NotificationPanelProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 34,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            border_style: BorderStyle::Round,
            border_color: theme.border_focused,
        ) {
            View(height: 1, padding_left: 1) {
                Text(content: "Notifications", color: theme.text, weight: Weight::Bold)
            }

            #(if props.notifications.is_empty() {
                Some(element! {
                    View(
                        flex_grow: 1.0,
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                    ) {
                        Text(content: "All caught up", color: theme.text_dimmed)
                    }
                })
            } else {
                None
            })

            #(props.notifications.iter().map(|n| {
                let color = n.level.color();
                let message = n.message.clone();
                element! {
                    View(
                        width: 100pct,
                        flex_direction: FlexDirection::Row,
                        padding_left: 1,
                        padding_right: 1,
                    ) {
                        View(width: 2, flex_shrink: 0.0) {
                            Text(content: "•", color: color)
                        }
                        View(flex_grow: 1.0) {
                            Text(
                                content: message,
                                color: theme.text,
                                wrap: TextWrap::Wrap,
                            )
                        }
                    }
                }
            }))
        }
    }
}
