//! Ticket table component
//!
//! Displays one page of tickets with a column header row and selection
//! highlighting. The rows it receives are already filtered and sliced to
//! the current page.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::{Ticket, TicketStatus};

/// Props for the TicketTable component
#[derive(Default, Props)]
pub struct TicketTableProps {
    /// The page slice to display
    pub tickets: Vec<Ticket>,
    /// Index of the selected row within the slice
    pub selected_index: usize,
    /// Whether the table has focus
    pub has_focus: bool,
    /// Query shown in the empty state when nothing matched
    pub query: String,
}

/// One page of tickets with a header row
#[component]
pub fn TicketTable(props: &TicketTableProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    if props.tickets.is_empty() {
        let message = if props.query.trim().is_empty() {
            "No tickets".to_string()
        } else {
            format!("No tickets match \"{}\"", props.query.trim())
        };
        return element! {
            View(
                width: 100pct,
                height: 100pct,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: border_color,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(content: message, color: theme.text_dimmed)
            }
        };
    }

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
        ) {
            // Column headers
            View(
                height: 1,
                width: 100pct,
                flex_direction: FlexDirection::Row,
                padding_left: 1,
                padding_right: 1,
            ) {
                View(width: 2, flex_shrink: 0.0) { Text(content: " ") }
                View(width: 9, flex_shrink: 0.0) {
                    Text(content: "ID", color: theme.text_dimmed, weight: Weight::Bold)
                }
                View(width: 18, flex_shrink: 0.0) {
                    Text(content: "Submitted By", color: theme.text_dimmed, weight: Weight::Bold)
                }
                View(width: 12, flex_shrink: 0.0) {
                    Text(content: "Date", color: theme.text_dimmed, weight: Weight::Bold)
                }
                View(width: 11, flex_shrink: 0.0) {
                    Text(content: "Status", color: theme.text_dimmed, weight: Weight::Bold)
                }
                View(flex_grow: 1.0, overflow: Overflow::Hidden) {
                    Text(content: "Title", color: theme.text_dimmed, weight: Weight::Bold)
                }
            }

            // Ticket rows
            #(props.tickets.iter().enumerate().map(|(i, ticket)| {
                let is_selected = i == props.selected_index;
                element! {
                    TicketRow(
                        ticket: ticket.clone(),
                        is_selected: is_selected,
                        has_focus: props.has_focus && is_selected,
                    )
                }
            }))
        }
    }
}

/// Props for a single ticket row
#[derive(Default, Props)]
pub struct TicketRowProps {
    /// The ticket to display
    pub ticket: Option<Ticket>,
    /// Whether this row is selected
    pub is_selected: bool,
    /// Whether this row has focus
    pub has_focus: bool,
}

/// Single ticket row in the table
#[component]
pub fn TicketRow(props: &TicketRowProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(ticket) = props.ticket.clone() else {
        return element! { View(height: 1) };
    };

    let status_color = theme.status_color(ticket.status);
    let bg_color = if props.is_selected {
        Some(theme.highlight)
    } else {
        None
    };
    let text_color = if props.is_selected {
        theme.highlight_text
    } else {
        theme.text
    };

    let indicator = if props.is_selected { ">" } else { " " };

    let status_str = match ticket.status {
        TicketStatus::Pending => "pend",
        TicketStatus::Open => "open",
        TicketStatus::Resolved => "done",
        TicketStatus::Other => "misc",
    };

    element! {
        View(
            height: 1,
            width: 100pct,
            flex_direction: FlexDirection::Row,
            padding_left: 1,
            padding_right: 1,
            background_color: bg_color,
        ) {
            View(width: 2, flex_shrink: 0.0) {
                Text(content: indicator, color: text_color)
            }

            View(width: 9, flex_shrink: 0.0) {
                Text(
                    content: format!("{:<8}", ticket.id),
                    color: if props.is_selected { theme.highlight_text } else { theme.id_color },
                )
            }

            View(width: 18, flex_shrink: 0.0, overflow: Overflow::Hidden) {
                Text(content: ticket.submitted_by.clone(), color: text_color)
            }

            View(width: 12, flex_shrink: 0.0) {
                Text(content: ticket.date_submitted.clone(), color: text_color)
            }

            View(width: 11, flex_shrink: 0.0) {
                Text(
                    content: format!("[{}]", status_str),
                    color: if props.is_selected { theme.highlight_text } else { status_color },
                )
            }

            View(flex_grow: 1.0, overflow: Overflow::Hidden) {
                Text(content: ticket.title.clone(), color: text_color)
            }
        }
    }
}
