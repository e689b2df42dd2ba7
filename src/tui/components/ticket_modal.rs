//! Ticket details modal
//!
//! Purely presentational: renders the ticket the dashboard hands it.
//! Status changes and deletion are keyed from the dashboard's handlers,
//! this component only shows the hints.

use iocraft::prelude::*;

use crate::tui::components::{ModalContainer, ModalOverlay};
use crate::tui::theme::theme;
use crate::types::Ticket;

/// Props for the TicketModal component
#[derive(Default, Props)]
pub struct TicketModalProps {
    /// The ticket to present
    pub ticket: Option<Ticket>,
}

/// Details modal for the selected ticket
#[component]
pub fn TicketModal(props: &TicketModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(ticket) = props.ticket.clone() else {
        return element! { View() }.into_any();
    };

    // "2025-11-03" -> "Nov 3, 2025" when the date parses
    let date = ticket
        .date()
        .map(|d| d.strftime("%b %-d, %Y").to_string())
        .unwrap_or_else(|| ticket.date_submitted.clone());

    let status_color = theme.status_color(ticket.status);

    element! {
        ModalOverlay(show_backdrop: true) {
            ModalContainer(
                title: format!("Ticket {}", ticket.id),
                footer_text: "r Resolve · o Reopen · d Delete".to_string(),
            ) {
                View(height: 1) {
                    Text(content: ticket.title.clone(), color: theme.text, weight: Weight::Bold)
                }
                View(height: 1)
                View(height: 1, flex_direction: FlexDirection::Row) {
                    Text(content: "Status:       ", color: theme.text_dimmed)
                    Text(content: format!("[{}]", ticket.status), color: status_color)
                }
                View(height: 1, flex_direction: FlexDirection::Row) {
                    Text(content: "Submitted by: ", color: theme.text_dimmed)
                    Text(content: ticket.submitted_by.clone(), color: theme.text)
                }
                View(height: 1, flex_direction: FlexDirection::Row) {
                    Text(content: "Date:         ", color: theme.text_dimmed)
                    Text(content: date, color: theme.text)
                }
                #(if ticket.avatar_ref.is_empty() {
                    None
                } else {
                    Some(element! {
                        View(height: 1, flex_direction: FlexDirection::Row) {
                            Text(content: "Avatar:       ", color: theme.text_dimmed)
                            Text(content: ticket.avatar_ref.clone(), color: theme.text_dimmed)
                        }
                    })
                })
            }
        }
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TicketStatus;

    fn sample_ticket() -> Ticket {
        Ticket {
            id: "dv-1001".into(),
            submitted_by: "Ada Lovelace".into(),
            title: "Login page hangs".into(),
            date_submitted: "2025-11-03".into(),
            status: TicketStatus::Pending,
            avatar_ref: "avatars/ada.png".into(),
        }
    }

    #[test]
    fn props_default_has_no_ticket() {
        let props = TicketModalProps::default();
        assert!(props.ticket.is_none());
    }

    #[test]
    fn both_render_paths_erase_to_any_element() {
        // The empty and populated branches must meet at the same type.
        let empty: AnyElement<'static> = element!(TicketModal).into_any();
        let full: AnyElement<'static> =
            element!(TicketModal(ticket: Some(sample_ticket()))).into_any();
        drop((empty, full));
    }
}
