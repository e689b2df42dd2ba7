//! Substring filtering over the ticket collection.
//!
//! The dashboard and `ls --query` both filter with a case-insensitive
//! substring match across the id, title and submitter fields, then slice
//! the filtered list down to the current page.

use crate::pager::PageWindow;
use crate::types::{Ticket, TicketStatus};

/// Filter tickets by a case-insensitive substring query.
///
/// A blank query returns everything in original order. Matching never
/// reorders: the table keeps the store's ordering regardless of which
/// field matched.
pub fn filter_tickets(tickets: &[Ticket], query: &str) -> Vec<Ticket> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tickets.to_vec();
    }

    tickets
        .iter()
        .filter(|t| {
            t.id.to_lowercase().contains(&needle)
                || t.title.to_lowercase().contains(&needle)
                || t.submitted_by.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Keep only tickets with the given status.
pub fn filter_by_status(tickets: &[Ticket], status: TicketStatus) -> Vec<Ticket> {
    tickets
        .iter()
        .filter(|t| t.status == status)
        .cloned()
        .collect()
}

/// The slice of `tickets` visible on the window's current page.
pub fn page_slice<'a>(tickets: &'a [Ticket], window: &PageWindow) -> &'a [Ticket] {
    let (start, end) = window.page_bounds();
    &tickets[start.min(tickets.len())..end.min(tickets.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::seed_tickets;

    #[test]
    fn blank_query_returns_all() {
        let tickets = seed_tickets();
        assert_eq!(filter_tickets(&tickets, "").len(), tickets.len());
        assert_eq!(filter_tickets(&tickets, "   ").len(), tickets.len());
    }

    #[test]
    fn matches_title_case_insensitively() {
        let tickets = seed_tickets();
        let results = filter_tickets(&tickets, "LOGIN");
        assert!(results.iter().any(|t| t.id == "dv-1001"));
    }

    #[test]
    fn matches_submitter() {
        let tickets = seed_tickets();
        let results = filter_tickets(&tickets, "hopper");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "dv-1002");
    }

    #[test]
    fn matches_id_fragment() {
        let tickets = seed_tickets();
        let results = filter_tickets(&tickets, "1019");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].submitted_by, "Linus Torvalds");
    }

    #[test]
    fn no_match_returns_empty() {
        let tickets = seed_tickets();
        assert!(filter_tickets(&tickets, "zzzzzz").is_empty());
    }

    #[test]
    fn filter_preserves_store_order() {
        let tickets = seed_tickets();
        let results = filter_tickets(&tickets, "dv-10");
        let ids: Vec<_> = results.iter().map(|t| t.id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted, "seed ids are ascending, so order must hold");
    }

    #[test]
    fn status_filter() {
        let tickets = seed_tickets();
        let open = filter_by_status(&tickets, TicketStatus::Open);
        assert!(!open.is_empty());
        assert!(open.iter().all(|t| t.status == TicketStatus::Open));
    }

    #[test]
    fn page_slice_matches_window_bounds() {
        let tickets = seed_tickets();
        let window = PageWindow::clamped(3, tickets.len(), 10, 2);
        let slice = page_slice(&tickets, &window);
        assert_eq!(slice.len(), tickets.len() - 20);
        assert_eq!(slice[0].id, tickets[20].id);
    }

    #[test]
    fn page_slice_is_empty_past_the_end() {
        let tickets = seed_tickets();
        // An unclamped window past the data still slices safely.
        let window = PageWindow::new(9, tickets.len(), 10, 2).unwrap();
        assert!(page_slice(&tickets, &window).is_empty());
    }
}
