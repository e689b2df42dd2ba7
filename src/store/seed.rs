//! Built-in demo tickets.
//!
//! Used when no data file is configured so the dashboard has something to
//! show out of the box. Ids are stable across runs so `show`, `status`
//! and `rm` can be demoed against them.

use crate::types::{Ticket, TicketStatus};

fn ticket(
    id: &str,
    submitted_by: &str,
    title: &str,
    date_submitted: &str,
    status: TicketStatus,
) -> Ticket {
    Ticket {
        id: id.to_string(),
        submitted_by: submitted_by.to_string(),
        title: title.to_string(),
        date_submitted: date_submitted.to_string(),
        status,
        avatar_ref: format!("avatars/{}.png", submitted_by.to_lowercase().replace(' ', "-")),
    }
}

/// The built-in ticket fixture set.
pub fn seed_tickets() -> Vec<Ticket> {
    use TicketStatus::*;

    vec![
        ticket("dv-1001", "Ada Lovelace", "Login page hangs after SSO redirect", "2025-11-03", Pending),
        ticket("dv-1002", "Grace Hopper", "Export to CSV drops unicode names", "2025-11-04", Open),
        ticket("dv-1003", "Alan Turing", "Password reset email never arrives", "2025-11-04", Resolved),
        ticket("dv-1004", "Katherine Johnson", "Dashboard charts render blank on Safari", "2025-11-05", Open),
        ticket("dv-1005", "Edsger Dijkstra", "Billing page shows stale invoice total", "2025-11-06", Pending),
        ticket("dv-1006", "Barbara Liskov", "Two-factor prompt loops forever", "2025-11-07", Resolved),
        ticket("dv-1007", "Donald Knuth", "Search returns archived projects", "2025-11-08", Other),
        ticket("dv-1008", "Margaret Hamilton", "Webhook retries flood our endpoint", "2025-11-09", Open),
        ticket("dv-1009", "Tim Berners-Lee", "API rate limit header is wrong", "2025-11-10", Pending),
        ticket("dv-1010", "Radia Perlman", "Notification emails sent twice", "2025-11-10", Resolved),
        ticket("dv-1011", "Dennis Ritchie", "Dark mode resets on every reload", "2025-11-11", Open),
        ticket("dv-1012", "Frances Allen", "Team invite link expires too early", "2025-11-12", Pending),
        ticket("dv-1013", "Ken Thompson", "File upload stalls at 99 percent", "2025-11-12", Open),
        ticket("dv-1014", "Hedy Lamarr", "Mobile layout clips the sidebar", "2025-11-13", Other),
        ticket("dv-1015", "John Backus", "Audit log misses deletion events", "2025-11-14", Pending),
        ticket("dv-1016", "Annie Easley", "Timezone wrong in activity feed", "2025-11-15", Resolved),
        ticket("dv-1017", "Claude Shannon", "Keyboard shortcuts conflict with browser", "2025-11-16", Open),
        ticket("dv-1018", "Jean Bartik", "Billing currency cannot be changed", "2025-11-17", Pending),
        ticket("dv-1019", "Linus Torvalds", "Git integration loses branch filter", "2025-11-18", Open),
        ticket("dv-1020", "Sophie Wilson", "PDF export cuts off long tables", "2025-11-19", Pending),
        ticket("dv-1021", "Niklaus Wirth", "Session expires during long form entry", "2025-11-20", Resolved),
        ticket("dv-1022", "Mary Jackson", "Avatar upload rejects valid PNG", "2025-11-21", Other),
        ticket("dv-1023", "Bjarne Stroustrup", "Column sort order not persisted", "2025-11-22", Pending),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique() {
        let tickets = seed_tickets();
        let mut ids: Vec<_> = tickets.iter().map(|t| t.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), tickets.len());
    }

    #[test]
    fn seed_dates_are_valid() {
        for ticket in seed_tickets() {
            assert!(ticket.date().is_some(), "bad date on {}", ticket.id);
        }
    }

    #[test]
    fn seed_spans_multiple_pages_at_default_size() {
        assert!(seed_tickets().len() > 20);
    }
}
