//! Keyboard event handlers for the dashboard
//!
//! Keeps the event wiring out of the component body: the dashboard builds
//! a [`DashboardContext`] snapshot per event and dispatches here.

use std::sync::Arc;

use iocraft::prelude::{KeyCode, KeyModifiers, State};

use crate::store::TicketStore;
use crate::tui::state::{Notification, Pane};
use crate::types::{Ticket, TicketStatus};

/// Mutable view of the dashboard state handed to the key handlers
pub struct DashboardContext<'a> {
    pub query: &'a mut State<String>,
    pub page: &'a mut State<usize>,
    pub selected_index: &'a mut State<usize>,
    pub active_pane: &'a mut State<Pane>,
    pub panel_open: &'a mut State<bool>,
    pub modal_open: &'a mut State<bool>,
    pub should_exit: &'a mut State<bool>,
    pub notifications: &'a mut State<Vec<Notification>>,
    /// Bumped after every store mutation to trigger a re-render
    pub data_version: &'a mut State<u32>,

    pub store: Arc<TicketStore>,
    /// The slice currently visible in the table
    pub page_tickets: Vec<Ticket>,
    pub total_pages: usize,
}

/// Main event dispatcher that routes keys to the appropriate handler
pub fn handle_key_event(ctx: &mut DashboardContext<'_>, code: KeyCode, modifiers: KeyModifiers) {
    // Global: Ctrl-Q quits from anywhere
    if code == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
        ctx.should_exit.set(true);
        return;
    }

    // Modal captures everything while open
    if ctx.modal_open.get() {
        handle_modal(ctx, code);
        return;
    }

    if ctx.panel_open.get() {
        handle_panel(ctx, code);
        return;
    }

    match ctx.active_pane.get() {
        Pane::Search => handle_search(ctx, code),
        Pane::Table => handle_table(ctx, code),
    }
}

/// The id of the currently selected ticket, if any
fn selected_id(ctx: &DashboardContext<'_>) -> Option<String> {
    ctx.page_tickets
        .get(ctx.selected_index.get())
        .map(|t| t.id.clone())
}

/// Navigate to `target`. A no-op when the target equals the current page
/// or falls outside `1..=total_pages`.
fn goto_page(ctx: &mut DashboardContext<'_>, target: usize) {
    if target < 1 || target > ctx.total_pages || target == ctx.page.get() {
        return;
    }
    ctx.page.set(target);
    ctx.selected_index.set(0);
}

fn handle_table(ctx: &mut DashboardContext<'_>, code: KeyCode) {
    let rows = ctx.page_tickets.len();
    let current = ctx.page.get();

    match code {
        KeyCode::Char('q') => ctx.should_exit.set(true),
        KeyCode::Char('/') => ctx.active_pane.set(Pane::Search),

        // Row navigation within the page slice
        KeyCode::Char('j') | KeyCode::Down => {
            if rows > 0 && ctx.selected_index.get() + 1 < rows {
                ctx.selected_index.set(ctx.selected_index.get() + 1);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if ctx.selected_index.get() > 0 {
                ctx.selected_index.set(ctx.selected_index.get() - 1);
            }
        }
        KeyCode::Char('g') => ctx.selected_index.set(0),
        KeyCode::Char('G') => ctx.selected_index.set(rows.saturating_sub(1)),

        // Page navigation
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('p') => {
            goto_page(ctx, current.saturating_sub(1));
        }
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('n') => {
            goto_page(ctx, current + 1);
        }
        KeyCode::Char(c @ '1'..='9') => {
            // Direct jump; ellipsis gaps have no key, by design
            let target = (c as u8 - b'0') as usize;
            goto_page(ctx, target);
        }

        KeyCode::Enter => {
            if rows > 0 {
                ctx.modal_open.set(true);
            }
        }
        KeyCode::Char('b') => open_panel(ctx),
        _ => {}
    }
}

fn handle_search(ctx: &mut DashboardContext<'_>, code: KeyCode) {
    match code {
        KeyCode::Esc => {
            ctx.query.set(String::new());
            ctx.page.set(1);
            ctx.active_pane.set(Pane::Table);
        }
        KeyCode::Enter | KeyCode::Tab => ctx.active_pane.set(Pane::Table),
        // Everything else belongs to the TextInput
        _ => {}
    }
}

fn handle_modal(ctx: &mut DashboardContext<'_>, code: KeyCode) {
    match code {
        KeyCode::Esc => ctx.modal_open.set(false),
        KeyCode::Char('r') => {
            if let Some(id) = selected_id(ctx)
                && ctx.store.set_status(&id, TicketStatus::Resolved)
            {
                ctx.data_version.set(ctx.data_version.get() + 1);
            }
        }
        KeyCode::Char('o') => {
            if let Some(id) = selected_id(ctx)
                && ctx.store.set_status(&id, TicketStatus::Open)
            {
                ctx.data_version.set(ctx.data_version.get() + 1);
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = selected_id(ctx)
                && ctx.store.remove(&id)
            {
                ctx.modal_open.set(false);
                ctx.data_version.set(ctx.data_version.get() + 1);
            }
        }
        _ => {}
    }
}

fn handle_panel(ctx: &mut DashboardContext<'_>, code: KeyCode) {
    match code {
        KeyCode::Char('b') | KeyCode::Esc => ctx.panel_open.set(false),
        KeyCode::Char('q') => ctx.should_exit.set(true),
        _ => {}
    }
}

/// Open the notification panel and mark every entry read.
fn open_panel(ctx: &mut DashboardContext<'_>) {
    let mut notifications = ctx.notifications.read().clone();
    for n in &mut notifications {
        n.read = true;
    }
    ctx.notifications.set(notifications);
    ctx.panel_open.set(true);
}
