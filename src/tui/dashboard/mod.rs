//! Dashboard view (`deskview dash`)
//!
//! Full-screen screen set: topbar and sidebar chrome, a filterable,
//! paginated ticket table with a pager bar, a toggleable notification
//! panel and a details modal.

pub mod handlers;

use std::sync::Arc;

use iocraft::prelude::*;

use crate::config::Config;
use crate::pager::PageWindow;
use crate::store::{TicketStore, filter_tickets, page_slice};
use crate::tui::components::{
    Footer, NotificationPanel, PagerBar, SearchBox, Sidebar, TicketModal, TicketTable, Topbar,
    modal_shortcuts, notifications_shortcuts, search_shortcuts, table_shortcuts,
};
use crate::tui::state::{Notification, Pane, initial_notifications, unread_count};
use crate::tui::theme::theme;
use crate::types::Ticket;

/// Open the store the dashboard runs on: the configured data file, or the
/// seed set when none is configured or the file fails to load. The
/// dashboard degrades instead of erroring; the CLI commands surface load
/// failures properly.
fn open_dashboard_store(config: &Config) -> TicketStore {
    match config.data_path() {
        Some(path) => TicketStore::load_from_path(&path).unwrap_or_else(|e| {
            tracing::warn!("failed to load {}: {}, using seed data", path.display(), e);
            TicketStore::seeded()
        }),
        None => TicketStore::seeded(),
    }
}

/// Props for the Dashboard component
#[derive(Default, Props)]
pub struct DashboardProps {}

/// Root dashboard component
///
/// Layout:
/// ```text
/// +--------------------------------------------------+
/// | Topbar                                           |
/// +--------+--------------------------------+--------+
/// | Side-  | SearchBox                      | Notif. |
/// | bar    +--------------------------------+ panel  |
/// |        | TicketTable                    | (when  |
/// |        |                                |  open) |
/// |        +--------------------------------+        |
/// |        | PagerBar                       |        |
/// +--------+--------------------------------+--------+
/// | Footer                                           |
/// +--------------------------------------------------+
/// ```
#[component]
pub fn Dashboard<'a>(_props: &DashboardProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let config: State<Config> = hooks.use_state(|| Config::load().unwrap_or_default());
    let store: State<Arc<TicketStore>> = {
        let config = config.read().clone();
        hooks.use_state(move || Arc::new(open_dashboard_store(&config)))
    };

    // View state
    let mut search_query = hooks.use_state(String::new);
    let mut page = hooks.use_state(|| 1usize);
    let mut selected_index = hooks.use_state(|| 0usize);
    let mut active_pane = hooks.use_state(Pane::default);
    let mut panel_open = hooks.use_state(|| false);
    let mut modal_open = hooks.use_state(|| false);
    let mut should_exit = hooks.use_state(|| false);
    let mut notifications: State<Vec<Notification>> = hooks.use_state(initial_notifications);
    let mut data_version = hooks.use_state(|| 0u32);

    let page_size = config.read().page_size;
    let page_range = config.read().page_range;
    let notifications_enabled = config.read().notifications;

    // Filter, then slice to the current page. The page cursor can be
    // stale after a filter change or a deletion; clamped() pulls it back.
    let store_arc = store.read().clone();
    let all_tickets = store_arc.list_all();
    let filtered = filter_tickets(&all_tickets, &search_query.to_string());
    let window = PageWindow::clamped(page.get(), filtered.len(), page_size, page_range);
    if page.get() != window.current_page() {
        page.set(window.current_page());
    }
    let tokens = window.plan();
    let page_tickets: Vec<Ticket> = page_slice(&filtered, &window).to_vec();

    // Same for the row selection within the slice
    if selected_index.get() >= page_tickets.len() && !page_tickets.is_empty() {
        selected_index.set(page_tickets.len() - 1);
    }

    let selected_ticket = page_tickets.get(selected_index.get()).cloned();
    let unread = unread_count(&notifications.read());

    // Keyboard event handling
    hooks.use_terminal_events({
        let store_for_events = store_arc.clone();
        let page_tickets_for_events = page_tickets.clone();
        let total_pages = window.total_pages();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let mut ctx = handlers::DashboardContext {
                    query: &mut search_query,
                    page: &mut page,
                    selected_index: &mut selected_index,
                    active_pane: &mut active_pane,
                    panel_open: &mut panel_open,
                    modal_open: &mut modal_open,
                    should_exit: &mut should_exit,
                    notifications: &mut notifications,
                    data_version: &mut data_version,
                    store: store_for_events.clone(),
                    page_tickets: page_tickets_for_events.clone(),
                    total_pages,
                };
                handlers::handle_key_event(&mut ctx, code, modifiers);
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let shortcuts = if modal_open.get() {
        modal_shortcuts()
    } else if panel_open.get() {
        notifications_shortcuts()
    } else {
        match active_pane.get() {
            Pane::Search => search_shortcuts(),
            Pane::Table => table_shortcuts(),
        }
    };

    let show_panel = panel_open.get() && notifications_enabled;
    let theme = theme();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Topbar(
                filtered_count: filtered.len(),
                total_count: all_tickets.len(),
                unread: unread,
                panel_open: show_panel,
            )

            View(
                flex_grow: 1.0,
                flex_direction: FlexDirection::Row,
                width: 100pct,
            ) {
                Sidebar(active: 1usize)

                View(
                    flex_grow: 1.0,
                    flex_direction: FlexDirection::Column,
                    height: 100pct,
                ) {
                    View(
                        width: 100pct,
                        padding_left: 1,
                        padding_right: 1,
                    ) {
                        SearchBox(
                            value: Some(search_query),
                            page: Some(page),
                            has_focus: active_pane.get() == Pane::Search
                                && !modal_open.get()
                                && !show_panel,
                        )
                    }

                    View(flex_grow: 1.0, width: 100pct) {
                        TicketTable(
                            tickets: page_tickets.clone(),
                            selected_index: selected_index.get(),
                            has_focus: active_pane.get() == Pane::Table
                                && !modal_open.get()
                                && !show_panel,
                            query: search_query.to_string(),
                        )
                    }

                    PagerBar(
                        tokens: tokens.clone(),
                        current_page: window.current_page(),
                        total_pages: window.total_pages(),
                    )
                }

                #(if show_panel {
                    Some(element! {
                        NotificationPanel(
                            notifications: notifications.read().clone(),
                        )
                    })
                } else {
                    None
                })
            }

            Footer(shortcuts: shortcuts)

            #(if modal_open.get() {
                Some(element! {
                    TicketModal(ticket: selected_ticket.clone())
                })
            } else {
                None
            })
        }
    }
}
