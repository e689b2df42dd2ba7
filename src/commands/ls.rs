//! Ticket listing command (`deskview ls`)
//!
//! Prints a page of tickets as a table, with the same filter-then-slice
//! pipeline the dashboard uses, and a pager line showing the planned
//! page-number window.

use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::commands::{format_status, open_store};
use crate::config::Config;
use crate::error::Result;
use crate::pager::{PageToken, PageWindow};
use crate::store::{filter_by_status, filter_tickets, page_slice};
use crate::types::{Ticket, TicketStatus};

/// Options for `deskview ls`.
#[derive(Debug, Default)]
pub struct LsOptions {
    pub status: Option<TicketStatus>,
    pub query: Option<String>,
    pub page: usize,
    pub page_size: Option<usize>,
}

#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Submitted By")]
    submitted_by: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Ticket> for TicketRow {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id.clone(),
            submitted_by: ticket.submitted_by.clone(),
            title: ticket.title.clone(),
            date: ticket.date_submitted.clone(),
            status: format_status(ticket.status),
        }
    }
}

pub fn cmd_ls(options: LsOptions) -> Result<()> {
    let config = Config::load()?;
    let (store, _) = open_store(&config)?;

    let mut tickets = store.list_all();
    if let Some(status) = options.status {
        tickets = filter_by_status(&tickets, status);
    }
    if let Some(query) = options.query.as_deref() {
        tickets = filter_tickets(&tickets, query);
    }

    if tickets.is_empty() {
        println!("No tickets found.");
        return Ok(());
    }

    let page_size = options.page_size.unwrap_or(config.page_size);
    let window = PageWindow::clamped(
        options.page.max(1),
        tickets.len(),
        page_size,
        config.page_range,
    );
    let rows: Vec<TicketRow> = page_slice(&tickets, &window).iter().map(Into::into).collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    println!("{}", render_pager_line(&window));

    Ok(())
}

/// Render the planned page window as a one-line pager, e.g.
/// `Page 5/10 (100 tickets) · 1 … 3 4 [5] 6 7 … 10`.
fn render_pager_line(window: &PageWindow) -> String {
    let controls = window
        .plan()
        .iter()
        .map(|token| match token {
            PageToken::Page(n) if *n == window.current_page() => {
                format!("[{}]", n).bold().to_string()
            }
            PageToken::Page(n) => n.to_string(),
            PageToken::Ellipsis => "…".dimmed().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");

    let noun = if window.total_items() == 1 { "ticket" } else { "tickets" };
    format!(
        "Page {}/{} ({} {}) · {}",
        window.current_page(),
        window.total_pages(),
        window.total_items(),
        noun,
        controls
    )
}
