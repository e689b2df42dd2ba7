//! Single-ticket display command (`deskview show`)

use owo_colors::OwoColorize;

use crate::commands::{format_status, open_store};
use crate::config::Config;
use crate::error::{DeskError, Result};

pub fn cmd_show(id: &str) -> Result<()> {
    let config = Config::load()?;
    let (store, _) = open_store(&config)?;

    let ticket = store
        .get_by_id(id)
        .ok_or_else(|| DeskError::TicketNotFound(id.to_string()))?;

    // "2025-11-03" -> "Nov 3, 2025" when the date parses
    let date = ticket
        .date()
        .map(|d| d.strftime("%b %-d, %Y").to_string())
        .unwrap_or_else(|| ticket.date_submitted.clone());

    println!("{} {}", ticket.id.cyan().bold(), format_status(ticket.status));
    println!("  {}", ticket.title);
    println!("  Submitted by: {}", ticket.submitted_by);
    println!("  Date:         {}", date);
    if !ticket.avatar_ref.is_empty() {
        println!("  Avatar:       {}", ticket.avatar_ref.dimmed());
    }

    Ok(())
}
