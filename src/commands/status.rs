//! Mutating ticket commands (`deskview status`, `deskview rm`)

use owo_colors::OwoColorize;

use crate::commands::{format_status, open_store};
use crate::config::Config;
use crate::error::{DeskError, Result};
use crate::types::TicketStatus;

pub fn cmd_status(id: &str, status: TicketStatus) -> Result<()> {
    let config = Config::load()?;
    let (store, path) = open_store(&config)?;

    if !store.set_status(id, status) {
        return Err(DeskError::TicketNotFound(id.to_string()));
    }

    match path {
        Some(path) => store.save_to_path(&path)?,
        None => println!(
            "{}",
            "note: running on seed data, change not persisted".dimmed()
        ),
    }

    println!("{} {}", id.cyan(), format_status(status));
    Ok(())
}

pub fn cmd_rm(id: &str) -> Result<()> {
    let config = Config::load()?;
    let (store, path) = open_store(&config)?;

    if !store.remove(id) {
        return Err(DeskError::TicketNotFound(id.to_string()));
    }

    match path {
        Some(path) => store.save_to_path(&path)?,
        None => println!(
            "{}",
            "note: running on seed data, change not persisted".dimmed()
        ),
    }

    println!("removed {}", id.cyan());
    Ok(())
}
