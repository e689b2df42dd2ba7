//! In-memory ticket store.
//!
//! Holds the ticket collection behind a read/write lock and exposes the
//! operations the views drive: list, lookup, status change, removal.
//! Persistence is a plain JSON file; when none is configured the store
//! starts from the built-in seed set.

pub mod filter;
pub mod seed;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use parking_lot::RwLock;

use crate::error::{DeskError, Result};
use crate::types::{Ticket, TicketStatus};

pub use filter::{filter_by_status, filter_tickets, page_slice};
pub use seed::seed_tickets;

#[derive(Debug, Default)]
pub struct TicketStore {
    tickets: RwLock<Vec<Ticket>>,
}

impl TicketStore {
    /// Build a store from a ticket list, rejecting duplicate ids.
    pub fn new(tickets: Vec<Ticket>) -> Result<Self> {
        let mut seen = HashSet::new();
        for ticket in &tickets {
            if !seen.insert(ticket.id.as_str()) {
                return Err(DeskError::DuplicateId(ticket.id.clone()));
            }
        }
        Ok(Self {
            tickets: RwLock::new(tickets),
        })
    }

    /// Store preloaded with the built-in demo tickets.
    pub fn seeded() -> Self {
        Self {
            tickets: RwLock::new(seed::seed_tickets()),
        }
    }

    /// Load a store from a JSON ticket file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let tickets: Vec<Ticket> = serde_json::from_str(&raw)?;
        tracing::debug!(count = tickets.len(), path = %path.display(), "loaded tickets");
        Self::new(tickets)
    }

    /// Write the current tickets back out as JSON.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let tickets = self.tickets.read();
        let raw = serde_json::to_string_pretty(&*tickets)?;
        fs::write(path, raw)?;
        Ok(())
    }

    /// Every ticket, in store order.
    pub fn list_all(&self) -> Vec<Ticket> {
        self.tickets.read().clone()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Ticket> {
        self.tickets.read().iter().find(|t| t.id == id).cloned()
    }

    /// Set a ticket's status. Returns false when the id is unknown.
    pub fn set_status(&self, id: &str, status: TicketStatus) -> bool {
        let mut tickets = self.tickets.write();
        match tickets.iter_mut().find(|t| t.id == id) {
            Some(ticket) => {
                ticket.status = status;
                true
            }
            None => false,
        }
    }

    /// Remove a ticket. Returns false when the id is unknown.
    pub fn remove(&self, id: &str) -> bool {
        let mut tickets = self.tickets.write();
        let before = tickets.len();
        tickets.retain(|t| t.id != id);
        tickets.len() != before
    }

    pub fn len(&self) -> usize {
        self.tickets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.read().is_empty()
    }
}
