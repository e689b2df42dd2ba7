pub mod commands;
pub mod config;
pub mod error;
pub mod pager;
pub mod store;
pub mod tui;
pub mod types;

pub use config::Config;
pub use error::{DeskError, Result};
pub use pager::{PageToken, PageWindow, clamp_page};
pub use store::{TicketStore, filter_by_status, filter_tickets, page_slice, seed_tickets};
pub use types::{Ticket, TicketStatus, VALID_STATUSES};
