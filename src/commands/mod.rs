mod dash;
mod ls;
mod show;
mod status;

pub use dash::cmd_dash;
pub use ls::{LsOptions, cmd_ls};
pub use show::cmd_show;
pub use status::{cmd_rm, cmd_status};

use std::path::PathBuf;

use owo_colors::OwoColorize;

use crate::config::Config;
use crate::error::Result;
use crate::store::TicketStore;
use crate::types::TicketStatus;

/// Open the ticket store from the configured data file, or the built-in
/// seed set when none is configured. Also returns the path so mutating
/// commands know where to write back.
pub fn open_store(config: &Config) -> Result<(TicketStore, Option<PathBuf>)> {
    match config.data_path() {
        Some(path) => {
            let store = TicketStore::load_from_path(&path)?;
            Ok((store, Some(path)))
        }
        None => Ok((TicketStore::seeded(), None)),
    }
}

/// Colorized status badge for plain CLI output.
pub fn format_status(status: TicketStatus) -> String {
    let badge = format!("[{}]", status);
    match status {
        TicketStatus::Pending => badge.yellow().to_string(),
        TicketStatus::Open => badge.cyan().to_string(),
        TicketStatus::Resolved => badge.green().to_string(),
        TicketStatus::Other => badge.dimmed().to_string(),
    }
}
