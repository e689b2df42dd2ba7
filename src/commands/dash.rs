//! Dashboard command (`deskview dash`)
//!
//! Launches the full-screen dashboard TUI.

use iocraft::prelude::*;

use crate::error::{DeskError, Result};
use crate::tui::Dashboard;

/// Launch the dashboard TUI.
pub fn cmd_dash() -> Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        return Err(DeskError::Other(
            "the dashboard needs a terminal; try `deskview ls` instead".into(),
        ));
    }

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| DeskError::Other(format!("Failed to create runtime: {}", e)))?;

    rt.block_on(async {
        element!(Dashboard)
            .fullscreen()
            .await
            .map_err(|e| DeskError::Other(format!("TUI error: {}", e)))
    })
}
