//! TUI module for the interactive dashboard
//!
//! - `dashboard` - the full-screen screen set (chrome, table, modal)
//! - `components` - reusable pieces shared across the view
//! - `theme` / `state` - colors and shared state types

pub mod components;
pub mod dashboard;
pub mod state;
pub mod theme;

pub use dashboard::{Dashboard, DashboardProps};
pub use state::{Notification, NotificationLevel, Pane};
pub use theme::Theme;
