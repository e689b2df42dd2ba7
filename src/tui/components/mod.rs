//! Shared TUI components
//!
//! Reusable pieces of the dashboard: chrome (topbar, sidebar, footer),
//! the ticket table and pager, the notification panel and modal plumbing.

pub mod footer;
pub mod modal_container;
pub mod modal_overlay;
pub mod notifications;
pub mod pager_bar;
pub mod search_box;
pub mod sidebar;
pub mod ticket_modal;
pub mod ticket_table;
pub mod topbar;

pub use footer::{
    Footer, FooterProps, Shortcut, modal_shortcuts, notifications_shortcuts, search_shortcuts,
    table_shortcuts,
};
pub use modal_container::{ModalContainer, ModalContainerProps};
pub use modal_overlay::{MODAL_BACKDROP, ModalOverlay, ModalOverlayProps};
pub use notifications::{NotificationPanel, NotificationPanelProps};
pub use pager_bar::{PagerBar, PagerBarProps};
pub use search_box::{SearchBox, SearchBoxProps};
pub use sidebar::{Sidebar, SidebarProps};
pub use ticket_modal::{TicketModal, TicketModalProps};
pub use ticket_table::{TicketRow, TicketRowProps, TicketTable, TicketTableProps};
pub use topbar::{Topbar, TopbarProps};
