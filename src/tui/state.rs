//! Shared state types for the dashboard view

use iocraft::prelude::Color;

/// Active pane in the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    Search,
    #[default]
    Table,
}

/// Severity level for notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Success,
}

impl NotificationLevel {
    pub fn color(&self) -> Color {
        match self {
            NotificationLevel::Info => Color::Cyan,
            NotificationLevel::Warning => Color::Yellow,
            NotificationLevel::Success => Color::Green,
        }
    }
}

/// An entry in the notification panel
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub read: bool,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
            read: false,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Warning)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Success)
    }
}

/// Count of unread notifications, shown on the topbar bell.
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

/// Notifications shown on first launch.
pub fn initial_notifications() -> Vec<Notification> {
    vec![
        Notification::warning("3 tickets have been pending for over a week"),
        Notification::info("Weekly summary is ready"),
        Notification::success("Data file loaded"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unread_count_ignores_read_entries() {
        let mut notifications = initial_notifications();
        assert_eq!(unread_count(&notifications), notifications.len());
        for n in &mut notifications {
            n.read = true;
        }
        assert_eq!(unread_count(&notifications), 0);
    }
}
