use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DeskError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    #[default]
    Pending,
    Open,
    Resolved,
    Other,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Pending => write!(f, "pending"),
            TicketStatus::Open => write!(f, "open"),
            TicketStatus::Resolved => write!(f, "resolved"),
            TicketStatus::Other => write!(f, "other"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TicketStatus::Pending),
            "open" => Ok(TicketStatus::Open),
            "resolved" => Ok(TicketStatus::Resolved),
            "other" => Ok(TicketStatus::Other),
            _ => Err(DeskError::InvalidStatus(s.to_string())),
        }
    }
}

pub const VALID_STATUSES: &[&str] = &["pending", "open", "resolved", "other"];

/// A support ticket as stored in the data file.
///
/// `date_submitted` is kept as the raw civil date string; [`Ticket::date`]
/// parses it on demand. `avatar_ref` is an opaque reference the dashboard
/// never interprets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,

    #[serde(rename = "submitted-by")]
    pub submitted_by: String,

    pub title: String,

    #[serde(rename = "date-submitted")]
    pub date_submitted: String,

    #[serde(default)]
    pub status: TicketStatus,

    #[serde(rename = "avatar-ref", default)]
    pub avatar_ref: String,
}

impl Ticket {
    /// Parse the submission date, if it is a valid `YYYY-MM-DD` string.
    pub fn date(&self) -> Option<jiff::civil::Date> {
        self.date_submitted.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for s in VALID_STATUSES {
            let parsed: TicketStatus = s.parse().unwrap();
            assert_eq!(parsed.to_string(), *s);
        }
    }

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(
            "Resolved".parse::<TicketStatus>().unwrap(),
            TicketStatus::Resolved
        );
        assert_eq!(
            "PENDING".parse::<TicketStatus>().unwrap(),
            TicketStatus::Pending
        );
    }

    #[test]
    fn status_parse_rejects_unknown() {
        assert!("closed".parse::<TicketStatus>().is_err());
    }

    #[test]
    fn ticket_date_parses_civil_dates() {
        let ticket = Ticket {
            id: "dv-1001".into(),
            submitted_by: "Ada Lovelace".into(),
            title: "Login page hangs".into(),
            date_submitted: "2025-11-03".into(),
            status: TicketStatus::Pending,
            avatar_ref: "avatars/ada.png".into(),
        };
        let date = ticket.date().unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 11);
    }

    #[test]
    fn ticket_date_none_on_garbage() {
        let ticket = Ticket {
            id: "dv-1002".into(),
            submitted_by: "x".into(),
            title: "y".into(),
            date_submitted: "yesterday".into(),
            status: TicketStatus::Open,
            avatar_ref: String::new(),
        };
        assert!(ticket.date().is_none());
    }
}
