//! TicketStore integration tests
//!
//! Exercises the JSON load/save round trip and the store operations the
//! dashboard and CLI drive.

use deskview::store::{TicketStore, seed_tickets};
use deskview::types::{Ticket, TicketStatus};

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tickets.json");

    let store = TicketStore::seeded();
    store.set_status("dv-1001", TicketStatus::Resolved);
    store.remove("dv-1002");
    store.save_to_path(&path).unwrap();

    let reloaded = TicketStore::load_from_path(&path).unwrap();
    assert_eq!(reloaded.len(), store.len());
    assert_eq!(
        reloaded.get_by_id("dv-1001").unwrap().status,
        TicketStatus::Resolved
    );
    assert!(reloaded.get_by_id("dv-1002").is_none());
}

#[test]
fn load_accepts_the_documented_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tickets.json");
    std::fs::write(
        &path,
        r#"[
            {
                "id": "hd-1",
                "submitted-by": "Jo March",
                "title": "Cannot attach screenshots",
                "date-submitted": "2025-10-01",
                "status": "open",
                "avatar-ref": "avatars/jo.png"
            },
            {
                "id": "hd-2",
                "submitted-by": "Amy March",
                "title": "Search ignores labels",
                "date-submitted": "2025-10-02"
            }
        ]"#,
    )
    .unwrap();

    let store = TicketStore::load_from_path(&path).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get_by_id("hd-1").unwrap().status, TicketStatus::Open);
    // Omitted status defaults to pending, omitted avatar to empty
    let second = store.get_by_id("hd-2").unwrap();
    assert_eq!(second.status, TicketStatus::Pending);
    assert!(second.avatar_ref.is_empty());
}

#[test]
fn load_rejects_duplicate_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tickets.json");
    let ticket = Ticket {
        id: "hd-1".into(),
        submitted_by: "Jo".into(),
        title: "One".into(),
        date_submitted: "2025-10-01".into(),
        status: TicketStatus::Pending,
        avatar_ref: String::new(),
    };
    let raw = serde_json::to_string(&vec![ticket.clone(), ticket]).unwrap();
    std::fs::write(&path, raw).unwrap();

    assert!(TicketStore::load_from_path(&path).is_err());
}

#[test]
fn load_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tickets.json");
    std::fs::write(&path, "[{").unwrap();
    assert!(TicketStore::load_from_path(&path).is_err());
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(TicketStore::load_from_path(&dir.path().join("nope.json")).is_err());
}

#[test]
fn list_all_preserves_insertion_order() {
    let store = TicketStore::seeded();
    let listed = store.list_all();
    let seeded = seed_tickets();
    assert_eq!(listed, seeded);
}

#[test]
fn mutations_are_visible_to_subsequent_reads() {
    let store = TicketStore::seeded();
    assert!(store.set_status("dv-1005", TicketStatus::Other));
    let listed = store.list_all();
    let ticket = listed.iter().find(|t| t.id == "dv-1005").unwrap();
    assert_eq!(ticket.status, TicketStatus::Other);
}
