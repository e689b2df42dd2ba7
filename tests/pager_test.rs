//! Page-window planner integration tests
//!
//! These complement the unit tests in `src/pager.rs` by exercising the
//! planner through the same inputs the views feed it: filtered list
//! lengths, stale page cursors and the filter-then-slice pipeline.

use deskview::pager::{PageToken, PageWindow, clamp_page};
use deskview::store::{filter_tickets, page_slice, seed_tickets};

use PageToken::{Ellipsis, Page};

#[test]
fn first_page_of_a_long_list() {
    // 100 items, 10/page, range 2: window hugs the left edge, single
    // trailing gap before the last-page anchor.
    let window = PageWindow::new(1, 100, 10, 2).unwrap();
    assert_eq!(window.plan(), vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]);
}

#[test]
fn middle_page_of_a_long_list() {
    let window = PageWindow::new(5, 100, 10, 2).unwrap();
    assert_eq!(
        window.plan(),
        vec![
            Page(1),
            Ellipsis,
            Page(3),
            Page(4),
            Page(5),
            Page(6),
            Page(7),
            Ellipsis,
            Page(10),
        ]
    );
}

#[test]
fn short_list_renders_every_page() {
    for current in 1..=5 {
        let window = PageWindow::new(current, 45, 10, 2).unwrap();
        assert_eq!(
            window.plan(),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)],
            "dense output must not depend on the cursor (page {current})"
        );
    }
}

#[test]
fn last_page_window_absorbs_the_trailing_anchor() {
    let window = PageWindow::new(10, 100, 10, 2).unwrap();
    assert_eq!(
        window.plan(),
        vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
    );
}

#[test]
fn second_page_still_suppresses_leading_ellipsis() {
    // left = 1, so nothing is collapsed before the window; the leading
    // anchor only appears once the cursor moves past page_range + 1.
    let window = PageWindow::new(3, 100, 10, 2).unwrap();
    let plan = window.plan();
    assert_eq!(plan.first(), Some(&Page(1)));
    assert_eq!(
        plan.iter().filter(|t| matches!(t, Ellipsis)).count(),
        1,
        "only the trailing gap is collapsed"
    );
}

#[test]
fn empty_input_plans_nothing_for_any_cursor() {
    for current in [1, 2, 50] {
        for range in [0, 2, 5] {
            let window = PageWindow::new(current, 0, 10, range).unwrap();
            assert!(window.plan().is_empty());
        }
    }
}

#[test]
fn plan_never_duplicates_a_page_number() {
    for page_range in 0..4 {
        for total_items in (0..300).step_by(7) {
            let probe = PageWindow::new(1, total_items, 9, page_range).unwrap();
            for current in 1..=probe.total_pages().max(1) {
                let window = PageWindow::new(current, total_items, 9, page_range).unwrap();
                let mut numbers: Vec<usize> = window
                    .plan()
                    .iter()
                    .filter_map(|t| match t {
                        Page(n) => Some(*n),
                        Ellipsis => None,
                    })
                    .collect();
                let len = numbers.len();
                numbers.sort_unstable();
                numbers.dedup();
                assert_eq!(numbers.len(), len);
            }
        }
    }
}

#[test]
fn identical_inputs_plan_identically() {
    let a = PageWindow::new(7, 230, 10, 2).unwrap();
    let b = PageWindow::new(7, 230, 10, 2).unwrap();
    assert_eq!(a.plan(), b.plan());
}

#[test]
fn filter_then_slice_pipeline() {
    // The dashboard pipeline: filter the store, clamp the cursor, plan
    // the window and slice the visible rows.
    let tickets = seed_tickets();
    let filtered = filter_tickets(&tickets, "dv-10");
    assert_eq!(filtered.len(), tickets.len(), "all seed ids share the prefix");

    let window = PageWindow::clamped(3, filtered.len(), 10, 2);
    let slice = page_slice(&filtered, &window);
    assert_eq!(slice.len(), filtered.len() - 20);
    assert_eq!(window.plan(), vec![Page(1), Page(2), Page(3)]);
}

#[test]
fn shrinking_filter_clamps_a_stale_cursor() {
    let tickets = seed_tickets();
    // Page 3 was valid against the whole list...
    let filtered = filter_tickets(&tickets, "hopper");
    assert_eq!(filtered.len(), 1);

    // ...but after the query narrows to one hit, the cursor clamps to 1.
    let window = PageWindow::clamped(3, filtered.len(), 10, 2);
    assert_eq!(window.current_page(), 1);
    assert_eq!(window.plan(), vec![Page(1)]);
    assert_eq!(page_slice(&filtered, &window).len(), 1);
}

#[test]
fn clamp_page_bounds() {
    assert_eq!(clamp_page(0, 10), 1);
    assert_eq!(clamp_page(11, 10), 10);
    assert_eq!(clamp_page(4, 10), 4);
    assert_eq!(clamp_page(1, 0), 1);
}
