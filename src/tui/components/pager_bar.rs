//! Pager bar component
//!
//! Renders the planned page window as a row of controls: a Prev arrow,
//! the numbered buttons and ellipsis markers from the planner, and a Next
//! arrow. Ellipsis markers are never interactive; the key handlers only
//! act on page numbers.

use iocraft::prelude::*;

use crate::pager::PageToken;
use crate::tui::theme::theme;

/// Props for the PagerBar component
#[derive(Default, Props)]
pub struct PagerBarProps {
    /// Planner output for the current window
    pub tokens: Vec<PageToken>,
    /// Current page (highlighted among the tokens)
    pub current_page: usize,
    /// Total page count, for the Prev/Next dimming
    pub total_pages: usize,
}

/// One-line pager under the ticket table
#[component]
pub fn PagerBar(props: &PagerBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    if props.tokens.is_empty() {
        return element! { View(height: 1, width: 100pct) };
    }

    let can_prev = props.current_page > 1;
    let can_next = props.current_page < props.total_pages;

    element! {
        View(
            height: 1,
            width: 100pct,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::Center,
            column_gap: 1,
        ) {
            Text(
                content: "‹ prev",
                color: if can_prev { theme.text } else { theme.text_dimmed },
            )

            #(props.tokens.iter().map(|token| {
                match token {
                    PageToken::Page(n) => {
                        let is_current = *n == props.current_page;
                        element! {
                            View(
                                padding_left: 1,
                                padding_right: 1,
                                background_color: if is_current { Some(theme.highlight) } else { None },
                            ) {
                                Text(
                                    content: n.to_string(),
                                    color: if is_current { theme.highlight_text } else { theme.text },
                                    weight: if is_current { Weight::Bold } else { Weight::Normal },
                                )
                            }
                        }
                    }
                    PageToken::Ellipsis => element! {
                        View(padding_left: 1, padding_right: 1) {
                            Text(content: "…", color: theme.text_dimmed)
                        }
                    },
                }
            }))

            Text(
                content: "next ›",
                color: if can_next { theme.text } else { theme.text_dimmed },
            )
        }
    }
}
