//! Search input component
//!
//! A bordered text input for filtering the ticket table by substring.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the SearchBox component
#[derive(Default, Props)]
pub struct SearchBoxProps {
    /// State for the query value
    pub value: Option<State<String>>,
    /// State for the current page, reset to 1 whenever the query changes
    pub page: Option<State<usize>>,
    /// Whether the search box has focus
    pub has_focus: bool,
}

/// Search input for the ticket filter
#[component]
pub fn SearchBox(props: &SearchBoxProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    let page = props.page;
    let Some(mut value) = props.value else {
        return element! {
            View(
                flex_direction: FlexDirection::Row,
                border_style: BorderStyle::Round,
                border_color: border_color,
                padding_left: 1,
                padding_right: 1,
                height: 3,
            ) {
                Text(content: "No value state provided", color: theme.text_dimmed)
            }
        };
    };

    element! {
        View(
            flex_direction: FlexDirection::Row,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            height: 3,
        ) {
            View(
                margin_right: 1,
                justify_content: JustifyContent::Center,
            ) {
                Text(
                    content: "/",
                    color: theme.text_dimmed,
                )
            }
            View(flex_grow: 1.0) {
                TextInput(
                    value: value.to_string(),
                    has_focus: props.has_focus,
                    on_change: move |new_value| {
                        value.set(new_value);
                        // A changed filter invalidates the page cursor.
                        if let Some(mut page) = page {
                            page.set(1);
                        }
                    },
                    color: theme.text,
                )
            }
        }
    }
}
