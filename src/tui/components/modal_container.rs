//! Modal container component
//!
//! Standardized modal box with a title header, content area and footer
//! hint line.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the ModalContainer component
#[derive(Default, Props)]
pub struct ModalContainerProps<'a> {
    /// Fixed width in columns (default: 56)
    pub width: Option<u32>,
    /// Header title
    pub title: Option<String>,
    /// Footer hint text
    pub footer_text: Option<String>,
    /// Children
    pub children: Vec<AnyElement<'a>>,
}

/// Bordered modal box with header and footer
#[component]
pub fn ModalContainer<'a>(props: &mut ModalContainerProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let width = props.width.unwrap_or(56);
    let has_title = props.title.is_some();
    let has_footer = props.footer_text.is_some();

    element! {
        View(
            width: width,
            background_color: theme.background,
            border_style: BorderStyle::Double,
            border_color: theme.border_focused,
            padding: 1,
            flex_direction: FlexDirection::Column,
        ) {
            #(if has_title {
                let title = props.title.clone().unwrap_or_default();
                Some(element! {
                    View(
                        width: 100pct,
                        padding_bottom: 1,
                        border_edges: Edges::Bottom,
                        border_style: BorderStyle::Single,
                        border_color: theme.border,
                        flex_direction: FlexDirection::Row,
                    ) {
                        Text(content: title, color: Color::Cyan, weight: Weight::Bold)
                        View(flex_grow: 1.0)
                        Text(content: "Press Esc to close", color: theme.text_dimmed)
                    }
                })
            } else {
                None
            })

            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                #(std::mem::take(&mut props.children))
            }

            #(if has_footer {
                let footer = props.footer_text.clone().unwrap_or_default();
                Some(element! {
                    View(
                        width: 100pct,
                        padding_top: 1,
                        border_edges: Edges::Top,
                        border_style: BorderStyle::Single,
                        border_color: theme.border,
                    ) {
                        Text(content: footer, color: theme.text_dimmed)
                    }
                })
            } else {
                None
            })
        }
    }
}
