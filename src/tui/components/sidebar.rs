//! Sidebar navigation rail
//!
//! Chrome only: lists the dashboard sections with the active one
//! highlighted. Section switching beyond the ticket table is out of
//! scope, so entries other than "Tickets" render dimmed.

use iocraft::prelude::*;

use crate::tui::theme::theme;

const SECTIONS: &[&str] = &["Dashboard", "Tickets", "Customers", "Settings"];

/// Props for the Sidebar component
#[derive(Default, Props)]
pub struct SidebarProps {
    /// Index into the section list (the ticket table is 1)
    pub active: usize,
}

/// Vertical navigation rail on the left edge
#[component]
pub fn Sidebar(props: &SidebarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let active = props.active;

    element! {
        View(
            width: 14,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            padding_top: 1,
            background_color: theme.sidebar,
        ) {
            #(SECTIONS.iter().enumerate().map(|(i, section)| {
                let is_active = i == active;
                element! {
                    View(
                        height: 1,
                        width: 100pct,
                        padding_left: 1,
                        background_color: if is_active { Some(theme.highlight) } else { None },
                    ) {
                        Text(
                            content: format!("{} {}", if is_active { ">" } else { " " }, section),
                            color: if is_active { theme.highlight_text } else { theme.text_dimmed },
                            weight: if is_active { Weight::Bold } else { Weight::Normal },
                        )
                    }
                }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props_default_to_first_section() {
        let props = SidebarProps::default();
        assert_eq!(props.active, 0);
    }

    #[test]
    fn active_section_prop_takes_a_usize() {
        let _: AnyElement<'static> = element!(Sidebar(active: 1usize)).into_any();
    }

    #[test]
    fn tickets_is_the_second_section() {
        assert_eq!(SECTIONS[1], "Tickets");
    }
}
