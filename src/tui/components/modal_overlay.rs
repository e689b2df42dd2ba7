//! Modal overlay component
//!
//! Full-screen absolute positioning with centered content and an optional
//! backdrop, used as the base for the details modal.

use iocraft::prelude::*;

/// Backdrop color behind modals, a shade darker than the sidebar
pub const MODAL_BACKDROP: Color = Color::Rgb {
    r: 26,
    g: 26,
    b: 32,
};

/// Props for the ModalOverlay component
#[derive(Default, Props)]
pub struct ModalOverlayProps<'a> {
    /// Whether to show a solid backdrop that hides content behind the modal
    pub show_backdrop: Option<bool>,
    /// Children elements to render inside the overlay
    pub children: Vec<AnyElement<'a>>,
}

/// Centers its children over the whole screen
#[component]
pub fn ModalOverlay<'a>(props: &mut ModalOverlayProps<'a>) -> impl Into<AnyElement<'a>> {
    let show_backdrop = props.show_backdrop.unwrap_or(false);

    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            background_color: if show_backdrop { Some(MODAL_BACKDROP) } else { None },
        ) {
            #(std::mem::take(&mut props.children))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_darker_than_the_sidebar() {
        let Color::Rgb { r, g, b } = MODAL_BACKDROP else {
            panic!("backdrop should be an rgb color");
        };
        let Color::Rgb { r: sr, g: sg, b: sb } = crate::tui::theme::theme().sidebar else {
            panic!("sidebar should be an rgb color");
        };
        assert!(r < sr && g < sg && b < sb);
    }

    #[test]
    fn backdrop_defaults_to_transparent() {
        let props = ModalOverlayProps::default();
        assert!(!props.show_backdrop.unwrap_or(false));
    }
}
