//! Modal overlay component
//!
//! Full-screen layer that centers a modal and paints a solid backdrop over
//! whatever the host renders beneath it. The overlay itself is the
//! click-to-dismiss area; the viewer decides which clicks count as backdrop
//! clicks (see
//! [`route_click`](crate::tui::analysis::model::route_click)).

use iocraft::prelude::*;

/// Standard backdrop color for all modals
pub const MODAL_BACKDROP: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 30,
};

/// Props for the ModalOverlay component
#[derive(Default, Props)]
pub struct ModalOverlayProps<'a> {
    pub children: Vec<AnyElement<'a>>,
}

/// Centering overlay with a solid backdrop
///
/// ```ignore
/// element! {
///     ModalOverlay {
///         ModalContainer(title: Some("AI Analysis".to_string())) {
///             Text(content: "...")
///         }
///     }
/// }
/// ```
#[component]
pub fn ModalOverlay<'a>(props: &mut ModalOverlayProps<'a>) -> impl Into<AnyElement<'a>> {
    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            background_color: MODAL_BACKDROP,
        ) {
            #(std::mem::take(&mut props.children))
        }
    }
}
