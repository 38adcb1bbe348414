//! Shared TUI components
//!
//! Layout and input primitives the analysis viewer is built from.

pub mod clickable;
pub mod modal_container;
pub mod modal_overlay;
pub mod spinner;

pub use clickable::{Button, ButtonProps, Clickable, ClickableProps};
pub use modal_container::{ModalBorderColor, ModalContainer, ModalContainerProps};
pub use modal_overlay::{MODAL_BACKDROP, ModalOverlay, ModalOverlayProps};
pub use spinner::{Spinner, SpinnerProps, spinner_frame};
