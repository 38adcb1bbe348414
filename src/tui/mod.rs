//! TUI module for the interactive analysis viewer
//!
//! - `analysis` - the AI analysis modal and its fetch state machine
//! - `components` - layout and input primitives
//! - `theme` - palette and level/sentiment color mapping

pub mod analysis;
pub mod components;
pub mod screen;
pub mod theme;

pub use analysis::{AnalysisViewer, AnalysisViewerProps};
pub use screen::{AnalysisScreen, AnalysisScreenProps};
pub use theme::{Theme, confidence_color, sentiment_color, urgency_color};
