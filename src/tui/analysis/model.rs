//! AnalysisViewer model types for testable state management
//!
//! This module separates state ([`ViewState`]) from view
//! ([`AnalysisViewModel`]) so the rendering rules can be unit tested without
//! the iocraft framework.

use iocraft::prelude::{Color, KeyCode};

use crate::analysis::{AnalysisFailure, AnalysisResult, Level, UserSentiment};
use crate::tui::theme::theme;

pub const TITLE: &str = "AI Analysis";
pub const LOADING_MESSAGE: &str = "Analyzing ticket...";
pub const EMPTY_MESSAGE: &str = "No analysis available";

pub const SUMMARY_TITLE: &str = "Summary";
pub const CATEGORIES_TITLE: &str = "Possible Categories";
pub const AUTOMATIONS_TITLE: &str = "Possible Automations";
pub const SENTIMENT_TITLE: &str = "User Sentiment";

/// Modal size as a percentage of the terminal
pub const MODAL_WIDTH_PCT: u32 = 70;
pub const MODAL_HEIGHT_PCT: u32 = 80;

// ============================================================================
// State Types
// ============================================================================

/// Lifecycle of one fetch cycle. Exactly one variant is active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Loading,
    Error(String),
    Success(AnalysisResult),
    /// Both status layers succeeded but there was nothing to show
    Empty,
}

impl ViewState {
    /// State for a successful response. A missing or structurally empty
    /// payload becomes `Empty`.
    pub fn settled(payload: Option<AnalysisResult>) -> Self {
        match payload {
            Some(result) if !result.is_empty() => ViewState::Success(result),
            _ => ViewState::Empty,
        }
    }

    pub fn from_failure(failure: &AnalysisFailure) -> Self {
        ViewState::Error(failure.user_message())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error(_))
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            ViewState::Success(result) => Some(result),
            _ => None,
        }
    }
}

// ============================================================================
// View Model Types
// ============================================================================

/// Places the user can dismiss the viewer from. All of them are present in
/// every state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseControl {
    HeaderButton,
    FooterButton,
    Backdrop,
}

pub const CLOSE_CONTROLS: [CloseControl; 3] = [
    CloseControl::HeaderButton,
    CloseControl::FooterButton,
    CloseControl::Backdrop,
];

/// Computed view model for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisViewModel {
    pub title: &'static str,
    pub body: ModalBody,
    pub close_controls: [CloseControl; 3],
}

/// Content area of the modal
#[derive(Debug, Clone, PartialEq)]
pub enum ModalBody {
    Loading { message: &'static str },
    Error { message: String, color: Color },
    Empty { message: &'static str },
    Sections(Vec<Section>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Summary,
    Categories,
    Automations,
    Sentiment,
}

/// One card of a successful analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Summary { text: String },
    Categories { rows: Vec<LevelRow> },
    Automations { rows: Vec<LevelRow> },
    Sentiment(SentimentView),
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Summary { .. } => SectionKind::Summary,
            Section::Categories { .. } => SectionKind::Categories,
            Section::Automations { .. } => SectionKind::Automations,
            Section::Sentiment(_) => SectionKind::Sentiment,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind() {
            SectionKind::Summary => SUMMARY_TITLE,
            SectionKind::Categories => CATEGORIES_TITLE,
            SectionKind::Automations => AUTOMATIONS_TITLE,
            SectionKind::Sentiment => SENTIMENT_TITLE,
        }
    }
}

/// A named suggestion with a level badge (category or automation)
#[derive(Debug, Clone, PartialEq)]
pub struct LevelRow {
    pub name: String,
    pub level: Level,
    pub badge: &'static str,
    pub badge_color: Color,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentView {
    pub feeling_label: String,
    pub feeling_color: Color,
    pub urgency_label: String,
    pub urgency_color: Color,
    /// Quoted indicator phrases; the sub-list is hidden when empty
    pub indicators: Vec<String>,
}

impl AnalysisViewModel {
    pub fn section_kinds(&self) -> Vec<SectionKind> {
        match &self.body {
            ModalBody::Sections(sections) => sections.iter().map(Section::kind).collect(),
            _ => Vec::new(),
        }
    }
}

// ============================================================================
// Renderer
// ============================================================================

/// Map a view state to what the modal shows
pub fn compute_view_model(state: &ViewState) -> AnalysisViewModel {
    let body = match state {
        ViewState::Loading => ModalBody::Loading {
            message: LOADING_MESSAGE,
        },
        ViewState::Error(message) => ModalBody::Error {
            message: message.clone(),
            color: theme().danger,
        },
        ViewState::Empty => ModalBody::Empty {
            message: EMPTY_MESSAGE,
        },
        ViewState::Success(result) => ModalBody::Sections(compute_sections(result)),
    };

    AnalysisViewModel {
        title: TITLE,
        body,
        close_controls: CLOSE_CONTROLS,
    }
}

/// Sections for a successful analysis.
///
/// The summary is always present, even when its text is empty. The sentiment
/// card is shown whenever the record exists, regardless of its contents.
pub fn compute_sections(result: &AnalysisResult) -> Vec<Section> {
    let theme = theme();
    let mut sections = vec![Section::Summary {
        text: result.summary.clone(),
    }];

    if !result.possible_categories.is_empty() {
        let rows = result
            .possible_categories
            .iter()
            .map(|c| LevelRow {
                name: c.category.clone(),
                level: c.confidence,
                badge: c.confidence.as_str(),
                badge_color: theme.confidence_color(c.confidence),
                detail: c.reason.clone(),
            })
            .collect();
        sections.push(Section::Categories { rows });
    }

    if !result.possible_automations.is_empty() {
        let rows = result
            .possible_automations
            .iter()
            .map(|a| LevelRow {
                name: a.automation.clone(),
                level: a.feasibility,
                badge: a.feasibility.as_str(),
                badge_color: theme.confidence_color(a.feasibility),
                detail: a.description.clone(),
            })
            .collect();
        sections.push(Section::Automations { rows });
    }

    if let Some(sentiment) = &result.user_sentiment {
        sections.push(Section::Sentiment(compute_sentiment(sentiment)));
    }

    sections
}

fn compute_sentiment(sentiment: &UserSentiment) -> SentimentView {
    let theme = theme();
    SentimentView {
        feeling_label: sentiment.overall_feeling.as_str().to_uppercase(),
        feeling_color: theme.sentiment_color(sentiment.overall_feeling),
        urgency_label: sentiment.urgency_level.as_str().to_uppercase(),
        urgency_color: theme.urgency_color(sentiment.urgency_level),
        indicators: sentiment
            .indicators
            .iter()
            .map(|i| format!("\"{i}\""))
            .collect(),
    }
}

// ============================================================================
// Input Routing
// ============================================================================

/// Screen rectangle in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

/// Where the modal content sits on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    pub content: Rect,
}

impl ModalLayout {
    /// Layout of a modal sized as a percentage of the terminal and centered.
    ///
    /// Sizes are fractional until the layout engine snaps both edges to the
    /// nearest cell, so the same rounding is applied here.
    pub fn centered(term_width: u16, term_height: u16, width_pct: u32, height_pct: u32) -> Self {
        // (start, length) of a centered span after snapping its edges
        let span = |total: u16, pct: u32| -> (u16, u16) {
            let total = f32::from(total);
            let length = total * pct.min(100) as f32 / 100.0;
            let start = (total - length) / 2.0;
            let first = start.round();
            let last = (start + length).round();
            (first as u16, (last - first) as u16)
        };
        let (x, width) = span(term_width, width_pct);
        let (y, height) = span(term_height, height_pct);

        ModalLayout {
            content: Rect {
                x,
                y,
                width,
                height,
            },
        }
    }
}

/// Who receives a mouse click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickRoute {
    /// Outside the content area: dismisses the viewer
    Backdrop,
    /// Inside the content area: never reaches the backdrop
    Content,
}

pub fn route_click(column: u16, row: u16, layout: &ModalLayout) -> ClickRoute {
    if layout.content.contains(column, row) {
        ClickRoute::Content
    } else {
        ClickRoute::Backdrop
    }
}

/// Keys that dismiss the viewer
pub fn is_close_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Esc | KeyCode::Char('q'))
}
