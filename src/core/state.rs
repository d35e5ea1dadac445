//! # Application State
//!
//! Core state for fetchview. Domain data only - presentation state (scroll
//! offsets, button hit areas) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── endpoint: String          // resource being queried
//! ├── display: DisplayState     // the single piece of rendered text
//! └── trigger_count: u64        // activations since startup
//! ```
//!
//! `display` is overwritten wholesale on every transition:
//!
//! ```text
//! Idle ──trigger──▶ Loading ──ok──▶ Success
//!                      │
//!                      └──fail──▶ Error
//! Success / Error ──trigger──▶ Loading
//! ```

use std::borrow::Cow;

use crate::fetch::FetchError;

pub const IDLE_TEXT: &str = "Press Enter or click Load to fetch data.";
pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_PREFIX: &str = "Error: ";

/// What the output pane currently shows. Exactly one value is live.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayState {
    #[default]
    Idle,
    Loading,
    /// Pretty-printed payload.
    Success(String),
    Error(FetchError),
}

impl DisplayState {
    /// The text shown to the user. Failures collapse to `Error: <message>`.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            DisplayState::Idle => Cow::Borrowed(IDLE_TEXT),
            DisplayState::Loading => Cow::Borrowed(LOADING_TEXT),
            DisplayState::Success(text) => Cow::Borrowed(text),
            DisplayState::Error(err) => Cow::Owned(format!("{ERROR_PREFIX}{err}")),
        }
    }

    /// Short name for the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            DisplayState::Idle => "idle",
            DisplayState::Loading => "loading",
            DisplayState::Success(_) => "ok",
            DisplayState::Error(_) => "error",
        }
    }
}

pub struct App {
    pub endpoint: String,
    pub display: DisplayState,
    pub trigger_count: u64,
}

impl App {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            display: DisplayState::Idle,
            trigger_count: 0,
        }
    }

    /// Replaces the display state. Last write wins.
    pub fn apply(&mut self, state: DisplayState) {
        self.display = state;
    }

    pub fn status_message(&self) -> String {
        if self.trigger_count == 0 {
            self.display.label().to_string()
        } else {
            format!("{} | requests: {}", self.display.label(), self.trigger_count)
        }
    }
}
