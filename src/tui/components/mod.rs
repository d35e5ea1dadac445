//! # TUI Components
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (top line: endpoint and status)
//! ├── output_pane.rs   (the "output" element: scrollable display text)
//! └── load_button.rs   (the "load" element: trigger source)
//! ```
//!
//! Components receive external data as props, never by reaching into global
//! state, so each one can be rendered against a `TestBackend` in isolation.

pub mod load_button;
pub mod output_pane;
mod title_bar;

pub use load_button::{ButtonEvent, LoadButton};
pub use output_pane::{OutputPane, OutputPaneState};
pub use title_bar::TitleBar;
