//! # Core Application Logic
//!
//! Display state and configuration. Knows nothing about the terminal.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  • DisplayState         │
//!                    │  • App                  │
//!                    │  • config               │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │ interaction│
//!            │  Adapter   │◀── sink ───│  handler   │
//!            │ (ratatui)  │            │  (tokio)   │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `DisplayState` and the `App` struct
//! - [`config`]: config file loading and override resolution

pub mod config;
pub mod state;
