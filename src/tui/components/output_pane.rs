//! # OutputPane Component
//!
//! The output sink's on-screen half: renders the current [`DisplayState`]
//! text inside a scrollable, bordered block.
//!
//! Like the other stateful components, `OutputPane` is transient (built each
//! frame) and wraps `&'a mut OutputPaneState`, which the parent keeps.
//! Wrapping never trims, so JSON indentation survives narrow terminals.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::state::DisplayState;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Identifier shown as the pane's title.
pub const OUTPUT_ID: &str = "output";

#[derive(Default)]
pub struct OutputPaneState {
    pub scroll_state: ScrollViewState,
    /// Content height from the last render, used to clamp scrolling
    pub content_height: u16,
    /// Viewport height from the last render
    pub viewport_height: u16,
}

impl OutputPaneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called whenever the display state is replaced.
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }

    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for OutputPaneState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        self.clamp_scroll();
        Some(())
    }
}

pub struct OutputPane<'a> {
    display: &'a DisplayState,
    state: &'a mut OutputPaneState,
}

impl<'a> OutputPane<'a> {
    pub fn new(display: &'a DisplayState, state: &'a mut OutputPaneState) -> Self {
        Self { display, state }
    }
}

fn display_style(display: &DisplayState) -> Style {
    match display {
        DisplayState::Idle => Style::default().fg(Color::DarkGray),
        DisplayState::Loading => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
        DisplayState::Success(_) => Style::default(),
        DisplayState::Error(_) => Style::default().fg(Color::Red),
    }
}

impl Component for OutputPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(OUTPUT_ID);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Leave one column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(self.display.text().into_owned())
            .style(display_style(self.display))
            .wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(content_width) as u16;

        self.state.content_height = content_height;
        self.state.viewport_height = inner.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}
