//! # LoadButton Component
//!
//! The trigger source. Emits [`ButtonEvent::Activated`] on the activation key
//! or on a left click inside the area it was last rendered to.
//!
//! The button stays clickable while a request is in flight; `busy` only
//! changes the label.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Identifier shown as the button's title.
pub const LOAD_ID: &str = "load";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Activated,
}

pub struct LoadButton {
    /// A request is in flight (Prop)
    pub busy: bool,
    /// Where the button was drawn last frame
    area: Rect,
}

impl Default for LoadButton {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadButton {
    pub fn new() -> Self {
        Self {
            busy: false,
            area: Rect::default(),
        }
    }

    #[cfg(test)]
    pub fn area(&self) -> Rect {
        self.area
    }

    fn hit(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }
}

impl Component for LoadButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.area = area;

        let (label, style) = if self.busy {
            (
                "[ Load ]  request in flight",
                Style::default().fg(Color::Yellow),
            )
        } else {
            (
                "[ Load ]",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        };

        let button = Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(LOAD_ID));
        frame.render_widget(button, area);
    }
}

impl EventHandler for LoadButton {
    type Event = ButtonEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match *event {
            TuiEvent::Activate => Some(ButtonEvent::Activated),
            TuiEvent::MouseClick(column, row) if self.hit(column, row) => {
                Some(ButtonEvent::Activated)
            }
            _ => None,
        }
    }
}
