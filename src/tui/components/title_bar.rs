//! # TitleBar Component
//!
//! Single-line header: app name, the queried endpoint, and a short status.
//! Purely presentational; all fields are props.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    /// Full URL being queried
    pub endpoint: String,
    /// Status text (e.g. "loading | requests: 3")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(endpoint: String, status_message: String) -> Self {
        Self {
            endpoint,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("fetchview | GET {}", self.endpoint)
        } else {
            format!("fetchview | GET {} | {}", self.endpoint, self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status() {
        let mut title_bar = TitleBar::new(
            "http://localhost:8000/api".to_string(),
            "loading".to_string(),
        );
        let text = render_text(&mut title_bar);
        assert!(text.contains("fetchview"));
        assert!(text.contains("GET http://localhost:8000/api"));
        assert!(text.contains("| loading"));
    }

    #[test]
    fn test_title_bar_without_status() {
        let mut title_bar = TitleBar::new("http://x/api".to_string(), String::new());
        let text = render_text(&mut title_bar);
        assert_eq!(text.matches('|').count(), 1);
    }
}
