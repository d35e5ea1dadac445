use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::{App, DisplayState};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{OutputPane, TitleBar};

/// Height of the load button, borders included.
const BUTTON_HEIGHT: u16 = 3;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(BUTTON_HEIGHT)]);
    let [title_area, output_area, button_area] = layout.areas(frame.area());

    TitleBar::new(app.endpoint.clone(), app.status_message()).render(frame, title_area);

    OutputPane::new(&app.display, &mut tui.output).render(frame, output_area);

    tui.load_button.busy = app.display == DisplayState::Loading;
    tui.load_button.render(frame, button_area);
}
