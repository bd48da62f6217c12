pub mod bigtext;
pub mod countdown;
pub mod dialog;
pub mod keybar;
pub mod layout;
pub mod setup;
pub mod titlebar;

use ratatui::Frame;

use crate::state::{AppState, Screen};

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();
    let layout = layout::compute_layout(area);

    titlebar::draw_titlebar(f, layout.titlebar, state);

    match state.screen {
        Screen::Setup => {
            setup::draw_setup(f, layout.main, state);
        }
        Screen::Running => {
            countdown::draw_countdown(f, layout.main, state);
        }
    }

    keybar::draw_keybar(f, layout.keybar, state);

    if state.dialog.is_some() {
        dialog::draw_dialog(f, area, state);
    }
}
