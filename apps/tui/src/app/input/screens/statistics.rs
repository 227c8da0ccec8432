use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_statistics_input(app: &mut App, key: KeyCode) {
    if key == KeyCode::Esc {
        app.switch_screen(AppScreen::Dashboard);
    }
}
