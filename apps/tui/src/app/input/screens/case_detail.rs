use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_case_detail_input(app: &mut App, key: KeyCode) {
    let related = app.related_case_indices().len();

    match key {
        KeyCode::Up => {
            app.related_selection_index = wrap_decrement(app.related_selection_index, related);
        }
        KeyCode::Down => {
            app.related_selection_index = wrap_increment(app.related_selection_index, related);
        }
        KeyCode::Enter => app.open_selected_related(),
        KeyCode::Esc | KeyCode::Backspace => app.close_detail(),
        _ => {}
    }
}
