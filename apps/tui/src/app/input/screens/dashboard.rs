use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen};
use crate::CaseStatus;
use crossterm::event::KeyCode;

pub fn handle_dashboard_input(app: &mut App, key: KeyCode) {
    if app.quick_find_active {
        handle_quick_find_input(app, key);
        return;
    }

    let recent = app.recent_cases().len();

    match key {
        KeyCode::Up => {
            app.selected_recent_index = wrap_decrement(app.selected_recent_index, recent);
        }
        KeyCode::Down => {
            app.selected_recent_index = wrap_increment(app.selected_recent_index, recent);
        }
        KeyCode::Enter => {
            if app.selected_recent_index < recent {
                app.open_case(app.selected_recent_index, AppScreen::Dashboard);
            }
        }
        KeyCode::Char('c') => {
            if app.stats.critical_cases > 0 {
                app.view_cases_with_status(CaseStatus::Critical);
            }
        }
        KeyCode::Char('/') => {
            app.quick_find_active = true;
            app.quick_find_query.clear();
            app.status_message.clear();
        }
        _ => {}
    }
}

fn handle_quick_find_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(ch) => app.quick_find_query.push(ch),
        KeyCode::Backspace => {
            app.quick_find_query.pop();
        }
        KeyCode::Enter => app.run_quick_find(),
        KeyCode::Esc => {
            app.quick_find_active = false;
            app.quick_find_query.clear();
        }
        _ => {}
    }
}
