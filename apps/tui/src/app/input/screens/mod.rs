use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

use crate::app::input::helpers::{wrap_decrement, wrap_increment};

mod case_detail;
mod cases;
mod dashboard;
mod map;
mod statistics;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if handle_help_popup(app, key) {
        return;
    }

    if !app.is_text_entry() {
        if key == KeyCode::Char(' ') {
            app.toggle_animation_pause();
            return;
        }

        if handle_navigation(app, key) {
            return;
        }
    }

    match app.screen {
        AppScreen::Dashboard => dashboard::handle_dashboard_input(app, key),
        AppScreen::Cases => cases::handle_cases_input(app, key),
        AppScreen::Map => map::handle_map_input(app, key),
        AppScreen::Statistics => statistics::handle_statistics_input(app, key),
        AppScreen::CaseDetail => case_detail::handle_case_detail_input(app, key),
    }
}

/// F1 toggles the help popup. While it is open it takes every key; Esc
/// closes it without reaching the screen underneath, so an open map popup or
/// case detail stays where it was.
fn handle_help_popup(app: &mut App, key: KeyCode) -> bool {
    if key == KeyCode::F(1) {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if key == KeyCode::Esc {
            app.show_help = false;
        }
        return true;
    }

    false
}

/// Keys shared by every screen: tab switching and quitting.
fn handle_navigation(app: &mut App, key: KeyCode) -> bool {
    let tabs = AppScreen::TABS;
    let current = app.screen.tab_index();

    let target = match key {
        KeyCode::Char('q') => {
            app.running = false;
            return true;
        }
        KeyCode::Char(ch @ '1'..='4') => {
            let index = ch as usize - '1' as usize;
            tabs[index]
        }
        KeyCode::Tab => tabs[current.map_or(0, |index| wrap_increment(index, tabs.len()))],
        KeyCode::BackTab => tabs[current.map_or(0, |index| wrap_decrement(index, tabs.len()))],
        _ => return false,
    };

    app.switch_screen(target);
    true
}
