use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_map_input(app: &mut App, key: KeyCode) {
    let markers = app.map_case_indices.len();

    match key {
        KeyCode::Char('s') => app.cycle_map_filter(true),
        KeyCode::Char('S') => app.cycle_map_filter(false),
        KeyCode::Left | KeyCode::Up => {
            app.selected_marker_index = wrap_decrement(app.selected_marker_index, markers);
        }
        KeyCode::Right | KeyCode::Down => {
            app.selected_marker_index = wrap_increment(app.selected_marker_index, markers);
        }
        KeyCode::Enter => {
            let Some((index, _)) = app.selected_marker_case() else {
                return;
            };
            if app.marker_popup_open {
                app.open_case(index, AppScreen::Map);
            } else {
                app.marker_popup_open = true;
            }
        }
        KeyCode::Esc => {
            if app.marker_popup_open {
                app.marker_popup_open = false;
            } else {
                app.switch_screen(AppScreen::Dashboard);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::sample_app;

    fn map_app(count: usize) -> App {
        let mut app = sample_app(count);
        app.switch_screen(AppScreen::Map);
        app
    }

    #[test]
    fn marker_selection_wraps() {
        let mut app = map_app(5);
        handle_map_input(&mut app, KeyCode::Left);
        assert_eq!(app.selected_marker_index, 4);
        handle_map_input(&mut app, KeyCode::Right);
        assert_eq!(app.selected_marker_index, 0);
    }

    #[test]
    fn enter_opens_popup_then_detail() {
        let mut app = map_app(5);
        handle_map_input(&mut app, KeyCode::Down);
        handle_map_input(&mut app, KeyCode::Enter);
        assert!(app.marker_popup_open);
        assert_eq!(app.screen, AppScreen::Map);

        handle_map_input(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, AppScreen::CaseDetail);
        assert_eq!(app.detail_case_index, Some(1));
        assert!(!app.marker_popup_open);

        app.close_detail();
        assert_eq!(app.screen, AppScreen::Map);
    }

    #[test]
    fn escape_closes_popup_before_leaving() {
        let mut app = map_app(5);
        handle_map_input(&mut app, KeyCode::Enter);
        handle_map_input(&mut app, KeyCode::Esc);
        assert!(!app.marker_popup_open);
        assert_eq!(app.screen, AppScreen::Map);
        handle_map_input(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, AppScreen::Dashboard);
    }

    #[test]
    fn filter_change_resets_selection() {
        let mut app = map_app(30);
        handle_map_input(&mut app, KeyCode::Down);
        handle_map_input(&mut app, KeyCode::Enter);
        handle_map_input(&mut app, KeyCode::Char('s'));
        assert_eq!(app.selected_marker_index, 0);
        assert!(!app.marker_popup_open);
        assert!(app.map_status_filter.is_some());
    }

    #[test]
    fn no_markers_means_no_popup() {
        let mut app = map_app(0);
        handle_map_input(&mut app, KeyCode::Enter);
        assert!(!app.marker_popup_open);
    }
}
