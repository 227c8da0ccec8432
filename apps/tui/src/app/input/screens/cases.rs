use crate::app::input::helpers::scroll_selection;
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_cases_input(app: &mut App, key: KeyCode) {
    if app.search_active {
        handle_search_input(app, key);
        return;
    }

    if let Some(index) = scroll_selection(key, app.selected_case_index, app.filtered_case_indices.len()) {
        app.selected_case_index = index;
        return;
    }

    match key {
        KeyCode::Char('/') => {
            app.search_active = true;
        }
        KeyCode::Char('s') => app.cycle_status_filter(true),
        KeyCode::Char('S') => app.cycle_status_filter(false),
        KeyCode::Char('c') => app.cycle_category_filter(true),
        KeyCode::Char('C') => app.cycle_category_filter(false),
        KeyCode::Char('x') => app.clear_filters(),
        KeyCode::Enter => {
            if let Some(index) = app.selected_case_position() {
                app.open_case(index, AppScreen::Cases);
            }
        }
        KeyCode::Esc => app.switch_screen(AppScreen::Dashboard),
        _ => {}
    }
}

fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(ch) => {
            app.filter.search.push(ch);
            app.selected_case_index = 0;
            app.apply_filters();
        }
        KeyCode::Backspace => {
            app.filter.search.pop();
            app.apply_filters();
        }
        KeyCode::Enter => {
            app.search_active = false;
        }
        KeyCode::Esc => {
            app.search_active = false;
            app.filter.search.clear();
            app.apply_filters();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::sample_app;
    use crate::CaseStatus;

    fn cases_app(count: usize) -> App {
        let mut app = sample_app(count);
        app.switch_screen(AppScreen::Cases);
        app
    }

    #[test]
    fn search_filters_live() {
        let mut app = cases_app(30);
        let location = app.cases[3].location.to_lowercase();

        handle_cases_input(&mut app, KeyCode::Char('/'));
        for ch in location.chars() {
            handle_cases_input(&mut app, KeyCode::Char(ch));
        }
        handle_cases_input(&mut app, KeyCode::Enter);

        assert!(!app.search_active);
        assert!(app.filtered_case_indices.contains(&3));
        assert!(app
            .filtered_cases()
            .all(|case| app.filter.matches(case)));
    }

    #[test]
    fn escape_clears_search_text() {
        let mut app = cases_app(30);
        handle_cases_input(&mut app, KeyCode::Char('/'));
        for ch in "no such text".chars() {
            handle_cases_input(&mut app, KeyCode::Char(ch));
        }
        assert!(app.filtered_case_indices.is_empty());

        handle_cases_input(&mut app, KeyCode::Esc);
        assert!(app.filter.search.is_empty());
        assert_eq!(app.filtered_case_indices.len(), 30);
        assert_eq!(app.screen, AppScreen::Cases);
    }

    #[test]
    fn filter_keys_cycle_and_clear() {
        let mut app = cases_app(30);
        handle_cases_input(&mut app, KeyCode::Char('s'));
        assert_eq!(app.filter.status, Some(CaseStatus::Open));
        handle_cases_input(&mut app, KeyCode::Char('S'));
        assert_eq!(app.filter.status, None);

        handle_cases_input(&mut app, KeyCode::Char('c'));
        assert_eq!(app.filter.category, app.category_options.first().copied());

        handle_cases_input(&mut app, KeyCode::Char('x'));
        assert!(!app.filter.is_active());
        assert_eq!(app.filtered_case_indices.len(), 30);
    }

    #[test]
    fn enter_opens_selected_row() {
        let mut app = cases_app(30);
        handle_cases_input(&mut app, KeyCode::Down);
        handle_cases_input(&mut app, KeyCode::Down);
        handle_cases_input(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, AppScreen::CaseDetail);
        assert_eq!(app.detail_case_index, Some(2));

        app.close_detail();
        assert_eq!(app.screen, AppScreen::Cases);
    }

    #[test]
    fn enter_on_empty_result_does_nothing() {
        let mut app = cases_app(0);
        handle_cases_input(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, AppScreen::Cases);
        handle_cases_input(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, AppScreen::Dashboard);
    }
}
