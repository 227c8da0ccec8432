// UI module for crime_watch
// Handles all UI rendering functions

pub mod format;
pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use crate::ui::widgets::badges::{key_hint, ACCENT};
use chrono::{DateTime, Utc};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    draw(app, f, Utc::now());
}

/// Renders every part of the frame with relative dates measured from `now`.
pub fn draw(app: &App, f: &mut Frame<'_>, now: DateTime<Utc>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation
            Constraint::Min(5),    // Screen
            Constraint::Length(1), // Shortcuts / status
        ])
        .split(f.area());

    render_header(app, f, layout[0]);

    match app.screen {
        AppScreen::Dashboard => screens::dashboard::render_dashboard(app, f, layout[1], now),
        AppScreen::Cases => screens::cases::render_cases(app, f, layout[1], now),
        AppScreen::Map => screens::map::render_map(app, f, layout[1]),
        AppScreen::Statistics => screens::statistics::render_statistics(app, f, layout[1]),
        AppScreen::CaseDetail => screens::case_detail::render_case_detail(app, f, layout[1], now),
    }

    render_footer(app, f, layout[2]);

    if app.show_help {
        screens::help::render_help_popup(f, f.area());
    }
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            " Crime Watch ",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(32)])
        .split(inner);

    let selected = app
        .screen
        .tab_index()
        .or_else(|| app.detail_return_screen.tab_index());
    let titles = AppScreen::TABS
        .iter()
        .enumerate()
        .map(|(index, screen)| TextLine::from(format!("{} {}", index + 1, screen.label())))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .divider(Span::raw("|"));
    f.render_widget(tabs, columns[0]);

    f.render_widget(Paragraph::new(quick_find_line(app)), columns[1]);
}

fn quick_find_line(app: &App) -> TextLine<'_> {
    if app.quick_find_active {
        let blink = (app.animation_counter * 2.0).sin() > 0.0;
        let cursor = if blink { "█" } else { " " };
        return TextLine::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}{cursor}", app.quick_find_query),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
    }

    if app.screen == AppScreen::Dashboard {
        TextLine::from(Span::styled(
            "/ Search cases...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        TextLine::from("")
    }
}

fn render_footer(app: &App, f: &mut Frame<'_>, area: Rect) {
    if !app.status_message.is_empty() {
        let message = Paragraph::new(Span::styled(
            app.status_message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
        f.render_widget(message, area);
        return;
    }

    let mut spans = Vec::new();
    for (key, action) in screen_shortcuts(app) {
        spans.extend(key_hint(key, action));
    }
    spans.extend(key_hint("F1", "Help"));
    spans.extend(key_hint("q", "Quit"));

    f.render_widget(Paragraph::new(TextLine::from(spans)), area);
}

fn screen_shortcuts(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.screen {
        AppScreen::Dashboard if app.quick_find_active => {
            vec![("Enter", "Open best match"), ("Esc", "Cancel")]
        }
        AppScreen::Dashboard => {
            let mut keys = vec![("↑/↓", "Select"), ("Enter", "Open"), ("/", "Search")];
            if app.stats.critical_cases > 0 {
                keys.push(("c", "Critical cases"));
            }
            keys
        }
        AppScreen::Cases if app.search_active => vec![("Enter", "Done"), ("Esc", "Clear search")],
        AppScreen::Cases => vec![
            ("/", "Search"),
            ("s", "Status"),
            ("c", "Category"),
            ("x", "Clear"),
            ("Enter", "Open"),
        ],
        AppScreen::Map => vec![("s", "Status"), ("←/→", "Select"), ("Enter", "Details")],
        AppScreen::Statistics => vec![("Esc", "Dashboard")],
        AppScreen::CaseDetail => vec![("↑/↓", "Related"), ("Enter", "Open"), ("Esc", "Back")],
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::draw;
    use crate::app::App;
    use crate::data::test_support::fixed_now;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    /// Renders `app` into a test terminal and returns the screen text.
    pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend never fails");
        terminal
            .draw(|f| draw(app, f, fixed_now()))
            .expect("test backend never fails");

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..height {
            for x in 0..width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }
}
