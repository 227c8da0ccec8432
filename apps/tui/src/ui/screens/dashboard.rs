use crate::app::App;
use crate::data::map::case_position;
use crate::ui::format::time_ago;
use crate::ui::widgets::badges::{status_badge, ACCENT};
use crate::ui::widgets::charts::{render_category_bars, render_monthly_trend, render_stat_card};
use crate::ui::widgets::map::{render_case_map, MapMarker};
use crate::ui::widgets::tables::scroll_offset;
use chrono::{DateTime, Utc};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

/// Categories listed on the dashboard and the statistics screen.
pub const TOP_CATEGORY_LIMIT: usize = 5;

pub fn render_dashboard(app: &App, f: &mut Frame<'_>, area: Rect, now: DateTime<Utc>) {
    let alert_height = if app.stats.critical_cases > 0 { 3 } else { 0 };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(alert_height),
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(9),
        ])
        .split(area);

    render_title(f, layout[0]);
    if alert_height > 0 {
        render_critical_alert(app, f, layout[1]);
    }
    render_cards(app, f, layout[2]);
    render_overview(app, f, layout[3]);
    render_recent_cases(app, f, layout[4], now);
}

fn render_title(f: &mut Frame<'_>, area: Rect) {
    let text = Text::from(vec![
        TextLine::from(Span::styled(
            "Crime Watch Dashboard",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            "Monitor and track criminal activity in your area",
            Style::default().fg(Color::Gray),
        )),
    ]);
    f.render_widget(Paragraph::new(text), area);
}

fn render_critical_alert(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            "Critical Cases Alert",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let line = TextLine::from(vec![
        Span::styled(
            format!(
                "There are currently {} critical cases that require immediate attention. ",
                app.stats.critical_cases
            ),
            Style::default().fg(Color::LightRed),
        ),
        Span::styled(
            "[c] View critical cases",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_cards(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let stats = &app.stats;
    let caption = |text: &'static str| Span::styled(text, Style::default().fg(Color::Gray));
    let critical_color = if stats.critical_cases > 0 {
        Color::Red
    } else {
        Color::Gray
    };

    render_stat_card(
        f,
        columns[0],
        "Total Cases",
        &stats.total_cases.to_string(),
        caption("Total reported cases in the system"),
        Color::White,
    );
    render_stat_card(
        f,
        columns[1],
        "Open Investigations",
        &stats.open_cases.to_string(),
        caption("Cases currently under investigation"),
        Color::Blue,
    );
    render_stat_card(
        f,
        columns[2],
        "Solved Cases",
        &stats.solved_cases.to_string(),
        caption("Successfully resolved cases"),
        Color::Green,
    );
    render_stat_card(
        f,
        columns[3],
        "Critical Cases",
        &stats.critical_cases.to_string(),
        caption("High priority cases requiring immediate attention"),
        critical_color,
    );
}

fn render_overview(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    let markers = app
        .recent_cases()
        .iter()
        .enumerate()
        .map(|(index, case)| MapMarker {
            position: case_position(case),
            status: case.status,
            selected: index == app.selected_recent_index,
        })
        .collect::<Vec<_>>();

    render_case_map(f, columns[0], "Crime Map", &markers, app.animation_counter);
    render_category_bars(f, columns[1], &app.stats.top_categories(TOP_CATEGORY_LIMIT));
    render_monthly_trend(f, columns[2], &app.stats.monthly_counts);
}

fn render_recent_cases(app: &App, f: &mut Frame<'_>, area: Rect, now: DateTime<Utc>) {
    let block = Block::default()
        .title("Recent Cases")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let recent = app.recent_cases();
    if recent.is_empty() {
        let paragraph = Paragraph::new("No cases reported")
            .block(block)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    }

    let max_visible_rows = area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(recent.len(), max_visible_rows, app.selected_recent_index);

    let rows = recent
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, case)| {
            let style = if index == app.selected_recent_index {
                Style::default()
                    .bg(ACCENT)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(status_badge(case.status)),
                Cell::from(case.category.label()),
                Cell::from(case.title.as_str()),
                Cell::from(time_ago(case.date, now)),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Length(10),
        Constraint::Length(18),
        Constraint::Min(20),
        Constraint::Length(20),
    ];

    let table = Table::new(rows, widths).block(block).column_spacing(1);
    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::sample_app;
    use crate::ui::test_support::render_to_string;

    #[test]
    fn shows_cards_and_recent_cases() {
        let app = sample_app(30);
        let screen = render_to_string(&app, 140, 45);
        assert!(screen.contains("Crime Watch Dashboard"));
        assert!(screen.contains("Open Investigations"));
        assert!(screen.contains("Recent Cases"));
        assert!(screen.contains("Monthly Trend"));
        assert!(screen.contains(app.cases[0].title.as_str()));
    }

    #[test]
    fn alert_only_when_critical_cases_exist() {
        let mut app = sample_app(30);
        app.stats.critical_cases = 0;
        let screen = render_to_string(&app, 140, 45);
        assert!(!screen.contains("Critical Cases Alert"));

        app.stats.critical_cases = 4;
        let screen = render_to_string(&app, 140, 45);
        assert!(screen.contains("Critical Cases Alert"));
        assert!(screen.contains("There are currently 4 critical cases"));
    }

    #[test]
    fn empty_dataset_renders_placeholders() {
        let app = sample_app(0);
        let screen = render_to_string(&app, 140, 45);
        assert!(screen.contains("No cases reported"));
        assert!(screen.contains("No data available"));
    }
}
