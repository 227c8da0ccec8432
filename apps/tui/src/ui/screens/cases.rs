use crate::app::App;
use crate::ui::format::time_ago;
use crate::ui::widgets::badges::{status_badge, ACCENT};
use crate::ui::widgets::tables::scroll_offset;
use chrono::{DateTime, Utc};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_cases(app: &App, f: &mut Frame<'_>, area: Rect, now: DateTime<Utc>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filters
            Constraint::Length(1), // Result count
            Constraint::Min(3),    // Table
        ])
        .split(area);

    render_filters(app, f, layout[0]);

    let count = Paragraph::new(Span::styled(
        format!("Found {} cases", app.filtered_case_indices.len()),
        Style::default().fg(Color::Gray),
    ));
    f.render_widget(count, layout[1]);

    if app.filtered_case_indices.is_empty() {
        render_empty_state(f, layout[2]);
    } else {
        render_case_table(app, f, layout[2], now);
    }
}

fn render_filters(app: &App, f: &mut Frame<'_>, area: Rect) {
    let border_color = if app.search_active {
        Color::Yellow
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title("Search & Filters")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let search = if app.filter.search.is_empty() && !app.search_active {
        Span::styled(
            "Search cases...",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        let blink = app.search_active && (app.animation_counter * 2.0).sin() > 0.0;
        let cursor = if blink { "█" } else { "" };
        Span::styled(
            format!("{}{cursor}", app.filter.search),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    };

    let label_style = Style::default().fg(Color::Gray);
    let value_style = Style::default().fg(Color::Yellow);
    let status = app.filter.status.map_or("All Statuses", |status| status.label());
    let category = app
        .filter
        .category
        .map_or("All Categories", |category| category.label());

    let mut spans = vec![
        Span::styled("/ ", label_style),
        search,
        Span::styled("   Status: ", label_style),
        Span::styled(status, value_style),
        Span::styled("   Category: ", label_style),
        Span::styled(category, value_style),
    ];
    if app.filter.is_active() {
        spans.push(Span::styled("   [x] Clear Filters", label_style));
    }

    f.render_widget(Paragraph::new(TextLine::from(spans)).block(block), area);
}

fn render_empty_state(f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let lines = vec![
        TextLine::from(Span::styled(
            "No cases found",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            "Try adjusting your search or filters",
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_case_table(app: &App, f: &mut Frame<'_>, area: Rect, now: DateTime<Utc>) {
    let header = Row::new(vec![
        Cell::from("ID"),
        Cell::from("Status"),
        Cell::from("Category"),
        Cell::from("Title"),
        Cell::from("Location"),
        Cell::from("Reported"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let total_rows = app.filtered_case_indices.len();
    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows, app.selected_case_index);

    let rows = app
        .filtered_cases()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(position, case)| {
            let style = if position == app.selected_case_index {
                Style::default()
                    .bg(ACCENT)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(case.id.as_str()),
                Cell::from(status_badge(case.status)),
                Cell::from(case.category.label()),
                Cell::from(case.title.as_str()),
                Cell::from(case.location.as_str()),
                Cell::from(time_ago(case.date, now)),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Length(9),
        Constraint::Length(10),
        Constraint::Length(18),
        Constraint::Min(24),
        Constraint::Length(29),
        Constraint::Length(18),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(
                    "Cases ({} of {})",
                    app.selected_case_index + 1,
                    total_rows
                ))
                .borders(Borders::ALL),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}
