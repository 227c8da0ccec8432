use crate::app::App;
use crate::data::map::{case_position, MarkerPosition};
use crate::ui::format::{truncate_description, EXCERPT_LENGTH};
use crate::ui::widgets::badges::{status_badge, status_color};
use crate::ui::widgets::map::{render_case_map, MapMarker};
use crate::ui::widgets::popup::anchored_rect;
use crate::CaseStatus;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const POPUP_WIDTH: u16 = 48;
const POPUP_HEIGHT: u16 = 9;

pub fn render_map(app: &App, f: &mut Frame<'_>, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(area);

    render_filter_line(app, f, layout[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(24)])
        .split(layout[1]);

    let markers = app
        .map_case_indices
        .iter()
        .enumerate()
        .filter_map(|(position, index)| {
            app.cases.get(*index).map(|case| MapMarker {
                position: case_position(case),
                status: case.status,
                selected: position == app.selected_marker_index,
            })
        })
        .collect::<Vec<_>>();

    render_case_map(f, columns[0], "Crime Map", &markers, app.animation_counter);
    render_legend(app, f, columns[1]);

    if app.marker_popup_open {
        render_marker_popup(app, f, columns[0]);
    }
}

fn render_filter_line(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status = app
        .map_status_filter
        .map_or("All Cases", |status| status.label());

    let line = TextLine::from(vec![
        Span::styled("Filter: ", Style::default().fg(Color::Gray)),
        Span::styled(status, Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("   Showing {} cases", app.map_case_indices.len()),
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_legend(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Legend")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = CaseStatus::ALL
        .iter()
        .rev()
        .map(|status| {
            TextLine::from(vec![
                Span::styled("● ", Style::default().fg(status_color(*status))),
                Span::raw(status.label()),
            ])
        })
        .collect::<Vec<_>>();

    if let Some((_, case)) = app.selected_marker_case() {
        lines.push(TextLine::from(""));
        lines.push(TextLine::from(Span::styled(
            "Selected:",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(TextLine::from(case.id.as_str()));
        lines.push(TextLine::from(case.location.as_str()));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Terminal cell of a marker inside the map's bordered area.
fn marker_cell(position: MarkerPosition, map_area: Rect) -> (u16, u16) {
    let inner = map_area.inner(Margin::new(1, 1));
    let scale = |length: u16, percent: u8| {
        u16::try_from(u32::from(length) * u32::from(percent) / 100).unwrap_or(length)
    };
    (
        inner.x + scale(inner.width, position.left),
        inner.y + scale(inner.height, position.top),
    )
}

fn render_marker_popup(app: &App, f: &mut Frame<'_>, map_area: Rect) {
    let Some((_, case)) = app.selected_marker_case() else {
        return;
    };

    let (x, y) = marker_cell(case_position(case), map_area);
    let popup = anchored_rect(x + 2, y + 1, POPUP_WIDTH, POPUP_HEIGHT, map_area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(status_badge(case.status))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(status_color(case.status)));

    let text = Text::from(vec![
        TextLine::from(Span::styled(
            case.title.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(truncate_description(&case.description, EXCERPT_LENGTH)),
        TextLine::from(Span::styled(
            case.location.as_str(),
            Style::default().fg(Color::Gray),
        )),
        TextLine::from(Span::styled(
            "Enter: View Details   Esc: Close",
            Style::default().fg(Color::Yellow),
        )),
    ]);

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, popup);
}
