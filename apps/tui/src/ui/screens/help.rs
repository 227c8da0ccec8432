use crate::ui::widgets::popup::centered_rect;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(80, 80, area);
    f.render_widget(Clear, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(Span::styled(
        "Press F1 or Esc to close",
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1.min(popup_area.height),
    };

    f.render_widget(hint, hint_area);
}

fn shortcut(key: &'static str, description: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("  {key}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" - {description}")),
    ])
}

fn heading(text: &'static str) -> TextLine<'static> {
    TextLine::from(Span::styled(
        text,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "Crime Watch",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from("Monitor and track criminal activity in your area. All case data is generated at start-up."),
        TextLine::from(""),
        heading("Keyboard Shortcuts:"),
        shortcut("1-4 / Tab", "Switch between Dashboard, Cases, Crime Map and Statistics"),
        shortcut("F1", "Toggle this help popup"),
        shortcut("Space", "Pause/resume animations"),
        shortcut("Esc", "Close popup / Go back"),
        shortcut("q", "Quit application"),
        TextLine::from(""),
        heading("Dashboard:"),
        shortcut("↑/↓, Enter", "Select and open a recent case"),
        shortcut("/", "Search cases by title or id (#id looks up an id only)"),
        shortcut("c", "View critical cases"),
        TextLine::from(""),
        heading("Cases:"),
        shortcut("/", "Search title, description and location"),
        shortcut("s / S", "Cycle status filter"),
        shortcut("c / C", "Cycle category filter"),
        shortcut("x", "Clear filters"),
        shortcut("PgUp/PgDn, Home/End", "Jump through the list"),
        TextLine::from(""),
        heading("Crime Map:"),
        shortcut("s", "Cycle status filter"),
        shortcut("←/→", "Select marker"),
        shortcut("Enter", "Show marker details, press again to open the case"),
        TextLine::from(""),
        heading("CLI Options:"),
    ];

    let help_text = crate::cli::CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(TextLine::from(line.to_string()));
    }

    lines
}
