use crate::{CaseStatus, Category};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

pub const ACCENT: Color = Color::Rgb(0, 0, 238);

pub const fn status_color(status: CaseStatus) -> Color {
    match status {
        CaseStatus::Critical => Color::Red,
        CaseStatus::Unsolved => Color::Yellow,
        CaseStatus::Open => Color::Blue,
        CaseStatus::Closed => Color::Green,
    }
}

pub fn status_badge(status: CaseStatus) -> Span<'static> {
    Span::styled(
        format!(" {} ", status.as_str()),
        Style::default()
            .fg(Color::Black)
            .bg(status_color(status))
            .add_modifier(Modifier::BOLD),
    )
}

pub fn category_badge(category: Category) -> Span<'static> {
    Span::styled(
        format!("[{}]", category.label()),
        Style::default().fg(Color::Magenta),
    )
}

pub fn key_hint(key: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(
            key,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(": {action}   "), Style::default().fg(Color::Gray)),
    ]
}
