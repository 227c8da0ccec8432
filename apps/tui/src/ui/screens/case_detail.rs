use crate::app::App;
use crate::data::CaseRecord;
use crate::ui::format::{long_date, long_date_time, short_date};
use crate::ui::widgets::badges::{category_badge, status_badge, ACCENT};
use crate::CaseStatus;
use chrono::{DateTime, Utc};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_case_detail(app: &App, f: &mut Frame<'_>, area: Rect, now: DateTime<Utc>) {
    let Some(case) = app.detail_case() else {
        let paragraph = Paragraph::new("Case not found")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(area);

    let related = app.related_case_indices();
    let related_height = if related.is_empty() {
        0
    } else {
        u16::try_from(related.len() * 2 + 2).unwrap_or(u16::MAX)
    };

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(related_height)])
        .split(columns[0]);

    render_report(case, f, left[0], now);
    if !related.is_empty() {
        render_related_cases(app, &related, f, left[1]);
    }
    render_report_information(case, f, columns[1]);
}

fn section(title: &'static str) -> TextLine<'static> {
    TextLine::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn render_report(case: &CaseRecord, f: &mut Frame<'_>, area: Rect, now: DateTime<Utc>) {
    let block = Block::default()
        .title("Case Report")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let muted = Style::default().fg(Color::Gray);
    let mut lines = vec![
        TextLine::from(vec![
            category_badge(case.category),
            Span::raw(" "),
            status_badge(case.status),
        ]),
        TextLine::from(Span::styled(
            case.title.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            format!("{}  |  {}", long_date_time(case.date), case.location),
            muted,
        )),
        TextLine::from(""),
    ];

    if case.status == CaseStatus::Critical {
        lines.push(TextLine::from(Span::styled(
            "Critical Case Alert",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        lines.push(TextLine::from(Span::styled(
            "This case has been marked as critical and requires immediate attention.",
            Style::default().fg(Color::LightRed),
        )));
        lines.push(TextLine::from(""));
    }

    lines.extend([
        section("Case Description"),
        TextLine::from(case.description.trim_end().to_string()),
        TextLine::from(""),
        TextLine::from(
            "Local authorities are actively investigating this incident. If you have any information about this case, please contact the Crime Watch Network immediately.",
        ),
        TextLine::from(""),
        section("Investigation Details"),
        TextLine::from(format!("• Case opened on {}", long_date(case.date))),
        TextLine::from("• Responding officers filed initial report"),
        TextLine::from("• Evidence collection in progress"),
    ]);

    if case.status == CaseStatus::Closed {
        lines.push(TextLine::from(format!(
            "• Case resolved on {}",
            long_date(now)
        )));
    }

    lines.extend([
        TextLine::from(""),
        section("Public Safety Advice"),
        TextLine::from(case.category.safety_advice()),
    ]);

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_related_cases(app: &App, related: &[usize], f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Related Cases")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = Vec::new();
    for (position, index) in related.iter().enumerate() {
        let Some(case) = app.cases.get(*index) else {
            continue;
        };

        let title_style = if position == app.related_selection_index {
            Style::default()
                .bg(ACCENT)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(TextLine::from(vec![
            Span::styled(case.title.as_str(), title_style),
            Span::raw(" "),
            status_badge(case.status),
        ]));
        lines.push(TextLine::from(Span::styled(
            format!("  {}  |  {}", short_date(case.date), case.location),
            Style::default().fg(Color::Gray),
        )));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_report_information(case: &CaseRecord, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Report Information")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let label = Style::default().add_modifier(Modifier::BOLD);
    let value = Style::default().fg(Color::Gray);
    let fields = [
        ("Case ID", case.id.clone()),
        ("Status", case.status.label().to_string()),
        ("Reported By", "Anonymous".to_string()),
        ("Date Reported", long_date(case.date)),
        ("Location", case.location.clone()),
    ];

    let mut lines = Vec::new();
    for (name, text) in fields {
        lines.push(TextLine::from(Span::styled(name, label)));
        lines.push(TextLine::from(Span::styled(text, value)));
        lines.push(TextLine::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::sample_app;
    use crate::app::AppScreen;
    use crate::ui::test_support::render_to_string;
    use crate::CaseStatus;

    #[test]
    fn shows_report_and_information() {
        let mut app = sample_app(30);
        app.open_case(0, AppScreen::Cases);
        let case = app.cases[0].clone();
        let screen = render_to_string(&app, 180, 60);

        assert!(screen.contains(case.title.as_str()));
        assert!(screen.contains("Reported By"));
        assert!(screen.contains("Anonymous"));
        assert!(screen.contains("Public Safety Advice"));
        assert!(screen.contains("Case opened on"));
    }

    #[test]
    fn critical_and_closed_sections_depend_on_status() {
        let mut app = sample_app(30);
        app.open_case(0, AppScreen::Cases);

        app.cases[0].status = CaseStatus::Critical;
        let screen = render_to_string(&app, 180, 60);
        assert!(screen.contains("Critical Case Alert"));
        assert!(!screen.contains("Case resolved on"));

        app.cases[0].status = CaseStatus::Closed;
        let screen = render_to_string(&app, 180, 60);
        assert!(!screen.contains("Critical Case Alert"));
        assert!(screen.contains("Case resolved on March 14, 2025"));
    }

    #[test]
    fn missing_case_renders_placeholder() {
        let mut app = sample_app(5);
        app.switch_screen(AppScreen::CaseDetail);
        let screen = render_to_string(&app, 80, 24);
        assert!(screen.contains("Case not found"));
    }
}
