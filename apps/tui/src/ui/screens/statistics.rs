use crate::app::App;
use crate::ui::screens::dashboard::TOP_CATEGORY_LIMIT;
use crate::ui::widgets::charts::{
    render_category_bars, render_monthly_trend, render_stat_card, render_status_distribution,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Solve rates above this percentage count as good.
const GOOD_SOLVE_RATE: usize = 50;

pub fn render_statistics(app: &App, f: &mut Frame<'_>, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(10),
        ])
        .split(area);

    let title = Text::from(vec![
        TextLine::from(Span::styled(
            "Crime Statistics",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            "Analyze crime trends and patterns over time",
            Style::default().fg(Color::Gray),
        )),
    ]);
    f.render_widget(Paragraph::new(title), layout[0]);

    render_summary_cards(app, f, layout[1]);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[2]);
    render_status_distribution(f, charts[0], &app.stats);
    render_category_bars(f, charts[1], &app.stats.top_categories(TOP_CATEGORY_LIMIT));

    render_monthly_trend(f, layout[3], &app.stats.monthly_counts);
}

fn render_summary_cards(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let stats = &app.stats;
    let muted = Style::default().fg(Color::Gray);

    render_stat_card(
        f,
        columns[0],
        "Total Cases",
        &stats.total_cases.to_string(),
        Span::styled("Last 30 days", muted),
        Color::White,
    );

    let solve_rate = stats.solve_rate();
    let (verdict, verdict_color) = if solve_rate > GOOD_SOLVE_RATE {
        ("▲ Good", Color::Green)
    } else {
        ("▼ Needs improvement", Color::Red)
    };
    render_stat_card(
        f,
        columns[1],
        "Solve Rate",
        &format!("{solve_rate}%"),
        Span::styled(verdict, Style::default().fg(verdict_color)),
        Color::White,
    );

    let (common, common_caption) = stats.most_common_category().map_or_else(
        || ("N/A".to_string(), "No data available".to_string()),
        |(category, count)| (category.label().to_string(), format!("{count} cases reported")),
    );
    render_stat_card(
        f,
        columns[2],
        "Most Common",
        &common,
        Span::styled(common_caption, muted),
        Color::White,
    );

    let (critical_caption, critical_color) = if stats.critical_cases > 0 {
        ("Requires immediate attention", Color::Red)
    } else {
        ("All clear", Color::Green)
    };
    render_stat_card(
        f,
        columns[3],
        "Critical Cases",
        &stats.critical_cases.to_string(),
        Span::styled(critical_caption, Style::default().fg(critical_color)),
        Color::White,
    );
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::sample_app;
    use crate::app::AppScreen;
    use crate::ui::test_support::render_to_string;

    #[test]
    fn shows_summary_and_charts() {
        let mut app = sample_app(30);
        app.switch_screen(AppScreen::Statistics);
        let screen = render_to_string(&app, 160, 45);
        assert!(screen.contains("Crime Statistics"));
        assert!(screen.contains("Last 30 days"));
        assert!(screen.contains(&format!("{}%", app.stats.solve_rate())));
        assert!(screen.contains("Case Status Distribution"));
        assert!(screen.contains("Top Categories"));
        assert!(screen.contains("Monthly Trend"));

        let (category, count) = app
            .stats
            .most_common_category()
            .expect("30 cases have a most common category");
        assert!(screen.contains(category.label()));
        assert!(screen.contains(&format!("{count} cases reported")));
    }

    #[test]
    fn solve_rate_verdict() {
        let mut app = sample_app(10);
        app.switch_screen(AppScreen::Statistics);
        app.stats.total_cases = 10;
        app.stats.solved_cases = 6;
        let screen = render_to_string(&app, 160, 45);
        assert!(screen.contains("60%"));
        assert!(screen.contains("Good"));

        app.stats.solved_cases = 5;
        let screen = render_to_string(&app, 160, 45);
        assert!(screen.contains("50%"));
        assert!(screen.contains("Needs improvement"));
    }

    #[test]
    fn empty_dataset_has_no_common_category() {
        let mut app = sample_app(0);
        app.switch_screen(AppScreen::Statistics);
        let screen = render_to_string(&app, 160, 45);
        assert!(screen.contains("N/A"));
        assert!(screen.contains("All clear"));
        assert!(screen.contains("0%"));
    }
}
