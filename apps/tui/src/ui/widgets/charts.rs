use crate::data::{CaseStats, MonthlyCount};
use crate::ui::widgets::badges::status_color;
use crate::{CaseStatus, Category};
use ratatui::layout::{Alignment, Direction, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

const CATEGORY_COLORS: [Color; 5] = [
    Color::Red,
    Color::LightRed,
    Color::Yellow,
    Color::Cyan,
    Color::Magenta,
];

fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

fn render_empty(f: &mut Frame<'_>, area: Rect, title: &str) {
    let paragraph = Paragraph::new("No data available")
        .block(chart_block(title))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(paragraph, area);
}

/// A bordered card with a big value and a caption underneath.
pub fn render_stat_card(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    value: &str,
    caption: Span<'_>,
    color: Color,
) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let text = Text::from(vec![
        TextLine::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(caption),
    ]);

    f.render_widget(Paragraph::new(text).block(block), area);
}

pub fn render_monthly_trend(f: &mut Frame<'_>, area: Rect, months: &[MonthlyCount]) {
    let title = "Monthly Trend";
    if months.is_empty() {
        render_empty(f, area, title);
        return;
    }

    let bars: Vec<Bar<'_>> = months
        .iter()
        .map(|month| {
            Bar::default()
                .value(u64::from(month.value))
                .label(TextLine::from(month.name))
                .style(Style::default().fg(Color::LightRed))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::LightRed)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let bar_width = (area.width.saturating_sub(2) / 6).saturating_sub(1).clamp(1, 9);

    let chart = BarChart::default()
        .block(chart_block(title))
        .data(BarGroup::default().bars(&bars))
        .bar_gap(1)
        .bar_width(bar_width);

    f.render_widget(chart, area);
}

/// Horizontal bars for the busiest categories.
pub fn render_category_bars(f: &mut Frame<'_>, area: Rect, categories: &[(Category, usize)]) {
    let title = "Top Categories";
    if categories.is_empty() {
        render_empty(f, area, title);
        return;
    }

    let bars: Vec<Bar<'_>> = categories
        .iter()
        .enumerate()
        .map(|(index, (category, count))| {
            let color = CATEGORY_COLORS[index % CATEGORY_COLORS.len()];
            Bar::default()
                .value(u64::try_from(*count).unwrap_or(u64::MAX))
                .label(TextLine::from(category.label()))
                .text_value(format!("{count} cases"))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block(title))
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_gap(0)
        .bar_width(1);

    f.render_widget(chart, area);
}

pub fn render_status_distribution(f: &mut Frame<'_>, area: Rect, stats: &CaseStats) {
    let title = "Case Status Distribution";
    if stats.total_cases == 0 {
        render_empty(f, area, title);
        return;
    }

    let bars: Vec<Bar<'_>> = CaseStatus::ALL
        .iter()
        .map(|status| {
            let color = status_color(*status);
            Bar::default()
                .value(u64::try_from(stats.status_count(*status)).unwrap_or(u64::MAX))
                .label(TextLine::from(status.label()))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let bar_width = (area.width.saturating_sub(2) / 4).saturating_sub(2).clamp(1, 12);

    let chart = BarChart::default()
        .block(chart_block(title))
        .data(BarGroup::default().bars(&bars))
        .bar_gap(2)
        .bar_width(bar_width);

    f.render_widget(chart, area);
}
