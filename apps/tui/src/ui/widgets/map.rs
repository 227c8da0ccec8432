use crate::data::map::MarkerPosition;
use crate::ui::widgets::badges::status_color;
use crate::CaseStatus;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// One case drawn on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapMarker {
    pub position: MarkerPosition,
    pub status: CaseStatus,
    pub selected: bool,
}

/// Canvas point for a marker. Positions are percentages from the top-left
/// corner while the canvas y axis grows upwards.
pub fn canvas_point(position: MarkerPosition) -> (f64, f64) {
    (f64::from(position.left), 100.0 - f64::from(position.top))
}

pub fn render_case_map(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    markers: &[MapMarker],
    animation: f64,
) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 4 || inner.height < 3 {
        return;
    }

    if markers.is_empty() {
        let paragraph = Paragraph::new("No cases to display")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    f.render_widget(
        Canvas::default()
            .paint(|ctx| {
                for step in 1..5 {
                    let offset = f64::from(step) * 20.0;
                    ctx.draw(&CanvasLine {
                        x1: offset,
                        y1: 0.0,
                        x2: offset,
                        y2: 100.0,
                        color: Color::DarkGray,
                    });
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: offset,
                        x2: 100.0,
                        y2: offset,
                        color: Color::DarkGray,
                    });
                }

                ctx.layer();

                let pulse = (animation * 3.0).sin().mul_add(0.5, 1.5);
                for marker in markers {
                    let (x, y) = canvas_point(marker.position);
                    let radius = if marker.status == CaseStatus::Critical {
                        1.5 * pulse
                    } else {
                        1.5
                    };

                    ctx.draw(&Circle {
                        x,
                        y,
                        radius,
                        color: status_color(marker.status),
                    });

                    if marker.selected {
                        ctx.draw(&Circle {
                            x,
                            y,
                            radius: 4.0,
                            color: Color::White,
                        });
                    }
                }
            })
            .x_bounds([0.0, 100.0])
            .y_bounds([0.0, 100.0]),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_percent_is_flipped_for_canvas() {
        let point = canvas_point(MarkerPosition { left: 27, top: 10 });
        assert!((point.0 - 27.0).abs() < f64::EPSILON);
        assert!((point.1 - 90.0).abs() < f64::EPSILON);
    }
}
