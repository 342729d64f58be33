use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Sparkline};

use crate::data::metrics::{MetricPoint, Score};
use crate::tui::app::App;

/// Render the performance page: headline scores over three charts
pub fn render_performance_view(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // heading
            Constraint::Length(3), // stat cards
            Constraint::Min(4),    // ridership + incidents
            Constraint::Min(4),    // on-time + active trips
        ])
        .split(area);

    render_heading(frame, app, rows[0]);
    render_scores(frame, app, rows[1]);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(30)])
        .split(rows[2]);
    render_series(frame, app, top[0], "Ridership", &app.metrics.ridership, app.theme.chart, "");
    render_incidents(frame, app, top[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[3]);
    render_series(
        frame,
        app,
        bottom[0],
        "On-time %",
        &app.metrics.on_time,
        app.theme.chart_alt,
        "%",
    );
    render_series(
        frame,
        app,
        bottom[1],
        "Active trips",
        &app.metrics.active_trips,
        app.theme.chart,
        "",
    );
}

fn render_heading(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let line = Line::from(vec![
        Span::styled(
            "Performance",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  last 24 hours", Style::default().fg(app.theme.dim).bg(bg)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// "▲ 1.2" / "▼ 1" / "= 0" with `precision` decimals
pub(super) fn delta_text(delta: f64, precision: usize) -> String {
    let arrow = if delta > 0.0 {
        "\u{25B2}"
    } else if delta < 0.0 {
        "\u{25BC}"
    } else {
        "="
    };
    format!("{} {:.*}", arrow, precision, delta.abs())
}

fn render_scores(frame: &mut Frame, app: &App, area: Rect) {
    let score = &app.metrics.score;
    // (title, value text, score, lower-is-better)
    let cards: [(&str, String, Score, bool); 3] = [
        ("ON-TIME", format!("{:.1}%", score.otp.value), score.otp, false),
        ("INCIDENTS", format!("{:.0}", score.incidents.value), score.incidents, true),
        ("SATISFACTION", format!("{:.1}/5", score.csat.value), score.csat, false),
    ];

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let bg = app.theme.background;
    let window = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.panel).bg(bg))
        .title(Span::styled(" WINDOW ", Style::default().fg(app.theme.dim).bg(bg)))
        .style(Style::default().bg(bg));
    let window_text = Span::styled(
        format!("{} hourly points", app.metrics.ridership.len()),
        Style::default().fg(app.theme.text).bg(bg),
    );
    frame.render_widget(Paragraph::new(Line::from(window_text)).block(window), cols[3]);

    for ((title, value, s, lower_is_better), rect) in cards.into_iter().zip(cols.iter()) {
        let improving = (s.delta < 0.0) == lower_is_better;
        let delta_color = if s.delta == 0.0 {
            app.theme.dim
        } else if improving {
            app.theme.on_time
        } else {
            app.theme.off_route
        };
        let precision = if title == "INCIDENTS" { 0 } else { 1 };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.panel).bg(bg))
            .title(Span::styled(
                format!(" {} ", title),
                Style::default().fg(app.theme.dim).bg(bg),
            ))
            .style(Style::default().bg(bg));
        let line = Line::from(vec![
            Span::styled(
                value,
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ", Style::default().bg(bg)),
            Span::styled(
                delta_text(s.delta, precision),
                Style::default().fg(delta_color).bg(bg),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), *rect);
    }
}

fn series_block<'a>(app: &App, title: String) -> Block<'a> {
    let bg = app.theme.background;
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.panel).bg(bg))
        .title(Span::styled(
            title,
            Style::default().fg(app.theme.text).bg(bg),
        ))
        .style(Style::default().bg(bg))
}

fn render_series(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    name: &str,
    points: &[MetricPoint],
    color: Color,
    unit: &str,
) {
    let values: Vec<u64> = points.iter().map(|p| p.value).collect();
    let title = match points.last() {
        Some(p) => format!(" {}  {}{} at {} ", name, p.value, unit, p.label),
        None => format!(" {} ", name),
    };
    let sparkline = Sparkline::default()
        .block(series_block(app, title))
        .data(&values)
        .style(Style::default().fg(color).bg(app.theme.background));
    frame.render_widget(sparkline, area);
}

fn render_incidents(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let bars: Vec<Bar> = app
        .metrics
        .incidents
        .iter()
        .map(|c| {
            Bar::default()
                .value(c.value)
                .label(Line::from(c.name.clone()))
                .style(Style::default().fg(app.theme.bar))
                .value_style(Style::default().fg(bg).bg(app.theme.bar))
        })
        .collect();

    let chart = BarChart::default()
        .block(series_block(app, " Incidents ".to_string()))
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(1);
    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{TERM_H, TERM_W, render_to_string, test_app};

    #[test]
    fn delta_arrows() {
        assert_eq!(delta_text(1.2, 1), "\u{25B2} 1.2");
        assert_eq!(delta_text(-1.0, 0), "\u{25BC} 1");
        assert_eq!(delta_text(0.0, 1), "= 0.0");
    }

    #[test]
    fn page_shows_scores_and_charts() {
        let app = test_app();
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_performance_view(frame, &app, area)
        });
        assert!(out.contains("98.5%"));
        assert!(out.contains("4.5/5"));
        assert!(out.contains("Ridership"));
        assert!(out.contains("Incidents"));
        assert!(out.contains("Active trips"));
        assert!(out.contains("Signal"));
        assert!(out.contains("24 hourly points"));
    }
}
