use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::Mode;
use crate::tui::app::App;

/// Section heading above the picker: "ROUTES" or "RAIL LINES"
pub fn render_heading(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let line = Line::from(vec![
        Span::styled(
            app.mode().heading(),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} available", app.catalog().len()),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn aux_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Bus => "Show stops",
        Mode::Rail => "Show stations",
    }
}

/// Checkbox line for the stops/stations overlay
pub fn render_aux_toggle(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mark = if app.store.show_auxiliary_markers() {
        "[x]"
    } else {
        "[ ]"
    };
    let line = Line::from(vec![
        Span::styled(mark, Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(
            format!(" {}", aux_label(app.mode())),
            Style::default().fg(app.theme.text).bg(bg),
        ),
        Span::styled("  (s)", Style::default().fg(app.theme.dim).bg(bg)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// One bordered card per KPI, stacked while there is room
pub fn render_kpi_cards(frame: &mut Frame, app: &App, area: Rect) {
    let kpi = app.kpi;
    let cards: [(&str, usize, &str, Color); 4] = [
        ("ACTIVE VEHICLES", kpi.active, "tracking now", app.theme.text_bright),
        ("ON TIME", kpi.on_time, "within schedule", app.theme.on_time),
        ("LATE", kpi.late, "behind schedule", app.theme.late),
        ("OFF ROUTE", kpi.off_route, "needs attention", app.theme.off_route),
    ];

    let fit = (area.height / 3).min(cards.len() as u16) as usize;
    if fit == 0 {
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); fit])
        .split(area);

    let bg = app.theme.background;
    for ((title, value, caption, color), rect) in cards.into_iter().zip(rows.iter()) {
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
                value.to_string(),
                Style::default().fg(color).bg(bg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", caption),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), *rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{render_to_string, test_app};
    use insta::assert_snapshot;

    #[test]
    fn cards_show_selection_counts() {
        let mut app = test_app();
        app.toggle_entity("001");
        app.refresh_derived();
        let out = render_to_string(30, 12, |frame, area| render_kpi_cards(frame, &app, area));
        assert_snapshot!(out, @r"
        ┌ ACTIVE VEHICLES ───────────┐
        │2  tracking now             │
        └────────────────────────────┘
        ┌ ON TIME ───────────────────┐
        │1  within schedule          │
        └────────────────────────────┘
        ┌ LATE ──────────────────────┐
        │1  behind schedule          │
        └────────────────────────────┘
        ┌ OFF ROUTE ─────────────────┐
        │0  needs attention          │
        └────────────────────────────┘
        ");
    }

    #[test]
    fn cards_drop_when_short_on_room() {
        let app = test_app();
        let out = render_to_string(30, 7, |frame, area| render_kpi_cards(frame, &app, area));
        assert!(out.contains("ON TIME"));
        assert!(!out.contains("LATE"));
    }

    #[test]
    fn aux_toggle_follows_mode_and_flag() {
        let mut app = test_app();
        let out = render_to_string(30, 1, |frame, area| render_aux_toggle(frame, &app, area));
        assert_eq!(out, "[x] Show stops  (s)");
        app.set_mode(Mode::Rail);
        app.toggle_auxiliary_markers();
        let out = render_to_string(30, 1, |frame, area| render_aux_toggle(frame, &app, area));
        assert_eq!(out, "[ ] Show stations  (s)");
    }
}
