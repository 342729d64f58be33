pub mod kpi_panel;
pub mod map_view;
pub mod performance_view;
pub mod picker;
pub mod status_row;
pub mod tab_bar;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use regex::Regex;

use super::app::{App, View};

/// Width of the filter/KPI column on the live map page
const SIDE_PANEL_WIDTH: u16 = 38;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: tab bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tab bar + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);

    // Anchor is re-recorded by the live map page; stale rects must not
    // receive clicks on other pages
    app.picker_anchor = None;

    match app.view {
        View::LiveMap => render_live_map(frame, app, chunks[1]),
        View::Performance => performance_view::render_performance_view(frame, app, chunks[1]),
    }

    // Popup goes on top of everything but the status row
    picker::render_popup(frame, app);

    status_row::render_status_row(frame, app, chunks[2]);
}

fn render_live_map(frame: &mut Frame, app: &mut App, area: ratatui::layout::Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDE_PANEL_WIDTH.min(area.width / 2)),
            Constraint::Min(10),
        ])
        .split(area);

    let chip_rows = chip_rows(app, cols[0].width);
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),         // heading
            Constraint::Length(3),         // picker input
            Constraint::Length(chip_rows), // chips
            Constraint::Length(1),         // auxiliary toggle
            Constraint::Min(0),            // KPI cards
        ])
        .split(cols[0]);

    kpi_panel::render_heading(frame, app, side[0]);
    picker::render_picker_input(frame, app, side[1]);
    picker::render_chips(frame, app, side[2]);
    kpi_panel::render_aux_toggle(frame, app, side[3]);
    kpi_panel::render_kpi_cards(frame, app, side[4]);

    map_view::render_map(frame, app, cols[1]);
}

/// Rows reserved for chips: grows with the selection, capped at three
fn chip_rows(app: &App, width: u16) -> u16 {
    let (labels, overflow) = picker::chip_labels(app);
    let mut rows = 1u16;
    let mut used = 0usize;
    let extra = (overflow > 0).then(|| format!("+{} more", overflow));
    let widths = labels
        .iter()
        .map(|l| crate::util::unicode::display_width(l).min(width as usize) + 3)
        .chain(extra.iter().map(|s| s.len() + 1));
    for w in widths {
        if used > 0 && used + w > width as usize {
            rows += 1;
            used = 0;
        }
        used += w;
    }
    rows.min(3)
}

/// Push spans for text with regex match highlighting. If no regex or no matches,
/// pushes a single span with `base_style`. Otherwise splits text at match boundaries.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let re = match search_re {
        Some(r) => r,
        None => {
            spans.push(Span::styled(text.to_string(), base_style));
            return;
        }
    };

    let mut last_end = 0;
    let mut has_match = false;
    for m in re.find_iter(text) {
        has_match = true;
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(
            text[m.start()..m.end()].to_string(),
            highlight_style,
        ));
        last_end = m.end();
    }
    if !has_match {
        spans.push(Span::styled(text.to_string(), base_style));
    } else if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mode;
    use crate::tui::app::InputMode;
    use test_helpers::{TERM_H, TERM_W, render_to_string, test_app};

    #[test]
    fn highlighted_spans_split_on_matches() {
        let re = Regex::new("(?i)ma").unwrap();
        let mut spans = Vec::new();
        let hl = Style::default().bg(ratatui::style::Color::Cyan);
        push_highlighted_spans(&mut spans, "Malcolm X \u{2014} Maple", Style::default(), hl, Some(&re));
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["Ma", "lcolm X \u{2014} ", "Ma", "ple"]);
        assert_eq!(spans[0].style, hl);
    }

    #[test]
    fn live_map_page_layout() {
        let mut app = test_app();
        let out = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(out.contains("ROUTES"));
        assert!(out.contains("ACTIVE VEHICLES"));
        assert!(out.contains("Live map"));
        assert!(app.picker_anchor.is_some());
        assert!(app.popup_area.is_none());
    }

    #[test]
    fn popup_recorded_when_picker_focused() {
        let mut app = test_app();
        app.focus_picker();
        assert_eq!(app.input_mode, InputMode::Picker);
        let out = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(app.popup_area.is_some());
        assert!(out.contains("0/15 selected"));
    }

    #[test]
    fn rail_mode_heading_and_anchor_cleared_on_performance() {
        let mut app = test_app();
        app.set_mode(Mode::Rail);
        let out = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(out.contains("RAIL LINES"));

        app.view = View::Performance;
        app.focus_picker();
        render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(app.picker_anchor.is_none());
        assert!(app.popup_area.is_none());
    }

    #[test]
    fn chip_rows_grow_with_selection() {
        let mut app = test_app();
        assert_eq!(chip_rows(&app, 38), 1);
        app.store.set_selection(Mode::Bus, ["001", "005", "009", "025", "041"]);
        assert!(chip_rows(&app, 38) > 1);
        assert!(chip_rows(&app, 10) <= 3);
    }
}
