use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, InputMode};
use crate::util::unicode::display_width;

/// Key hints for the current input mode
fn hints(app: &App) -> &'static str {
    match app.input_mode {
        InputMode::Navigate => "/ filter  b/r mode  s stops  x clear  1/2 page  q quit",
        InputMode::Picker => "\u{21B5} toggle  ^A all  ^X none  ^L clear  Esc close",
    }
}

/// Render the status row (bottom of screen): selection summary on the left,
/// key hints on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mode = app.mode();
    let selected = app.selection().len();
    let summary = if selected == 0 {
        format!(" {}: all {} shown", mode, app.catalog().len())
    } else {
        format!(" {}: {}/{} selected", mode, selected, app.catalog().len())
    };

    let mut spans = vec![Span::styled(
        summary.clone(),
        Style::default().fg(app.theme.text).bg(bg),
    )];

    if app.config.ui.show_key_hints {
        let hint = hints(app);
        let content_width = display_width(&summary);
        let hint_width = display_width(hint);
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{render_to_string, test_app};

    #[test]
    fn summary_reflects_selection() {
        let mut app = test_app();
        let out = render_to_string(80, 1, |frame, area| render_status_row(frame, &app, area));
        assert!(out.starts_with(" bus: all 15 shown"));
        assert!(out.ends_with("q quit"));

        app.toggle_entity("005");
        app.focus_picker();
        let out = render_to_string(80, 1, |frame, area| render_status_row(frame, &app, area));
        assert!(out.starts_with(" bus: 1/15 selected"));
        assert!(out.ends_with("Esc close"));
    }

    #[test]
    fn hints_can_be_disabled() {
        let mut app = test_app();
        app.config.ui.show_key_hints = false;
        let out = render_to_string(80, 1, |frame, area| render_status_row(frame, &app, area));
        assert_eq!(out, " bus: all 15 shown");
    }
}
