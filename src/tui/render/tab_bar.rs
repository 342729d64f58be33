use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Mode;
use crate::tui::app::{App, View};
use crate::util::unicode::display_width;

/// Render the tab bar: page tabs on the left, mode switch on the right,
/// separator line below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let sep_cols = render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1], &sep_cols);
}

/// Render tabs and return the column positions of each separator character.
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) -> Vec<usize> {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = Vec::new();
    let mut sep_cols: Vec<usize> = Vec::new();
    let sep = Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg));
    let width_of = |spans: &[Span]| -> usize { spans.iter().map(|s| display_width(&s.content)).sum() };

    spans.push(Span::styled(" ", Style::default().bg(bg)));
    spans.push(Span::styled(
        "\u{25C9}",
        Style::default().fg(app.theme.highlight).bg(bg),
    ));
    spans.push(Span::styled(" ", Style::default().bg(bg)));

    for (view, name) in [(View::LiveMap, "1 Live map"), (View::Performance, "2 Performance")] {
        spans.push(Span::styled(
            format!(" {} ", name),
            tab_style(app, app.view == view),
        ));
        sep_cols.push(width_of(&spans));
        spans.push(sep.clone());
    }

    // Mode switch, right-aligned
    let mut mode_spans: Vec<Span> = Vec::new();
    for (i, mode) in Mode::ALL.into_iter().enumerate() {
        if i > 0 {
            mode_spans.push(Span::styled(" ", Style::default().bg(bg)));
        }
        let label = match mode {
            Mode::Bus => " Bus ",
            Mode::Rail => " Rail ",
        };
        mode_spans.push(Span::styled(label, tab_style(app, app.mode() == mode)));
    }
    let used = width_of(&spans) + width_of(&mode_spans) + 1;
    let width = area.width as usize;
    if used <= width {
        spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(bg),
        ));
        spans.extend(mode_spans);
    }

    let tabs = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(tabs, area);
    sep_cols
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect, sep_cols: &[usize]) {
    let width = area.width as usize;
    let mut line: String = String::with_capacity(width * 3);
    for col in 0..width {
        if sep_cols.contains(&col) {
            line.push('\u{2534}');
        } else {
            line.push('\u{2500}');
        }
    }
    let sep_widget =
        Paragraph::new(line).style(Style::default().fg(app.theme.dim).bg(app.theme.background));
    frame.render_widget(sep_widget, area);
}

/// Style for a tab: highlighted if current, normal otherwise
fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(app.theme.background)
    }
}
