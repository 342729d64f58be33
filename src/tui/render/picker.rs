use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use regex::Regex;

use crate::ops::placement::compute_placement;
use crate::tui::app::{App, InputMode};
use crate::util::unicode::{display_width, truncate_to_width};

use super::push_highlighted_spans;

/// Rows above the first list entry: top border + toolbar
pub const LIST_TOP_OFFSET: u16 = 2;

const PLACEHOLDER: &str = "Type a number or name\u{2026}";
const CHECK: &str = "\u{2713}";

/// Candidate index under screen row `row` of a popup drawn at `area`, or None
/// for the border and toolbar rows.
pub fn list_row_at(area: Rect, row: u16, scroll: usize) -> Option<usize> {
    let first = area.y + LIST_TOP_OFFSET;
    let last = area.bottom().saturating_sub(1);
    if row < first || row >= last {
        return None;
    }
    Some(scroll + (row - first) as usize)
}

/// Case-insensitive literal matcher for the current query
pub(super) fn query_regex(query: &str) -> Option<Regex> {
    let needle = query.trim();
    if needle.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", regex::escape(needle))).ok()
}

/// Render the picker input box and record it as the popup anchor
pub fn render_picker_input(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.input_mode == InputMode::Picker;
    let border = if focused {
        app.theme.highlight
    } else {
        app.theme.panel
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);

    let line = if app.picker.query.is_empty() && !focused {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        let query = &app.picker.query;
        let cursor = app.picker.cursor.min(query.len());
        let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
        let mut spans = vec![Span::styled(query[..cursor].to_string(), text_style)];
        if focused {
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
        }
        spans.push(Span::styled(query[cursor..].to_string(), text_style));
        Line::from(spans)
    };

    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(line), inner);
    app.picker_anchor = Some(area);
}

/// Chip labels for the active selection plus the overflow count
pub(super) fn chip_labels(app: &App) -> (Vec<String>, usize) {
    let limit = app.config.picker.chip_limit;
    let catalog = app.catalog();
    let selection = app.selection();
    let labels = selection
        .iter()
        .take(limit)
        .map(|id| catalog.label_for(id).to_string())
        .collect();
    (labels, selection.len().saturating_sub(limit))
}

/// Render selected entities as chips, wrapping to `area` and ending with
/// "+N more" when the selection exceeds the chip limit
pub fn render_chips(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let (labels, overflow) = chip_labels(app);
    if labels.is_empty() {
        let hint = Span::styled("All shown", Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(Paragraph::new(Line::from(hint)), area);
        return;
    }

    let chip_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.selection_bg);
    let max_label = (area.width as usize).saturating_sub(4).max(1);

    let mut items: Vec<(String, Style)> = labels
        .iter()
        .map(|label| (format!(" {} ", truncate_to_width(label, max_label)), chip_style))
        .collect();
    if overflow > 0 {
        items.push((
            format!("+{} more", overflow),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    let lines = wrap_chips(items, area.width as usize, Style::default().bg(bg));

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

/// Lay chips out left to right, one space apart, wrapping at `width`
fn wrap_chips(items: Vec<(String, Style)>, width: usize, gap: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;
    for (text, style) in items {
        let w = display_width(&text) + 1;
        if used > 0 && used + w > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        spans.push(Span::styled(text, style));
        spans.push(Span::styled(" ", gap));
        used += w;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

/// Render the candidate popup next to the recorded anchor
pub fn render_popup(frame: &mut Frame, app: &mut App) {
    app.popup_area = None;
    if !app.picker.open {
        return;
    }

    let placement = compute_placement(
        app.picker_anchor.map(Into::into),
        frame.area().height,
        app.config.picker.max_popup_height,
    );

    let total = app.candidates().len();
    // borders + toolbar + at least one list row
    let content_rows = (total.max(1) as u16).saturating_add(LIST_TOP_OFFSET + 1);
    let area = match placement.fit(content_rows) {
        Some(r) if r.height > LIST_TOP_OFFSET + 1 => r,
        _ => return,
    };

    app.picker.visible_rows = (area.height - LIST_TOP_OFFSET - 1) as usize;
    app.adjust_scroll();
    app.popup_area = Some(area);

    let bg = app.theme.background;
    let text = app.theme.text;
    let dim = app.theme.dim;
    let inner_width = area.width.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(toolbar_line(app, inner_width));

    let candidates = app.candidates();
    if candidates.is_empty() {
        lines.push(Line::from(Span::styled(
            " No matches",
            Style::default().fg(dim).bg(bg),
        )));
    }

    let search_re = query_regex(&app.picker.query);
    let match_style = Style::default()
        .fg(app.theme.search_match_fg)
        .bg(app.theme.search_match_bg);
    let selection = app.selection();

    for (i, entity) in candidates
        .iter()
        .enumerate()
        .skip(app.picker.scroll)
        .take(app.picker.visible_rows)
    {
        let highlighted = i == app.picker.highlight;
        let row_bg = if highlighted { app.theme.selection_bg } else { bg };
        let base = if highlighted {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(text).bg(row_bg)
        };

        let mark = if selection.contains(&entity.id) {
            Span::styled(
                format!(" {} ", CHECK),
                Style::default().fg(app.theme.on_time).bg(row_bg),
            )
        } else {
            Span::styled("   ", base)
        };

        let secondary = entity.secondary.as_deref().unwrap_or("");
        let secondary_w = if secondary.is_empty() {
            0
        } else {
            display_width(secondary) + 2
        };
        let label_w = inner_width.saturating_sub(3 + secondary_w);
        let label = truncate_to_width(&entity.label, label_w);

        let mut spans = vec![mark];
        push_highlighted_spans(&mut spans, &label, base, match_style, search_re.as_ref());
        let pad = label_w.saturating_sub(display_width(&label));
        spans.push(Span::styled(" ".repeat(pad), base));
        if !secondary.is_empty() {
            spans.push(Span::styled("  ", base));
            push_highlighted_spans(
                &mut spans,
                secondary,
                base.fg(dim),
                match_style,
                search_re.as_ref(),
            );
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(dim).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines).block(block).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// "n/total selected" on the left, bulk-action hints on the right
fn toolbar_line(app: &App, width: usize) -> Line<'static> {
    let bg = app.theme.background;
    let count = format!(
        " {}/{} selected",
        app.selection().len(),
        app.catalog().len()
    );
    let hint = "^A all  ^X none ";
    let mut spans = vec![Span::styled(
        count.clone(),
        Style::default().fg(app.theme.text_bright).bg(bg),
    )];
    let used = display_width(&count) + display_width(hint);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }
    Line::from(spans)
}
