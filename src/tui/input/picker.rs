use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::util::unicode;

pub(super) fn handle_picker(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('a') => app.select_all_visible(),
            KeyCode::Char('x') => app.clear_visible(),
            KeyCode::Char('l') => app.clear_all(),
            KeyCode::Char('e') => app.select_entire_catalog(),
            KeyCode::Char('w') => {
                let start = unicode::word_boundary_left(&app.picker.query, app.picker.cursor);
                if start < app.picker.cursor {
                    app.picker.query.replace_range(start..app.picker.cursor, "");
                    app.picker.cursor = start;
                    app.query_changed();
                }
            }
            KeyCode::Char('u') => {
                app.picker.query.clear();
                app.picker.cursor = 0;
                app.query_changed();
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            if app.picker.open {
                app.close_picker();
            } else {
                app.blur_picker();
            }
        }
        KeyCode::Tab => app.blur_picker(),
        KeyCode::Enter => {
            if app.picker.open {
                app.toggle_highlighted();
            } else {
                app.open_picker();
            }
        }
        KeyCode::Down => {
            if app.picker.open {
                app.move_highlight(1);
            } else {
                app.open_picker();
            }
        }
        KeyCode::Up => app.move_highlight(-1),
        KeyCode::PageDown => app.move_highlight(page(app)),
        KeyCode::PageUp => app.move_highlight(-page(app)),
        KeyCode::Home => app.highlight_first(),
        KeyCode::End => app.highlight_last(),
        KeyCode::Left => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.picker.query, app.picker.cursor) {
                app.picker.cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.picker.query, app.picker.cursor) {
                app.picker.cursor = next;
            }
        }
        KeyCode::Backspace => {
            if app.picker.query.is_empty() {
                app.remove_last_chip();
                return;
            }
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.picker.query, app.picker.cursor) {
                app.picker.query.replace_range(prev..app.picker.cursor, "");
                app.picker.cursor = prev;
                app.query_changed();
            }
        }
        KeyCode::Delete => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.picker.query, app.picker.cursor) {
                app.picker.query.replace_range(app.picker.cursor..next, "");
                app.query_changed();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
            app.picker.query.insert(app.picker.cursor, c);
            app.picker.cursor += c.len_utf8();
            app.query_changed();
        }
        _ => {}
    }
}

fn page(app: &App) -> isize {
    app.picker.visible_rows.max(1) as isize
}
